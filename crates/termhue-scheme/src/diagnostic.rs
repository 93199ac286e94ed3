//! Debug-mode report.
//!
//! Instead of a palette, debug mode lists what both hue modes and a set of
//! monochrome shades would produce for the primary color. Nothing is
//! written to disk; the caller decides where the report goes.

use std::fmt;

use termhue_color::Color;

use crate::pattern::{Mode, generate_hues};
use crate::shades::{DIAGNOSTIC_FRACTIONS, generate_shades};

/// Intermediate colors for one primary, in every mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    /// The mode string that led here (`"Debug"` or an unrecognised name).
    pub requested_mode: String,
    /// The parsed primary color.
    pub primary: Color,
    /// `n` complementary hues.
    pub complementary: Vec<Color>,
    /// `n` analogous hues.
    pub analogous: Vec<Color>,
    /// Shades at [`DIAGNOSTIC_FRACTIONS`].
    pub shades: Vec<Color>,
}

impl DiagnosticReport {
    /// Build a report for `primary` with `n` hues per mode.
    #[must_use]
    pub fn new(primary: Color, n: u32, requested_mode: &str) -> Self {
        Self {
            requested_mode: requested_mode.to_string(),
            primary,
            complementary: generate_hues(primary, n, Mode::Complementary),
            analogous: generate_hues(primary, n, Mode::Analogous),
            shades: generate_shades(primary, &DIAGNOSTIC_FRACTIONS),
        }
    }

    /// Replace the mode string shown in the header.
    ///
    /// Used when a lenient mode lookup fell back to debug mode, so the
    /// report names what the user actually typed.
    #[must_use]
    pub fn with_requested_mode(mut self, requested_mode: &str) -> Self {
        requested_mode.clone_into(&mut self.requested_mode);
        self
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, label: &str, colors: &[Color]) -> fmt::Result {
    let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
    writeln!(f, "{label}: [{}]", hex.join(", "))
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Debug mode (entered with mode: {})", self.requested_mode)?;
        writeln!(f, "Primary color: {}", self.primary.to_hex())?;
        write_list(f, "Complementary colors", &self.complementary)?;
        write_list(f, "Analogous colors", &self.analogous)?;
        write_list(f, "Shades", &self.shades)
    }
}
