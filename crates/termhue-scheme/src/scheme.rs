//! The 16-slot terminal color scheme and the top-level generator.
//!
//! Slot layout (normal intensity on the left, bright on the right):
//!
//! | color   | normal    | bright     |
//! |---------|-----------|------------|
//! | black   | 0: grey 3 | 8: grey 2  |
//! | red     | 1: dark 0 | 9: bright 0  |
//! | green   | 2: dark 1 | 10: bright 1 |
//! | yellow  | 3: dark 2 | 11: bright 2 |
//! | blue    | 4: dark 3 | 12: bright 3 |
//! | magenta | 5: dark 4 | 13: bright 4 |
//! | cyan    | 6: dark 5 | 14: bright 5 |
//! | white   | 7: grey 1 | 15: grey 0 |

use log::{debug, info};
use termhue_color::Color;

use crate::diagnostic::DiagnosticReport;
use crate::error::SchemeError;
use crate::palette::PaletteBuckets;
use crate::pattern::Mode;

/// Number of slots in a terminal palette.
pub const SLOT_COUNT: usize = 16;

/// Hues each of `dark` and `bright` must provide (slots 1–6 and 9–14).
pub const REQUIRED_HUES: usize = 6;

/// Number of grey shades a scheme reads (slots 0, 7, 8, 15).
const REQUIRED_GREYS: usize = 4;

/// The eight base color names, in slot order.
pub const SLOT_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A complete 16-color terminal palette as `#rrggbb` strings.
///
/// Slots 0–7 are normal intensity, 8–15 bright, both following
/// [`SLOT_NAMES`]. Every slot is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    slots: [String; SLOT_COUNT],
}

impl ColorScheme {
    /// Map buckets onto the fixed slot layout.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InsufficientHueCount`] when `dark` or
    /// `bright` has fewer than six entries, and
    /// [`SchemeError::InsufficientShadeCount`] when `grey` has fewer than
    /// four.
    pub fn from_buckets(buckets: &PaletteBuckets) -> Result<Self, SchemeError> {
        let available = buckets.dark.len().min(buckets.bright.len());
        if available < REQUIRED_HUES {
            return Err(SchemeError::InsufficientHueCount {
                required: REQUIRED_HUES,
                available,
            });
        }
        if buckets.grey.len() < REQUIRED_GREYS {
            return Err(SchemeError::InsufficientShadeCount {
                required: REQUIRED_GREYS,
                available: buckets.grey.len(),
            });
        }

        let grey = |i: usize| buckets.grey[i].to_hex();
        let dark = |i: usize| buckets.dark[i].to_hex();
        let bright = |i: usize| buckets.bright[i].to_hex();

        Ok(Self {
            slots: [
                grey(3),
                dark(0),
                dark(1),
                dark(2),
                dark(3),
                dark(4),
                dark(5),
                grey(1),
                grey(2),
                bright(0),
                bright(1),
                bright(2),
                bright(3),
                bright(4),
                bright(5),
                grey(0),
            ],
        })
    }

    /// The hex color in `slot`, or `None` past slot 15.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// All slots in order, as `(index, hex)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots.iter().map(String::as_str).enumerate()
    }

    /// All 16 hex strings in slot order.
    #[must_use]
    pub const fn slots(&self) -> &[String; SLOT_COUNT] {
        &self.slots
    }

    /// Default text color (white, slot 7).
    #[must_use]
    pub fn foreground(&self) -> &str {
        &self.slots[7]
    }

    /// Default background color (black, slot 0).
    #[must_use]
    pub fn background(&self) -> &str {
        &self.slots[0]
    }

    /// Cursor color (same as the foreground).
    #[must_use]
    pub fn cursor(&self) -> &str {
        self.foreground()
    }
}

impl std::ops::Index<usize> for ColorScheme {
    type Output = str;

    fn index(&self, slot: usize) -> &str {
        &self.slots[slot]
    }
}

/// Free-function form of [`ColorScheme::from_buckets`].
///
/// # Errors
///
/// See [`ColorScheme::from_buckets`].
pub fn assemble_scheme(buckets: &PaletteBuckets) -> Result<ColorScheme, SchemeError> {
    ColorScheme::from_buckets(buckets)
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// What a generation request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    /// A full palette, ready for the emitters.
    Scheme(ColorScheme),
    /// Debug mode: a report of the intermediate colors and no palette.
    Diagnostic(DiagnosticReport),
}

impl Generation {
    /// The scheme, if this is not a diagnostic run.
    #[must_use]
    pub const fn scheme(&self) -> Option<&ColorScheme> {
        match self {
            Self::Scheme(s) => Some(s),
            Self::Diagnostic(_) => None,
        }
    }
}

/// Parse `primary` and turn it into a scheme using `n` hues.
///
/// [`Mode::Debug`] short-circuits to a [`DiagnosticReport`].
///
/// # Errors
///
/// - [`SchemeError::Color`] if `primary` cannot be parsed
/// - [`SchemeError::InsufficientHueCount`] if `n` yields fewer than six hues
pub fn generate(primary: &str, n: u32, mode: Mode) -> Result<Generation, SchemeError> {
    let color = Color::parse(primary)?;
    generate_from(color, n, mode)
}

/// [`generate`] for an already-parsed primary color.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_from(primary: Color, n: u32, mode: Mode) -> Result<Generation, SchemeError> {
    if mode == Mode::Debug {
        info!("debug mode for {primary}: reporting instead of generating");
        return Ok(Generation::Diagnostic(DiagnosticReport::new(primary, n, mode.name())));
    }

    let buckets = PaletteBuckets::assemble(primary, n, mode)?;
    let scheme = ColorScheme::from_buckets(&buckets)?;
    debug!("scheme for {primary} ({mode}): {:?}", scheme.slots());
    Ok(Generation::Scheme(scheme))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
