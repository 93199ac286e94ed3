//! Monochrome shades — luminance variants of a single hue.

use log::warn;
use termhue_color::Color;

/// Luminance fractions used by the diagnostic report: normal, dark,
/// darker, darkest.
pub const DIAGNOSTIC_FRACTIONS: [f64; 4] = [1.0, 2.0 / 3.0, 1.0 / 3.0, 0.05];

/// A luminance value forced back into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Checked {
    pub value: f64,
    pub clamped: bool,
}

/// Clamp a computed luminance to `[0, 1]`.
///
/// `+inf` maps to 1.0; `-inf` and NaN map to 0.0.
pub(crate) fn check_luminance(raw: f64) -> Checked {
    if (0.0..=1.0).contains(&raw) {
        return Checked {
            value: raw,
            clamped: false,
        };
    }
    let value = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
    Checked {
        value,
        clamped: true,
    }
}

/// One shade per fraction: `luminance = primary.luminance * fraction`,
/// hue and saturation taken from `primary`.
///
/// Results outside `[0, 1]` are clamped and logged.
#[must_use]
pub fn generate_shades(primary: Color, fractions: &[f64]) -> Vec<Color> {
    shades_counted(primary, fractions).0
}

/// [`generate_shades`], also returning how many values had to be clamped.
pub(crate) fn shades_counted(primary: Color, fractions: &[f64]) -> (Vec<Color>, usize) {
    let mut clamped = 0;
    let shades = fractions
        .iter()
        .enumerate()
        .map(|(i, &fraction)| {
            let raw = primary.luminance * fraction;
            let checked = check_luminance(raw);
            if checked.clamped {
                clamped += 1;
                warn!("shade {i}: luminance {raw} out of range, clamped to {}", checked.value);
            }
            primary.with_luminance(checked.value)
        })
        .collect();
    (shades, clamped)
}
