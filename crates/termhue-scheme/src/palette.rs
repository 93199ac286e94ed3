//! Palette buckets — the bridge from hue lists to 16 concrete slots.
//!
//! A primary color is split into three buckets:
//!
//! - `bright`: the hue list for the requested mode, dimmed to 2/3 luminance
//! - `dark`: the same hues at luminance `(1/6) / l`
//! - `grey`: four monochrome shades of the primary
//!
//! The grey and dark formulas divide where a scale factor would multiply
//! (`fraction / hue` for greys, `1/6 / luminance` for darks). Generated
//! files must stay identical to previously generated schemes, so the
//! formulas are kept as they are. They regularly leave `[0, 1]`
//! (and go non-finite for a hue or luminance of exactly 0), so every value
//! is clamped here, logged, and counted in [`PaletteBuckets::clamped`].

use log::{debug, warn};
use termhue_color::Color;

use crate::error::SchemeError;
use crate::pattern::{Mode, generate_hues};
use crate::shades::{check_luminance, shades_counted};

/// Luminance numerator shared by the grey bucket and the dark bucket.
pub const DARK_LUMINANCE: f64 = 1.0 / 6.0;

/// Factor applied to every bright hue's luminance.
pub const BRIGHT_SCALE: f64 = 2.0 / 3.0;

/// The three color groups a scheme is assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteBuckets {
    /// Low-intensity variants of each bright hue (slots 1–6).
    pub dark: Vec<Color>,
    /// The generated hues at 2/3 luminance (slots 9–14).
    pub bright: Vec<Color>,
    /// Four shades of the primary, lightest first (slots 0, 7, 8, 15).
    pub grey: Vec<Color>,
    /// How many luminance values had to be clamped into `[0, 1]`.
    pub clamped: usize,
}

impl PaletteBuckets {
    /// Split `primary` into dark, bright and grey buckets.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::DebugMode`] for [`Mode::Debug`], which has no
    /// palette.
    pub fn assemble(primary: Color, n: u32, mode: Mode) -> Result<Self, SchemeError> {
        if mode == Mode::Debug {
            return Err(SchemeError::DebugMode);
        }

        let (grey, grey_clamped) = shades_counted(primary, &grey_fractions(primary));
        let mut bright = generate_hues(primary, n, mode);

        let mut dark_clamped = 0;
        let dark: Vec<Color> = bright
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let raw = DARK_LUMINANCE / c.luminance;
                let checked = check_luminance(raw);
                if checked.clamped {
                    dark_clamped += 1;
                    warn!("dark {i}: luminance {raw} out of range, clamped to {}", checked.value);
                }
                Color::hsl(c.hue, c.saturation, checked.value)
            })
            .collect();

        for b in &mut bright {
            *b = b.scale_luminance(BRIGHT_SCALE);
        }

        let clamped = grey_clamped + dark_clamped;
        debug!(
            "buckets for {primary} ({mode}, n={n}): {} dark, {} bright, {} grey, {clamped} clamped",
            dark.len(),
            bright.len(),
            grey.len()
        );

        Ok(Self {
            dark,
            bright,
            grey,
            clamped,
        })
    }
}

/// Grey luminance fractions: `(0.99, l, 1/6, 0.01)`, each divided by the
/// primary's hue.
#[must_use]
pub fn grey_fractions(primary: Color) -> [f64; 4] {
    [0.99, primary.luminance, DARK_LUMINANCE, 0.01].map(|l| l / primary.hue)
}

/// Free-function form of [`PaletteBuckets::assemble`].
///
/// # Errors
///
/// See [`PaletteBuckets::assemble`].
pub fn assemble(primary: Color, n: u32, mode: Mode) -> Result<PaletteBuckets, SchemeError> {
    PaletteBuckets::assemble(primary, n, mode)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
