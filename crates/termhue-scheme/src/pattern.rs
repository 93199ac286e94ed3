//! Hue generation — related hues around a primary color.
//!
//! Each mode takes a primary [`Color`] and a requested count `n` and
//! returns colors that share the primary's saturation and luminance but sit
//! at different positions on the hue wheel. Offsets that land exactly on a
//! whole turn would reproduce the primary itself, so they are skipped: the
//! primary never appears in its own hue list.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use termhue_color::Color;

use crate::error::SchemeError;

/// Largest deviation from the primary hue in analogous mode (1/5 turn, 72°).
pub const ANALOGOUS_RADIUS: f64 = 1.0 / 5.0;

/// How related hues are spread around the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `n` hues evenly distributed around the whole wheel.
    Complementary,
    /// `n` hues clustered within ±72° of the primary.
    Analogous,
    /// No palette; produce a diagnostic report instead.
    Debug,
}

impl Mode {
    /// Canonical name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Debug => "Debug",
        }
    }

    /// All modes, in the order they are listed to users.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Analogous, Self::Complementary, Self::Debug]
    }

    /// Parse a mode name, falling back to [`Mode::Debug`] for anything
    /// unrecognised.
    ///
    /// The fallback is logged with the list of valid modes, so a typo shows
    /// up as a diagnostic run rather than a silent one.
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(
                "unknown mode '{name}', falling back to Debug (modes: {})",
                mode_list()
            );
            Self::Debug
        })
    }

    /// Generate hues around `primary` in this mode.
    #[must_use]
    pub fn generate(self, primary: Color, n: u32) -> Vec<Color> {
        generate_hues(primary, n, self)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = SchemeError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| SchemeError::InvalidMode(s.to_string()))
    }
}

fn mode_list() -> String {
    Mode::all()
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate up to `n` hues related to `primary`.
///
/// The result is deterministic, every hue is in `[0, 1)`, and saturation
/// and luminance are copied from `primary`. [`Mode::Debug`] yields an empty
/// list; the debug path lives in [`crate::diagnostic`].
#[must_use]
pub fn generate_hues(primary: Color, n: u32, mode: Mode) -> Vec<Color> {
    let hues: Vec<Color> = match mode {
        Mode::Complementary => rotate(primary, complementary_offsets(n)),
        Mode::Analogous => rotate(primary, analogous_offsets(n)),
        Mode::Debug => Vec::new(),
    };
    debug!("{mode} n={n}: {} hues around {primary}", hues.len());
    hues
}

/// Offsets `k / (n + 1)` for `k` in `0..=n`: a full turn cut into `n + 1`
/// equal steps, the first of which is the primary itself.
fn complementary_offsets(n: u32) -> impl Iterator<Item = f64> {
    let steps = f64::from(n) + 1.0;
    (0..=n).map(move |k| f64::from(k) / steps)
}

/// Offsets `k · r / n` for odd-spaced `k`, symmetric around zero.
///
/// - even `n`: `k` = −(n−1), −(n−3), …, n−1
/// - odd `n`:  `k` = −n, −(n−2), …, n−2
///
/// `n = 0` produces no offsets (and never divides).
fn analogous_offsets(n: u32) -> impl Iterator<Item = f64> {
    let n_i = i64::from(n);
    let (start, stop) = if n % 2 == 0 { (1 - n_i, n_i + 1) } else { (-n_i, n_i) };
    let scale = if n == 0 { 0.0 } else { ANALOGOUS_RADIUS / f64::from(n) };
    (start..stop).step_by(2).map(move |k| k as f64 * scale)
}

/// Apply each offset to the primary hue, skipping whole turns.
fn rotate(primary: Color, offsets: impl Iterator<Item = f64>) -> Vec<Color> {
    offsets
        .filter(|&f| !is_whole_turn(f))
        .map(|f| primary.with_hue(primary.hue + f))
        .collect()
}

/// Whether an offset is an exact multiple of a full turn.
///
/// Exact comparison: only offsets that land precisely on the primary hue
/// are dropped.
#[allow(clippy::float_cmp)]
fn is_whole_turn(offset: f64) -> bool {
    offset.rem_euclid(1.0) == 0.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use termhue_color::color::hue_diff;

    fn red() -> Color {
        Color::hsl(0.0, 1.0, 0.5)
    }

    fn hues(colors: &[Color]) -> Vec<f64> {
        colors.iter().map(|c| c.hue).collect()
    }

    /// Complementary spreads n hues evenly, excluding the primary.
    #[test]
    fn complementary_even_spread() {
        let out = generate_hues(red(), 6, Mode::Complementary);
        assert_eq!(out.len(), 6);
        for (i, c) in out.iter().enumerate() {
            let expected = (i as f64 + 1.0) / 7.0;
            assert!((c.hue - expected).abs() < 1e-12, "hue {i}: {} vs {expected}", c.hue);
        }
    }

    /// The primary hue itself never comes back.
    #[test]
    fn complementary_excludes_primary() {
        for base in [0.0, 0.25, 0.5, 0.9722] {
            let primary = Color::hsl(base, 0.6, 0.4);
            for n in 0..20 {
                for c in generate_hues(primary, n, Mode::Complementary) {
                    assert!(hue_diff(c.hue, primary.hue) > 1e-9, "n={n} base={base}");
                }
            }
        }
    }

    /// Saturation and luminance are copied from the primary.
    #[test]
    fn hues_share_saturation_and_luminance() {
        let primary = Color::hsl(0.3, 0.45, 0.62);
        for mode in [Mode::Complementary, Mode::Analogous] {
            for c in generate_hues(primary, 7, mode) {
                assert!((c.saturation - 0.45).abs() < 1e-12);
                assert!((c.luminance - 0.62).abs() < 1e-12);
            }
        }
    }

    /// Never more than n hues.
    #[test]
    fn length_at_most_n() {
        for n in 0..32 {
            for mode in [Mode::Complementary, Mode::Analogous] {
                let len = generate_hues(red(), n, mode).len();
                assert!(len <= n as usize, "{mode} n={n} produced {len}");
            }
        }
    }

    /// n = 0 is empty, not a division by zero.
    #[test]
    fn zero_count_is_empty() {
        assert!(generate_hues(red(), 0, Mode::Complementary).is_empty());
        assert!(generate_hues(red(), 0, Mode::Analogous).is_empty());
    }

    /// Hues stay in [0, 1) for every base, including ones near the seam.
    #[test]
    fn all_hues_in_range() {
        for base in [0.0, 0.01, 0.5, 0.95, 0.999_999] {
            let primary = Color::hsl(base, 1.0, 0.5);
            for mode in [Mode::Complementary, Mode::Analogous] {
                for n in 1..16 {
                    for h in hues(&generate_hues(primary, n, mode)) {
                        assert!((0.0..1.0).contains(&h), "{mode} base={base} n={n} → {h}");
                    }
                }
            }
        }
    }

    /// Odd n: offsets −r, −3r/5, … and every hue within ±r of the primary.
    #[test]
    fn analogous_odd_within_radius() {
        let primary = Color::hsl(0.5, 0.8, 0.5);
        let out = generate_hues(primary, 5, Mode::Analogous);
        assert_eq!(out.len(), 5);
        let expected = [0.3, 0.38, 0.46, 0.54, 0.62];
        for (c, e) in out.iter().zip(expected) {
            assert!((c.hue - e).abs() < 1e-12, "{} vs {e}", c.hue);
            assert!(hue_diff(c.hue, 0.5) <= ANALOGOUS_RADIUS + 1e-12);
            assert!(hue_diff(c.hue, 0.5) > 1e-9, "primary hue leaked into the list");
        }
    }

    /// Even n: symmetric odd multiples of r/n, never zero.
    #[test]
    fn analogous_even_symmetric() {
        let out = generate_hues(Color::hsl(0.5, 1.0, 0.5), 6, Mode::Analogous);
        let offsets: Vec<f64> = out.iter().map(|c| c.hue - 0.5).collect();
        assert_eq!(offsets.len(), 6);
        for (o, k) in offsets.iter().zip([-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]) {
            assert!((o - k * ANALOGOUS_RADIUS / 6.0).abs() < 1e-12, "{o} for k={k}");
        }
    }

    /// Analogous hues wrap across the 0/1 seam.
    #[test]
    fn analogous_wraps_at_seam() {
        let out = generate_hues(Color::hsl(0.02, 1.0, 0.5), 5, Mode::Analogous);
        assert!(out.iter().any(|c| c.hue > 0.8), "no wrapped hue in {out:?}");
        for c in &out {
            assert!(hue_diff(c.hue, 0.02) <= ANALOGOUS_RADIUS + 1e-12);
        }
    }

    /// Debug mode never produces hues.
    #[test]
    fn debug_mode_empty() {
        assert!(generate_hues(red(), 6, Mode::Debug).is_empty());
    }

    /// Generation is deterministic.
    #[test]
    fn deterministic() {
        let a = Mode::Analogous.generate(red(), 9);
        let b = Mode::Analogous.generate(red(), 9);
        assert_eq!(a, b);
    }

    #[test]
    fn mode_parse_is_case_insensitive() {
        assert_eq!("complementary".parse::<Mode>().unwrap(), Mode::Complementary);
        assert_eq!(" Analogous ".parse::<Mode>().unwrap(), Mode::Analogous);
        assert_eq!("DEBUG".parse::<Mode>().unwrap(), Mode::Debug);
    }

    #[test]
    fn mode_parse_strict_rejects_unknown() {
        assert_eq!(
            "Nonsense".parse::<Mode>(),
            Err(SchemeError::InvalidMode("Nonsense".to_string()))
        );
    }

    #[test]
    fn mode_parse_lenient_falls_back_to_debug() {
        assert_eq!(Mode::parse_lenient("Nonsense"), Mode::Debug);
        assert_eq!(Mode::parse_lenient("Analogous"), Mode::Analogous);
    }

    #[test]
    fn mode_names_roundtrip() {
        for &mode in Mode::all() {
            assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.name());
        }
    }
}
