// SPDX-License-Identifier: MIT
//
// termhue color model — HSL with hex and named-color conversion.
//
// Scheme generation happens entirely on the HSL color wheel: hues are
// rotated by fractions of a full turn, luminance is scaled up and down.
// The only place sRGB shows up is at the boundary, where a color is parsed
// from a hex string or a name and where it is finally written out as
// `#rrggbb` for the emitters.
//
// Conversion pipeline:
//
//   name / hex ↔ 8-bit sRGB ↔ sRGB (0.0–1.0) ↔ HSL

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::named;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to turn a user-supplied string into a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input was empty (or only whitespace).
    #[error("empty color string")]
    Empty,

    /// The input started with `#` but was not `#rgb` or `#rrggbb`.
    #[error("invalid hex color '{0}' (expected #rgb or #rrggbb)")]
    InvalidHex(String),

    /// The input was neither a known color name nor a hex string.
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color stored as hue, saturation and luminance.
///
/// All three components are fractions in `[0, 1]`. Hue is a position on the
/// color wheel and always wraps: `1.25` becomes `0.25` and `-0.1` becomes
/// `0.9`, so the stored value is in `[0, 1)`.
///
/// # Examples
///
/// ```
/// use termhue_color::Color;
///
/// let red = Color::hsl(0.0, 1.0, 0.5);
/// assert_eq!(red.to_hex(), "#ff0000");
///
/// let pink: Color = "Pink".parse().unwrap();
/// assert_eq!(pink.to_hex(), "#ffc0cb");
///
/// // Hue wraps around the wheel.
/// assert!((Color::hsl(1.25, 1.0, 0.5).hue - 0.25).abs() < 1e-12);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Position on the color wheel: 0.0 (red) → 1/3 (green) → 2/3 (blue).
    pub hue: f64,

    /// Colorfulness: 0.0 (grey) to 1.0 (fully saturated).
    pub saturation: f64,

    /// Lightness: 0.0 (black) → 0.5 (pure hue) → 1.0 (white).
    pub luminance: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from HSL fractions.
    ///
    /// Hue is reduced modulo 1.0. Saturation and luminance are clamped to
    /// `[0, 1]`; a NaN component becomes 0.0.
    #[must_use]
    pub fn hsl(hue: f64, saturation: f64, luminance: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: unit(saturation),
            luminance: unit(luminance),
        }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (h, s, l) = srgb_to_hsl(unit(r), unit(g), unit(b));
        Self::hsl(h, s, l)
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parse a color from a web color name or a hex string.
    ///
    /// Names are matched case-insensitively (`"Pink"`, `"light sky blue"`,
    /// `"DarkGrey"`). Hex accepts `#rgb` and `#rrggbb`; a bare `rrggbb`
    /// is accepted when it isn't also a color name.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] naming the rejected input.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        if let Some((r, g, b)) = named::lookup(s) {
            return Ok(Self::rgb8(r, g, b));
        }

        if s.len() == 6 {
            if let Some(color) = parse_hex(s) {
                return Ok(color);
            }
        }

        Err(ColorParseError::UnknownName(s.to_string()))
    }

    /// Pure black.
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        luminance: 0.0,
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        luminance: 1.0,
    };

    // ─── Derived colors ──────────────────────────────────────────────────

    /// Return a copy with a different hue (wrapped to `[0, 1)`).
    #[inline]
    #[must_use]
    pub fn with_hue(self, hue: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            ..self
        }
    }

    /// Return a copy with a different luminance (clamped to `[0, 1]`).
    #[inline]
    #[must_use]
    pub fn with_luminance(self, luminance: f64) -> Self {
        Self {
            luminance: unit(luminance),
            ..self
        }
    }

    /// Return a copy with luminance multiplied by `factor` (clamped).
    #[inline]
    #[must_use]
    pub fn scale_luminance(self, factor: f64) -> Self {
        self.with_luminance(self.luminance * factor)
    }

    /// Whether this color has no visible saturation.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.saturation.abs() < 1e-9
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB components in `[0, 1]`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        hsl_to_srgb(self.hue, self.saturation, self.luminance)
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color::hsl({:.4}, {:.4}, {:.4})",
            self.hue, self.saturation, self.luminance
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.saturation - other.saturation).abs() < EPS
            && (self.luminance - other.luminance).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.hue, other.hue) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Wheel arithmetic ────────────────────────────────────────────────────────

/// Reduce a hue to `[0, 1)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 1.0, which is
/// the same point on the wheel as 0.0.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(1.0);
    if h >= 1.0 { 0.0 } else { h }
}

/// Shortest distance between two hues on the wheel, in `[0, 0.5]`.
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(1.0);
    if d > 0.5 { 1.0 - d } else { d }
}

#[inline]
fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

// ─── HSL ↔ sRGB ──────────────────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) → HSL.
fn srgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta < 1e-12 {
        // Achromatic — hue is undefined, default to 0
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if (r - max).abs() < f64::EPSILON {
        (g - b) / delta
    } else if (g - max).abs() < f64::EPSILON {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (wrap_hue(h / 6.0), s, l)
}

/// Convert HSL → sRGB (0.0–1.0).
fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }

    let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - s * l };
    let v1 = 2.0f64.mul_add(l, -v2);

    (
        hue_to_channel(v1, v2, h + 1.0 / 3.0),
        hue_to_channel(v1, v2, h),
        hue_to_channel(v1, v2, h - 1.0 / 3.0),
    )
}

/// One channel of the HSL → RGB piecewise function.
fn hue_to_channel(v1: f64, v2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if 6.0 * h < 1.0 {
        ((v2 - v1) * 6.0).mul_add(h, v1)
    } else if 2.0 * h < 1.0 {
        v2
    } else if 3.0 * h < 2.0 {
        ((v2 - v1) * (2.0 / 3.0 - h)).mul_add(6.0, v1)
    } else {
        v1
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `rgb` or `rrggbb` (no leading `#`).
fn parse_hex(s: &str) -> Option<Color> {
    let bytes = s.as_bytes();
    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Construction ─────────────────────────────────────────────────────

    #[test]
    fn hue_wraps_positive() {
        let c = Color::hsl(1.25, 0.5, 0.5);
        assert!(approx_eq(c.hue, 0.25, 1e-12), "hue = {}", c.hue);
    }

    #[test]
    fn hue_wraps_negative() {
        let c = Color::hsl(-0.1, 0.5, 0.5);
        assert!(approx_eq(c.hue, 0.9, 1e-12), "hue = {}", c.hue);
    }

    #[test]
    fn hue_never_reaches_one() {
        for h in [-1e-18, -1.0, 1.0, 2.0, -3.0 - 1e-17, 0.999_999_999_999_999_9] {
            let c = Color::hsl(h, 1.0, 0.5);
            assert!((0.0..1.0).contains(&c.hue), "input {h} → hue {}", c.hue);
        }
    }

    #[test]
    fn non_finite_components_are_sanitized() {
        let c = Color::hsl(f64::NAN, f64::INFINITY, f64::NAN);
        assert!(approx_eq(c.hue, 0.0, 1e-12));
        assert!(approx_eq(c.saturation, 1.0, 1e-12));
        assert!(approx_eq(c.luminance, 0.0, 1e-12));
    }

    #[test]
    fn luminance_is_clamped() {
        assert!(approx_eq(Color::hsl(0.3, 0.5, 1.7).luminance, 1.0, 1e-12));
        assert!(approx_eq(Color::hsl(0.3, 0.5, -0.2).luminance, 0.0, 1e-12));
    }

    // ── Conversions ──────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hex() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5).to_hex(), "#ff0000");
        assert_eq!(Color::hsl(1.0 / 3.0, 1.0, 0.5).to_hex(), "#00ff00");
        assert_eq!(Color::hsl(2.0 / 3.0, 1.0, 0.5).to_hex(), "#0000ff");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn grey_has_no_hue() {
        let c = Color::rgb8(128, 128, 128);
        assert!(c.is_achromatic());
        assert!(approx_eq(c.hue, 0.0, 1e-12));
        assert_eq!(c.to_hex(), "#808080");
    }

    #[test]
    fn rgb_to_hsl_known_values() {
        let pink = Color::rgb8(255, 192, 203);
        // h = (g - b) / delta / 6, wrapped: 1 - (11/63)/6
        assert!(approx_eq(pink.hue, 1.0 - (11.0 / 63.0) / 6.0, 1e-9), "hue = {}", pink.hue);
        assert!(approx_eq(pink.saturation, 1.0, 1e-9));
        assert!(approx_eq(pink.luminance, (1.0 + 192.0 / 255.0) / 2.0, 1e-9));
    }

    #[test]
    fn hex_roundtrip_within_quantization() {
        let samples = [
            (0.0, 1.0, 0.5),
            (0.1, 0.3, 0.2),
            (0.45, 0.8, 0.7),
            (0.75, 0.6, 0.35),
            (0.972, 1.0, 0.876),
        ];
        for (h, s, l) in samples {
            let original = Color::hsl(h, s, l);
            let back = Color::parse(&original.to_hex()).unwrap();
            let (r1, g1, b1) = original.to_rgb8();
            assert_eq!(back.to_rgb8(), (r1, g1, b1), "rgb drift for {original:?}");
            // One 8-bit step in a channel moves l by ≤ 1/255.
            assert!(approx_eq(back.luminance, l, 1.0 / 255.0), "{original:?} → {back:?}");
            assert!(hue_diff(back.hue, h) < 0.01, "{original:?} → {back:?}");
        }
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parse_long_hex() {
        assert_eq!(Color::parse("#FFC0CB").unwrap().to_hex(), "#ffc0cb");
    }

    #[test]
    fn parse_short_hex() {
        assert_eq!(Color::parse("#f0a").unwrap().to_hex(), "#ff00aa");
    }

    #[test]
    fn parse_bare_hex() {
        assert_eq!(Color::parse("1e90ff").unwrap().to_hex(), "#1e90ff");
    }

    #[test]
    fn parse_name_case_insensitive() {
        assert_eq!(Color::parse("Pink").unwrap().to_hex(), "#ffc0cb");
        assert_eq!(Color::parse("  DODGERBLUE ").unwrap().to_hex(), "#1e90ff");
        assert_eq!(Color::parse("light sky blue").unwrap().to_hex(), "#87cefa");
    }

    #[test]
    fn parse_grey_spellings() {
        let a = Color::parse("darkgray").unwrap();
        let b = Color::parse("DarkGrey").unwrap();
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Color::parse("   "), Err(ColorParseError::Empty));
        assert_eq!(
            Color::parse("#12345"),
            Err(ColorParseError::InvalidHex("#12345".to_string()))
        );
        assert_eq!(
            Color::parse("#gggggg"),
            Err(ColorParseError::InvalidHex("#gggggg".to_string()))
        );
        assert_eq!(
            Color::parse("notacolor"),
            Err(ColorParseError::UnknownName("notacolor".to_string()))
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let a: Color = "teal".parse().unwrap();
        assert_eq!(a, Color::parse("teal").unwrap());
    }

    // ── Derived colors ───────────────────────────────────────────────────

    #[test]
    fn scale_luminance_keeps_hue_and_saturation() {
        let c = Color::hsl(0.3, 0.7, 0.6).scale_luminance(2.0 / 3.0);
        assert!(approx_eq(c.hue, 0.3, 1e-12));
        assert!(approx_eq(c.saturation, 0.7, 1e-12));
        assert!(approx_eq(c.luminance, 0.4, 1e-12));
    }

    #[test]
    fn equality_ignores_hue_for_greys() {
        assert_eq!(Color::hsl(0.2, 0.0, 0.5), Color::hsl(0.7, 0.0, 0.5));
        assert_ne!(Color::hsl(0.2, 1.0, 0.5), Color::hsl(0.7, 1.0, 0.5));
    }

    #[test]
    fn hue_diff_takes_short_arc() {
        assert!(approx_eq(hue_diff(0.95, 0.05), 0.1, 1e-12));
        assert!(approx_eq(hue_diff(0.25, 0.75), 0.5, 1e-12));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", Color::hsl(0.0, 1.0, 0.5)), "#ff0000");
    }
}
