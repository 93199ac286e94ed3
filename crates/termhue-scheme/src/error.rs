//! Errors raised while turning a primary color into a scheme.

use termhue_color::ColorParseError;
use thiserror::Error;

/// Everything that can stop a scheme from being generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// The primary color string could not be parsed.
    #[error("invalid primary color")]
    Color(#[from] ColorParseError),

    /// A mode string that is not one of the known modes (strict parsing only).
    #[error("invalid mode '{0}' (expected one of: Complementary, Analogous, Debug)")]
    InvalidMode(String),

    /// Too few hues were generated to fill the six chromatic slots.
    #[error("insufficient hue count: a 16-color scheme needs {required} hues, got {available}")]
    InsufficientHueCount {
        /// Hues needed per bucket.
        required: usize,
        /// Hues actually available in the smallest bucket.
        available: usize,
    },

    /// The grey bucket has too few shades for slots 0, 7, 8 and 15.
    #[error("insufficient grey shades: a 16-color scheme needs {required}, got {available}")]
    InsufficientShadeCount {
        /// Shades needed in the grey bucket.
        required: usize,
        /// Shades actually present.
        available: usize,
    },

    /// Palette assembly was asked to run in debug mode.
    ///
    /// Debug mode only produces a diagnostic report; see
    /// [`DiagnosticReport`](crate::diagnostic::DiagnosticReport).
    #[error("debug mode produces a diagnostic report, not a palette")]
    DebugMode,
}
