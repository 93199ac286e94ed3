//! # termhue-scheme — 16-color terminal schemes from one primary color
//!
//! One parameter shift (primary color, mode, hue count) produces an entirely
//! new palette. No randomness, no state: the same request always yields the
//! same scheme.
//!
//! # Architecture
//!
//! ```text
//! primary color + mode + n
//!     │
//!     ▼
//! pattern.rs:    n related hues (complementary or analogous)
//! shades.rs:     luminance variants of the primary
//!     │
//!     ▼
//! palette.rs:    dark / bright / grey buckets
//!     │
//!     ▼
//! scheme.rs:     fixed 16-slot layout → ColorScheme
//! ```
//!
//! Debug mode skips the palette and returns a
//! [`DiagnosticReport`](diagnostic::DiagnosticReport) instead.
//!
//! # Color Space
//!
//! All generation happens in HSL with components in `[0, 1]`. Colors are
//! rendered to `#rrggbb` when the scheme is assembled; emitters never do
//! color math.

// Mathematical code uses small integer-to-float casts (step indices).
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/luminance variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod diagnostic;
pub mod error;
pub mod palette;
pub mod pattern;
pub mod scheme;
pub mod shades;

pub use diagnostic::DiagnosticReport;
pub use error::SchemeError;
pub use palette::{PaletteBuckets, assemble};
pub use pattern::{Mode, generate_hues};
pub use scheme::{ColorScheme, Generation, assemble_scheme, generate, generate_from};
pub use shades::generate_shades;
