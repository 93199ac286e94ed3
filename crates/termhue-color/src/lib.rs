// SPDX-License-Identifier: MIT
//
// termhue-color — the color model behind termhue's scheme generator.
//
// Colors live on the HSL wheel with every component as a fraction in
// [0, 1]. Users hand us names ("Pink") or hex strings ("#ffc0cb"); the
// emitters want "#rrggbb". Everything in between is hue rotation and
// luminance scaling, which HSL makes trivial.

// Channel names (r, g, b, h, s, l) follow the usual color-math notation.
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod named;

pub use color::{Color, ColorParseError};
