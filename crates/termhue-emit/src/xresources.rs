// SPDX-License-Identifier: MIT
//
// X resource database fragment.
//
// Layout, after an optional `! `-prefixed header:
//
//   (blank line)
//   ! special
//   *.foreground: <slot 7>
//   *.background: <slot 0>
//   *.cursorColor: <slot 7>
//
//   ! black
//   *.color0: <slot 0>
//   *.color8: <slot 8>
//   ... one block per base color through white.
//
// The result is meant to be `#include`d from ~/.Xresources.

use std::fmt::{self, Write};

use termhue_scheme::ColorScheme;
use termhue_scheme::scheme::SLOT_NAMES;

use crate::comment::prefix_lines;

/// File suffix for X resource fragments.
pub const EXTENSION: &str = ".colors.Xresources";

/// Write the fragment for `scheme` to `w`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_to(w: &mut impl Write, scheme: &ColorScheme, comment: Option<&str>) -> fmt::Result {
    if let Some(header) = prefix_lines(comment, "! ") {
        w.write_str(&header)?;
    }

    write!(
        w,
        "\n\n! special\n*.foreground: {}\n*.background: {}\n*.cursorColor: {}\n",
        scheme.foreground(),
        scheme.background(),
        scheme.cursor()
    )?;

    for (i, name) in SLOT_NAMES.iter().enumerate() {
        write!(
            w,
            "\n! {name}\n*.color{i}: {}\n*.color{}: {}\n",
            &scheme[i],
            i + 8,
            &scheme[i + 8]
        )?;
    }
    Ok(())
}

/// Render `scheme` as an X resource fragment.
#[must_use]
pub fn emit(scheme: &ColorScheme, comment: Option<&str>) -> String {
    let mut out = String::with_capacity(512);
    // Writing into a String cannot fail.
    let _ = write_to(&mut out, scheme, comment);
    out
}
