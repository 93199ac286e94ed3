// SPDX-License-Identifier: MIT
//
// Linux virtual console palette script.
//
// The Linux console accepts `ESC ] P n rrggbb` to redefine palette entry
// `n` (a single hex digit, 0–F). The script only emits the sequences when
// `$TERM` is `linux`, so sourcing it from a shell profile is harmless in
// graphical terminals. `clear` afterwards repaints the screen with the new
// colors.
//
// The escape is written as the two characters `\e` and expanded by
// `/bin/echo -e` at run time, so the script itself stays plain text.

use std::fmt::{self, Write};

use termhue_scheme::ColorScheme;

use crate::comment::prefix_lines;

/// File suffix for console scripts.
pub const EXTENSION: &str = ".sh";

/// Palette-set sequence for one slot, as it appears inside the script.
///
/// `hex` is `#rrggbb`; the leading `#` is dropped.
#[must_use]
pub fn palette_sequence(slot: usize, hex: &str) -> String {
    let rgb = hex.strip_prefix('#').unwrap_or(hex);
    format!("\\e]P{slot:X}{rgb}")
}

/// Write the script for `scheme` to `w`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_to(w: &mut impl Write, scheme: &ColorScheme, comment: Option<&str>) -> fmt::Result {
    w.write_str("#!/bin/sh")?;
    if let Some(header) = prefix_lines(comment, "# ") {
        write!(w, "\n{header}")?;
    }

    w.write_str("\nif [ \"$TERM\" = \"linux\" ]; then\n  /bin/echo -e \"")?;
    for (slot, hex) in scheme.iter() {
        write!(w, "\n  {}", palette_sequence(slot, hex))?;
    }
    w.write_str("\n  \"\n  # get rid of artifacts\n  clear\nfi")
}

/// Render `scheme` as a Linux console script.
#[must_use]
pub fn emit(scheme: &ColorScheme, comment: Option<&str>) -> String {
    let mut out = String::with_capacity(512);
    // Writing into a String cannot fail.
    let _ = write_to(&mut out, scheme, comment);
    out
}
