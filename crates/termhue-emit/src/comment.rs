// SPDX-License-Identifier: MIT
//
// Comment blocks for the emitted files.
//
// Both formats accept a free-form header. Every line gets the format's
// comment marker (`! ` for X resources, `# ` for shell), blank lines and a
// trailing newline included, so nothing in the header can leak out as a
// directive.

use std::sync::LazyLock;

use regex::Regex;

static LINE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^").expect("line-start pattern is valid"));

/// Prefix every line of `comment` with `marker`.
///
/// Returns `None` for a missing or empty comment.
#[must_use]
pub fn prefix_lines(comment: Option<&str>, marker: &str) -> Option<String> {
    comment
        .filter(|c| !c.is_empty())
        .map(|c| LINE_START.replace_all(c, marker).into_owned())
}
