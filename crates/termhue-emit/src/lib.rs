// SPDX-License-Identifier: MIT
//
// termhue-emit — turns a ColorScheme into files.
//
// Two text formats, both pure string builders:
//
//   xresources → `<name>.colors.Xresources`, an X resource fragment
//   console    → `<name>.sh`, a Linux console palette script
//
// and one side-effecting step, `writer`, which creates the output directory
// and overwrites the target file.

pub mod comment;
pub mod console;
pub mod writer;
pub mod xresources;

use std::path::{Path, PathBuf};

use termhue_scheme::ColorScheme;

pub use writer::{WriteError, ensure_dir, write, write_file};

/// An output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// X resource database fragment.
    Xresources,
    /// Linux virtual console palette script.
    LinuxConsole,
}

impl Format {
    /// Every format, in the order files are written.
    pub const ALL: [Self; 2] = [Self::Xresources, Self::LinuxConsole];

    /// File-name suffix, including the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xresources => xresources::EXTENSION,
            Self::LinuxConsole => console::EXTENSION,
        }
    }

    /// Render `scheme` in this format.
    #[must_use]
    pub fn emit(self, scheme: &ColorScheme, comment: Option<&str>) -> String {
        match self {
            Self::Xresources => xresources::emit(scheme, comment),
            Self::LinuxConsole => console::emit(scheme, comment),
        }
    }

    /// `<dir>/<name><extension>`.
    #[must_use]
    pub fn path_in(self, dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}{}", self.extension()))
    }
}
