// SPDX-License-Identifier: MIT
//
// File output.
//
// Directory creation and file writing are separate steps so each failure
// is reported against the path that caused it. Nothing is retried. Files
// are overwritten in full; no permission bits are changed, so generated
// scripts are not executable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

/// A filesystem failure, tagged with the offending path.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("cannot create directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be opened or written.
    #[error("cannot write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Make sure `dir` exists, creating it and any missing parents.
///
/// An empty path (the parent of a bare file name) means the current
/// directory and is accepted as-is.
///
/// # Errors
///
/// Returns [`WriteError::CreateDir`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), WriteError> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    debug!("creating directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with `text`. The parent directory must already exist.
///
/// # Errors
///
/// Returns [`WriteError::Write`] if the file cannot be opened or written.
pub fn write_file(path: &Path, text: &str) -> Result<(), WriteError> {
    fs::write(path, text).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Ensure the parent directory of `path` exists, then write `text` to it.
///
/// # Errors
///
/// See [`ensure_dir`] and [`write_file`].
pub fn write(text: &str, path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    write_file(path, text)
}
