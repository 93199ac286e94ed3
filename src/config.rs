//! Batch configuration — a TOML file listing schemes to generate.
//!
//! ```toml
//! output_dir = "output"
//! hue_count = 6
//! strict_modes = false
//!
//! [[scheme]]
//! primary = "Pink"
//! mode = "Complementary"
//! name = "pink-complementary"   # optional
//! comment = "optional header"   # optional
//! ```
//!
//! Every field has a default, so an empty file is a valid (empty) batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::job::SchemeJob;

/// Default directory for generated files, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default number of hues per bucket.
pub const DEFAULT_HUE_COUNT: u32 = 6;

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where generated files go.
    pub output_dir: PathBuf,
    /// Hue count for entries that don't set their own.
    pub hue_count: u32,
    /// Reject unknown mode names instead of falling back to debug mode.
    pub strict_modes: bool,
    /// The schemes to generate, in order.
    #[serde(rename = "scheme")]
    pub schemes: Vec<SchemeEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            hue_count: DEFAULT_HUE_COUNT,
            strict_modes: false,
            schemes: Vec::new(),
        }
    }
}

/// One `[[scheme]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeEntry {
    /// Primary color name or hex string.
    pub primary: String,
    /// Mode name; defaults to `Complementary`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Output base name; derived from primary and mode when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Header comment for both output files.
    #[serde(default)]
    pub comment: Option<String>,
    /// Overrides [`Config::hue_count`] for this entry.
    #[serde(default)]
    pub hue_count: Option<u32>,
}

fn default_mode() -> String {
    "Complementary".to_string()
}

impl Config {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    /// Turn every `[[scheme]]` entry into a job.
    #[must_use]
    pub fn jobs(&self) -> Vec<SchemeJob> {
        self.schemes
            .iter()
            .map(|entry| SchemeJob {
                primary: entry.primary.clone(),
                mode: entry.mode.clone(),
                name: entry.name.clone(),
                comment: entry.comment.clone(),
                hue_count: entry.hue_count.unwrap_or(self.hue_count),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let cfg = Config::from_toml_str(
            r##"
            output_dir = "themes"
            hue_count = 8
            strict_modes = true

            [[scheme]]
            primary = "Pink"
            mode = "Analogous"
            name = "soft"
            comment = "a soft theme"

            [[scheme]]
            primary = "#1e90ff"
            hue_count = 12
            "##,
        )
        .unwrap();

        assert_eq!(cfg.output_dir, PathBuf::from("themes"));
        assert!(cfg.strict_modes);

        let jobs = cfg.jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].mode, "Analogous");
        assert_eq!(jobs[0].name.as_deref(), Some("soft"));
        assert_eq!(jobs[0].comment.as_deref(), Some("a soft theme"));
        assert_eq!(jobs[0].hue_count, 8);
        assert_eq!(jobs[1].mode, "Complementary");
        assert_eq!(jobs[1].hue_count, 12);
        assert_eq!(jobs[1].output_name(), "#1e90ff-complementary");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
        assert!(Config::from_toml_str("[[scheme]]\nprimary = \"red\"\nshade = 1").is_err());
    }

    #[test]
    fn scheme_requires_primary() {
        assert!(Config::from_toml_str("[[scheme]]\nmode = \"Analogous\"").is_err());
    }

    #[test]
    fn load_reports_path() {
        let err = Config::load(Path::new("/nonexistent/termhue.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/termhue.toml"), "{err:#}");
    }

    #[test]
    fn load_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("termhue.toml");
        fs::write(&path, "[[scheme]]\nprimary = \"teal\"\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.schemes.len(), 1);
    }
}
