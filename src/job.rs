//! Scheme jobs — one primary color in, two files out.
//!
//! A job runs the whole pipeline: resolve the mode, generate the scheme,
//! render both formats, then write them. Rendering finishes before the
//! first byte hits the disk, so a failing job never leaves half its output
//! behind. Debug-mode jobs produce a report and touch nothing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info, warn};

use termhue_emit::{Format, write};
use termhue_scheme::builtin::Preset;
use termhue_scheme::{DiagnosticReport, Generation, Mode, generate};

/// A single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeJob {
    /// Primary color name or hex string.
    pub primary: String,
    /// Mode name as given by the user.
    pub mode: String,
    /// Output base name; derived when `None`.
    pub name: Option<String>,
    /// Header comment for the generated files.
    pub comment: Option<String>,
    /// Hues per bucket.
    pub hue_count: u32,
}

impl SchemeJob {
    /// File base name: the explicit name, or `<primary>-<mode>` lowercased.
    #[must_use]
    pub fn output_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}-{}", self.primary.to_lowercase(), self.mode.to_lowercase()),
        }
    }

    /// Resolve the mode string.
    ///
    /// Strict: unknown names are an error. Lenient: they fall back to
    /// [`Mode::Debug`].
    fn resolve_mode(&self, strict: bool) -> Result<Mode> {
        if strict {
            Ok(self.mode.parse::<Mode>()?)
        } else {
            Ok(Mode::parse_lenient(&self.mode))
        }
    }
}

impl From<&Preset> for SchemeJob {
    fn from(preset: &Preset) -> Self {
        Self {
            primary: preset.primary.to_string(),
            mode: preset.mode.name().to_string(),
            name: Some(preset.name.to_string()),
            comment: None,
            hue_count: preset.hue_count,
        }
    }
}

/// What running a job produced.
#[derive(Debug)]
pub enum JobOutcome {
    /// Both files were written, at these paths.
    Written(Vec<PathBuf>),
    /// Debug mode: nothing written.
    Diagnostic(DiagnosticReport),
}

/// Generate `job` and write its files into `output_dir`.
///
/// # Errors
///
/// Fails on an unparseable color, too few hues, an unknown mode in strict
/// mode, or a filesystem error. No files are written when generation fails.
pub fn run_job(job: &SchemeJob, output_dir: &Path, strict: bool) -> Result<JobOutcome> {
    let name = job.output_name();
    let mode = job.resolve_mode(strict).with_context(|| format!("scheme '{name}'"))?;

    let generation = generate(&job.primary, job.hue_count, mode)
        .with_context(|| format!("scheme '{name}' from '{}'", job.primary))?;

    let scheme = match generation {
        Generation::Scheme(scheme) => scheme,
        Generation::Diagnostic(report) => {
            return Ok(JobOutcome::Diagnostic(report.with_requested_mode(&job.mode)));
        }
    };

    let rendered: Vec<(PathBuf, String)> = Format::ALL
        .iter()
        .map(|format| {
            (
                format.path_in(output_dir, &name),
                format.emit(&scheme, job.comment.as_deref()),
            )
        })
        .collect();

    // The name may carry subdirectories, so each file ensures its own parent.
    let mut written = Vec::with_capacity(rendered.len());
    for (path, text) in rendered {
        write(&text, &path)?;
        written.push(path);
    }
    Ok(JobOutcome::Written(written))
}

/// Totals for a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Jobs whose files were written.
    pub written: usize,
    /// Jobs that ran in debug mode.
    pub diagnostics: usize,
    /// Jobs that failed.
    pub failed: usize,
}

/// Run every job, independently. Failures are logged and counted; the
/// remaining jobs still run. Diagnostic reports go to stderr.
pub fn run_batch(jobs: &[SchemeJob], output_dir: &Path, strict: bool) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for job in jobs {
        match run_job(job, output_dir, strict) {
            Ok(JobOutcome::Written(paths)) => {
                info!("{}: {} files", job.output_name(), paths.len());
                summary.written += 1;
            }
            Ok(JobOutcome::Diagnostic(report)) => {
                warn!("{}: debug mode, no files written", job.output_name());
                eprint!("{report}");
                summary.diagnostics += 1;
            }
            Err(err) => {
                error!("{err:#}");
                summary.failed += 1;
            }
        }
    }
    summary
}
