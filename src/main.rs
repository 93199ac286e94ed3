// SPDX-License-Identifier: MIT
//
// termhue — terminal color schemes from one primary color.
//
// This is the main binary that wires together the crates:
//
//   termhue-color  → color parsing, HSL ↔ sRGB, hex formatting
//   termhue-scheme → hue patterns, shades, the 16-slot palette
//   termhue-emit   → Xresources and Linux console renderers, file writer
//
// Each job flows through:
//
//   primary string → Color → hues (mode) → buckets → ColorScheme
//                  → emitters → <output_dir>/<name>.{colors.Xresources,sh}
//
// Jobs come from a config file, the command line, or builtin presets, and
// run one after another. A failing job is reported and the rest still run.

mod config;
mod job;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

use termhue_scheme::builtin::{builtin_names, builtin_preset, builtin_presets};

use crate::config::Config;
use crate::job::{SchemeJob, run_batch};

#[derive(Parser, Debug)]
#[command(
    name = "termhue",
    version,
    about = "Generate terminal color schemes from one primary color"
)]
struct Cli {
    /// Primary color: a CSS color name or `#rrggbb`.
    primary: Option<String>,

    /// Hue mode: Complementary, Analogous or Debug.
    #[arg(short, long, default_value = "Complementary")]
    mode: String,

    /// Output base name (default: `<primary>-<mode>`, lowercased).
    #[arg(short, long)]
    name: Option<String>,

    /// Hues per bucket; six or more are needed for a full palette.
    #[arg(long = "hues")]
    hue_count: Option<u32>,

    /// Directory for generated files.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TOML file listing schemes to generate.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Header comment written into both files.
    #[arg(long)]
    comment: Option<String>,

    /// Treat unknown mode names as errors instead of entering debug mode.
    #[arg(long)]
    strict: bool,

    /// Generate a builtin preset (repeatable).
    #[arg(short, long = "builtin", value_name = "NAME")]
    builtins: Vec<String>,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

// ─── Job collection ─────────────────────────────────────────────────────────

/// Everything the batch needs, resolved from the CLI and config file.
struct Plan {
    jobs: Vec<SchemeJob>,
    output_dir: PathBuf,
    strict: bool,
}

fn build_plan(cli: Cli) -> Result<Plan> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut jobs = config.jobs();

    for name in &cli.builtins {
        let Some(preset) = builtin_preset(name) else {
            bail!(
                "unknown builtin '{name}' (available: {})",
                builtin_names().join(", ")
            );
        };
        jobs.push(SchemeJob::from(&preset));
    }

    if let Some(primary) = cli.primary {
        jobs.push(SchemeJob {
            primary,
            mode: cli.mode,
            name: cli.name,
            comment: cli.comment,
            hue_count: cli.hue_count.unwrap_or(config.hue_count),
        });
    }

    if jobs.is_empty() {
        info!("no schemes requested, generating builtin presets");
        jobs.extend(builtin_presets().iter().map(SchemeJob::from));
    }

    Ok(Plan {
        jobs,
        output_dir: cli.output_dir.unwrap_or(config.output_dir),
        strict: cli.strict || config.strict_modes,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    let plan = build_plan(cli).context("invalid invocation")?;
    info!(
        "{} scheme(s) → {}",
        plan.jobs.len(),
        plan.output_dir.display()
    );

    let summary = run_batch(&plan.jobs, &plan.output_dir, plan.strict);
    info!(
        "done: {} written, {} diagnostic, {} failed",
        summary.written, summary.diagnostics, summary.failed
    );

    if summary.failed > 0 {
        error!("{} scheme(s) failed", summary.failed);
        process::exit(1);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
