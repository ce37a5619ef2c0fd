//! `tfbackend` CLI — normalize, detect and stage Terraform backend configs.
//!
//! ## Usage
//!
//! ```sh
//! # YAML or HCL on stdin → .tfbackend HCL on stdout
//! cat backend.yaml | tfbackend normalize
//!
//! # From file to file, failing on unreadable input or a YAML list/scalar document
//! tfbackend normalize --strict -i backend.yaml -o backend.tfbackend
//!
//! # Machine-readable result
//! tfbackend normalize --json -i backend.yaml
//!
//! # Which format is this?
//! tfbackend detect -i backend.yaml
//!
//! # Write <dir>/backend.tfbackend for mounting into the Terraform container
//! tfbackend stage -i backend.yaml -d /tmp/stage
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides the `-v` level.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tfbackend_core::{Normalized, SourceFormat, TfBackendError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tfbackend",
    version,
    about = "Normalize Terraform backend configs (YAML or HCL) into .tfbackend files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a backend config to .tfbackend HCL (HCL input passes through)
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail on unreadable input and on YAML whose top level is a list or a non-string scalar
        #[arg(long)]
        strict: bool,
        /// Print a JSON object with content, extension and detected format
        #[arg(long)]
        json: bool,
    },
    /// Print the detected input format: yaml, hcl or empty
    Detect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Normalize a backend config and write it as <DIR>/<NAME>.tfbackend
    Stage {
        /// Backend config file to stage
        #[arg(short, long)]
        input: PathBuf,
        /// Directory to write the staged file into (created if missing)
        #[arg(short, long)]
        dir: PathBuf,
        /// File stem of the staged file
        #[arg(long, default_value = "backend")]
        name: String,
        /// Fail on unreadable input and on YAML whose top level is a list or a non-string scalar
        #[arg(long)]
        strict: bool,
    },
}

/// JSON shape printed by `normalize --json`.
#[derive(Serialize)]
struct Report<'a> {
    content: &'a str,
    extension: &'static str,
    format: SourceFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Normalize {
            input,
            output,
            strict,
            json,
        } => {
            let normalized = load(input.as_deref(), strict)?;
            info!(format = %normalized.format, "normalized backend config");

            let rendered = if json {
                let report = Report {
                    content: &normalized.content,
                    extension: normalized.extension(),
                    format: normalized.format,
                };
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            } else {
                normalized.content
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Detect { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", tfbackend_core::detect_format(&text));
        }
        Commands::Stage {
            input,
            dir,
            name,
            strict,
        } => {
            let normalized = load(Some(input.as_path()), strict)?;
            let path = tfbackend_core::stage_backend_config(&normalized, &dir, &name)
                .context("Failed to stage backend config")?;
            info!(path = %path.display(), format = %normalized.format, "staged backend config");
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose > 1)
        .init();
}

/// Read and normalize a backend config.
///
/// A file that cannot be read becomes empty content unless `strict` is set,
/// so a missing backend config never blocks a pipeline on its own.
fn load(path: Option<&Path>, strict: bool) -> Result<Normalized> {
    match (path, strict) {
        (Some(path), false) => Ok(tfbackend_core::load_backend_config(path)),
        (None, false) => Ok(tfbackend_core::normalize(&read_input(None)?)),
        (path, true) => normalize_checked(&read_input(path)?),
    }
}

/// Strict normalization that still lets HCL through.
///
/// Multi-line HCL is a valid YAML plain scalar, so the core strict check sees
/// it as a top-level string. Only lists and non-string scalars are rejected.
fn normalize_checked(text: &str) -> Result<Normalized> {
    match tfbackend_core::normalize_strict(text) {
        Err(TfBackendError::TopLevelShape { found: "string" }) => {
            Ok(tfbackend_core::normalize(text))
        }
        other => other.context("Failed to normalize backend config"),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
