//! Command-line interface definitions for `resdoc`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Log output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Formats for the coverage report printed by `check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One line per finding followed by a summary.
    #[default]
    Text,
    /// The full run report as a JSON document.
    Json,
}

/// Parsed CLI arguments for `resdoc`.
#[derive(Debug, Parser)]
#[command(name = "resdoc")]
#[command(about = "Generate and check Markdown documentation for resource types")]
#[command(version)]
pub struct Args {
    /// Configuration file to load instead of `resdoc.toml`.
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Directory holding descriptor JSON files.
    #[arg(long, global = true, value_name = "path")]
    pub input_dir: Option<Utf8PathBuf>,
    /// Log output format.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `resdoc` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render Markdown for every descriptor.
    Generate(GenerateArgs),
    /// Report documentation coverage and fail on stale references.
    Check(CheckArgs),
}

/// Flags for `resdoc generate`.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct GenerateArgs {
    /// Output directory for generated Markdown.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Fail instead of replacing existing files.
    #[arg(long = "no-overwrite")]
    pub is_overwrite_disabled: bool,
}

/// Flags for `resdoc check`.
#[derive(Debug, Clone, Copy, Default, ClapArgs)]
pub struct CheckArgs {
    /// Report format.
    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,
}
