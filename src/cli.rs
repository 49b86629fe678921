use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ncdiag observation-diagnostics extractor.
#[derive(Parser)]
#[command(
    name = "ncdiag",
    version,
    about = "Extract observation diagnostics from GSI netCDF diag files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Extract a variable from a single diag file.
    Extract(ExtractArgs),
    /// Aggregate a variable across a templated time series of diag files.
    Series(SeriesArgs),
}

/// Arguments for the `extract` subcommand.
#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Variable to retrieve (short, long, or derived name).
    pub variable: String,

    /// Path to the diag file.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Mask expression, e.g. "(used==1)".
    #[arg(short, long)]
    pub mask: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a YAML short-to-long name table (overrides config).
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// Write JSON output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
pub struct SeriesArgs {
    /// Variable to retrieve (short, long, or derived name).
    pub variable: String,

    /// Filename template with $yyyy/$mm/$dd/$hh placeholders.
    #[arg(short, long)]
    pub template: Option<String>,

    /// First cycle of the interval (yyyymmddhh).
    #[arg(long)]
    pub start: Option<String>,

    /// Last cycle of the interval (yyyymmddhh).
    #[arg(long)]
    pub end: Option<String>,

    /// Explicit cycle (yyyymmddhh); repeat the flag for a list.
    #[arg(long = "cycle")]
    pub cycles: Vec<String>,

    /// Hours between cycles when expanding an interval.
    #[arg(long)]
    pub hr_inc: Option<u32>,

    /// Mask expression, e.g. "(used==1)".
    #[arg(short, long)]
    pub mask: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a YAML short-to-long name table (overrides config).
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// Write JSON output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
