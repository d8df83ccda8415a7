use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "confguard")]
#[command(author, version, about = "Host configuration compliance scanner")]
#[command(long_about = "Evaluates declarative security controls against host \
    configuration files and command output.\n\n\
    Exit codes:\n  \
    0 - All controls passed\n  \
    1 - At least one control failed\n  \
    2 - Runtime error, or a control could not be evaluated")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading the settings file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate controls and report a verdict per control
    Scan(ScanArgs),

    /// List registered controls
    List(ListArgs),

    /// Print a control's catalog metadata
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Control ids to evaluate (default: all registered controls)
    pub controls: Vec<String>,

    /// Path to settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name-service switch file inspected by controls (overrides settings)
    #[arg(long)]
    pub nsswitch: Option<PathBuf>,

    /// Resolver file inspected by controls (overrides settings)
    #[arg(long)]
    pub resolv: Option<PathBuf>,

    /// Program queried for file attribute flags (overrides settings)
    #[arg(long)]
    pub attr_command: Option<String>,

    /// Leading argument for the attribute program (can be repeated)
    #[arg(long = "attr-arg", allow_hyphen_values = true)]
    pub attr_args: Vec<String>,

    /// Command timeout in seconds (overrides settings)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Control id to display
    pub id: String,

    /// Path to settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
