//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Flag delete, soft-delete update, and tenant-scoped mutation call sites
#[derive(Parser, Debug)]
#[command(name = "mutscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Log skipped files and scan counters to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
