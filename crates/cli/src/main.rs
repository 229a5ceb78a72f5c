// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mutscan::cli::Cli;
use mutscan::error::ExitCode;

mod cmd_scan;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_scan::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("mutscan: {e:#}");
            ExitCode::Error.into()
        }
    }
}

/// Diagnostics go to stderr; stdout carries only the report.
fn init_logging(verbose: bool) {
    let filter = if verbose { "mutscan=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
