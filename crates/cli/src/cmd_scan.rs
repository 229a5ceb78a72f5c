// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `mutscan` command implementation.
//!
//! Scans the tree, then writes the sorted report to stdout.

use std::io::{self, Write};

use mutscan::cli::Cli;
use mutscan::error::ExitCode;
use mutscan::report;
use mutscan::scan;

/// Run a scan. The exit code does not depend on the number of matches.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let outcome = scan::scan(&cli.path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::emit(cli.output, outcome.matches, &mut out)?;
    out.flush()?;

    Ok(ExitCode::Success)
}
