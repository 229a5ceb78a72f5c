// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! The block layout is grepped by downstream tooling; keep it byte-stable.

use std::io::Write;

use crate::defaults::report::{NO_MATCHES, SEPARATOR};
use crate::pattern::Match;

use super::ReportFormatter;

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn Write, matches: &[Match]) -> anyhow::Result<()> {
        if matches.is_empty() {
            writeln!(writer, "{NO_MATCHES}")?;
            return Ok(());
        }

        for m in matches {
            writeln!(writer, "{SEPARATOR}")?;
            writeln!(writer, "TYPE: {}", m.category.label())?;
            writeln!(writer, "FILE: {}", m.path.display())?;
            writeln!(writer, "LINE: {}", m.line)?;
            writeln!(writer, "SNIPPET:")?;
            writeln!(writer, "{}", m.snippet)?;
        }
        writeln!(writer, "{SEPARATOR}")?;
        writeln!(writer, "Found {} matches.", matches.len())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
