// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report emission.
//!
//! Matches are sorted by (path, line) and rendered as text or JSON.

mod json;
mod text;

use std::io::Write;

use crate::cli::OutputFormat;
use crate::pattern::Match;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for rendering sorted matches into an output format.
pub trait ReportFormatter {
    /// Write the report for `matches` (already sorted) to `writer`.
    fn format_to(&self, writer: &mut dyn Write, matches: &[Match]) -> anyhow::Result<()>;

    /// Render the report into a string.
    fn format(&self, matches: &[Match]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.format_to(&mut buf, matches)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Stable sort by path then line. Ties keep discovery order.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(|a, b| {
        a.path
            .as_os_str()
            .cmp(b.path.as_os_str())
            .then(a.line.cmp(&b.line))
    });
}

/// Sort `matches` and write them in the requested format.
pub fn emit(
    format: OutputFormat,
    mut matches: Vec<Match>,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    sort_matches(&mut matches);

    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format_to(writer, &matches)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
