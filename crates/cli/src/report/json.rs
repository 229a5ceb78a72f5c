// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde::Serialize;

use crate::pattern::{Category, Match};

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    matches: Vec<JsonMatch<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    #[serde(rename = "type")]
    category: Category,
    file: String,
    line: usize,
    snippet: &'a str,
}

impl<'a> From<&'a Match> for JsonMatch<'a> {
    fn from(m: &'a Match) -> Self {
        Self {
            category: m.category,
            file: m.path.display().to_string(),
            line: m.line,
            snippet: &m.snippet,
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn Write, matches: &[Match]) -> anyhow::Result<()> {
        let report = JsonReport {
            matches: matches.iter().map(JsonMatch::from).collect(),
            total: matches.len(),
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
