// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte offset to line mapping and context extraction.

/// Start offsets of every line in a text, built once per file.
pub struct LineIndex<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        Self { text, starts }
    }

    /// Number of lines. A trailing newline does not start a new line.
    pub fn line_count(&self) -> usize {
        match self.text.len() {
            0 => 0,
            len if self.starts.last() == Some(&len) => self.starts.len() - 1,
            _ => self.starts.len(),
        }
    }

    /// 1-based line containing `offset`: newlines before it, plus one.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }

    /// Lines `line - before ..= line + after`, clipped to the text.
    ///
    /// Each line keeps its own terminator, so the result is a verbatim slice.
    pub fn context(&self, line: usize, before: usize, after: usize) -> &'a str {
        let count = self.line_count();
        if count == 0 {
            return "";
        }
        let first = line.saturating_sub(before).max(1);
        let last = line.saturating_add(after).min(count);
        if first > last {
            return "";
        }

        let start = self.starts[first - 1];
        let end = self.starts.get(last).copied().unwrap_or(self.text.len());
        &self.text[start..end]
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
