// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file text loading.
//!
//! Files are read fully into memory and decoded as UTF-8. Line endings are
//! normalized to `\n` so offsets and line numbers agree on every platform.

use std::fs;
use std::path::Path;

use crate::error::ReadError;

/// Text content of one source file.
#[derive(Debug)]
pub struct FileContent {
    text: String,
}

impl FileContent {
    /// Read and decode a file. The handle is released before returning.
    pub fn read(path: &Path) -> Result<Self, ReadError> {
        let bytes = fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ReadError::Encoding {
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_text(text))
    }

    /// Wrap already-loaded text, applying the same newline normalization.
    pub fn from_text(text: String) -> Self {
        Self {
            text: normalize_newlines(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Convert `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(text: String) -> String {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
