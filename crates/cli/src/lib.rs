// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mutscan: textual audit of data-mutation call sites.
//!
//! The pipeline is linear: [`walker`] enumerates files, [`filter`] keeps
//! source extensions, [`file_reader`] loads text, [`pattern`] runs the three
//! detection passes, and [`report`] prints the sorted result.

pub mod cli;
pub mod defaults;
pub mod error;
pub mod file_reader;
pub mod filter;
pub mod pattern;
pub mod report;
pub mod scan;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
