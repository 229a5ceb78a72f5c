// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Textual detection of data-mutation call sites.
//!
//! Matching follows a two-level hierarchy:
//! - Multiple literals: aho-corasick rejects files with no candidate call
//! - Complex regex: regex crate runs the three passes
//!
//! Matching is surface text only. Parentheses are not balanced and no
//! grammar is parsed, so both false positives and false negatives are
//! expected; results are leads for manual review.

pub mod lines;
pub mod matcher;

mod category;

pub use category::{Category, Match};
pub use lines::LineIndex;
pub use matcher::find_matches;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
