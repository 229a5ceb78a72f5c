// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan pipeline: walk, filter, read, match.
//!
//! Fully sequential. Each file is read, matched, and dropped before the
//! next is visited; only the match list accumulates.

use std::path::Path;

use crate::file_reader::FileContent;
use crate::filter;
use crate::pattern::{self, Match};
use crate::walker::FileWalker;

/// Counters for one scan. Diagnostic only; never part of the report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Files yielded by the walker.
    pub files_found: usize,
    /// Eligible files that were read and matched.
    pub files_scanned: usize,
    /// Eligible files skipped because they could not be read as text.
    pub files_unreadable: usize,
    /// Traversal errors skipped by the walker.
    pub walk_errors: usize,
}

/// Everything a scan produced, in discovery order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub matches: Vec<Match>,
    pub stats: ScanStats,
}

/// Scan `root` with the default exclusions.
pub fn scan(root: &Path) -> ScanOutcome {
    scan_with(&FileWalker::default(), root)
}

/// Scan `root` using the given walker.
pub fn scan_with(walker: &FileWalker, root: &Path) -> ScanOutcome {
    if !root.is_dir() {
        tracing::warn!("scan root {} is not a readable directory", root.display());
    }

    let mut outcome = ScanOutcome::default();
    let mut walk = walker.walk(root);

    for file in walk.by_ref() {
        if !filter::is_scannable(&file.path) {
            continue;
        }
        scan_file(&file.path, &mut outcome);
    }

    let walked = walk.stats();
    outcome.stats.files_found = walked.files_found;
    outcome.stats.walk_errors = walked.errors;

    tracing::debug!(
        "scanned {} of {} files ({} unreadable, {} walk errors), {} matches",
        outcome.stats.files_scanned,
        outcome.stats.files_found,
        outcome.stats.files_unreadable,
        outcome.stats.walk_errors,
        outcome.matches.len()
    );
    outcome
}

/// Match one file into the accumulator. Unreadable files add nothing.
pub fn scan_file(path: &Path, outcome: &mut ScanOutcome) {
    let content = match FileContent::read(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("skipping {}", e);
            outcome.stats.files_unreadable += 1;
            return;
        }
    };

    outcome.stats.files_scanned += 1;
    outcome
        .matches
        .extend(pattern::find_matches(path, content.as_str()));
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
