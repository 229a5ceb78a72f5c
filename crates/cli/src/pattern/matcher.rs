// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The three detection passes.
//!
//! Each pass is a stateless scan over the whole file text. Per file, pass
//! results are concatenated in order: delete calls, soft-delete updates,
//! then scoped mutations.

use std::path::Path;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

use super::{Category, LineIndex, Match};
use crate::defaults::context::LOOKAHEAD_CHARS;

/// `.delete(` with optional whitespace before the parenthesis.
#[allow(clippy::expect_used)]
static DELETE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.delete\s*\(").expect("valid regex pattern"));

/// `.update(` with optional whitespace before the parenthesis.
#[allow(clippy::expect_used)]
static UPDATE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.update\s*\(").expect("valid regex pattern"));

/// `.update(` followed by `deleted_at` before any `)`, across lines.
///
/// Nesting is not tracked: the first `)` ends the candidate, and a
/// `deleted_at` in a later statement is attributed to the update if no `)`
/// comes between.
#[allow(clippy::expect_used)]
static UPDATE_SOFT_DELETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.update\s*\([^)]*?deleted_at").expect("valid regex pattern")
});

/// `.eq('organization_id')`. Each quote may be single or double independently.
#[allow(clippy::expect_used)]
static ORG_SCOPED_EQ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.eq\s*\(\s*['"]organization_id['"]\s*\)"#).expect("valid regex pattern")
});

/// Literals every pass needs at least one of.
#[allow(clippy::expect_used)]
static CANDIDATES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([".delete", ".update", ".eq"]).expect("valid literal set")
});

/// Run all passes over one file's text.
pub fn find_matches(path: &Path, text: &str) -> Vec<Match> {
    if !CANDIDATES.is_match(text) {
        return Vec::new();
    }

    let index = LineIndex::new(text);
    let mut results = Vec::new();

    let delete_offsets = DELETE_CALL.find_iter(text).map(|m| m.start());
    push_matches(&mut results, &index, path, Category::DeleteCall, delete_offsets);

    let update_offsets = UPDATE_SOFT_DELETE.find_iter(text).map(|m| m.start());
    push_matches(
        &mut results,
        &index,
        path,
        Category::UpdateWithSoftDeleteMarker,
        update_offsets,
    );

    let scoped_offsets = ORG_SCOPED_EQ
        .find_iter(text)
        .map(|m| m.start())
        .filter(|&start| has_mutation_ahead(text, start));
    push_matches(
        &mut results,
        &index,
        path,
        Category::ScopedFilterWithMutation,
        scoped_offsets,
    );

    results
}

fn push_matches(
    results: &mut Vec<Match>,
    index: &LineIndex<'_>,
    path: &Path,
    category: Category,
    offsets: impl Iterator<Item = usize>,
) {
    let (before, after) = category.context();
    for offset in offsets {
        let line = index.line_of(offset);
        results.push(Match {
            category,
            path: path.to_path_buf(),
            line,
            snippet: index.context(line, before, after).to_string(),
        });
    }
}

/// True if a delete or update call appears in the lookahead window at `start`.
fn has_mutation_ahead(text: &str, start: usize) -> bool {
    let window = lookahead(text, start);
    DELETE_CALL.is_match(window) || UPDATE_CALL.is_match(window)
}

/// Up to `LOOKAHEAD_CHARS` characters of `text` beginning at byte `start`.
fn lookahead(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    let end = rest
        .char_indices()
        .nth(LOOKAHEAD_CHARS)
        .map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
