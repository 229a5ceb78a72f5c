// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential file tree walker.
//!
//! Uses the `ignore` crate's walker with its standard filters turned off:
//! only the fixed set of excluded directory names is pruned. Gitignore
//! files, hidden entries, and parent ignore files have no effect.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::defaults::walk::{EXCLUDED_DIR_PREFIXES, EXCLUDED_DIRS};

/// Directory pruning rules.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directory names skipped on exact match.
    pub excluded_dirs: Vec<String>,
    /// Directory names skipped when they start with one of these.
    pub excluded_prefixes: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_prefixes: EXCLUDED_DIR_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WalkerConfig {
    /// True if a directory with this name must not be descended into.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
            || self.excluded_prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

/// A file discovered during the walk.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Root joined with the path relative to it.
    pub path: PathBuf,
    /// Depth below the root (direct children are 1).
    pub depth: usize,
}

/// Counters collected while walking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub errors: usize,
}

pub struct FileWalker {
    config: WalkerConfig,
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Lazily walk `root`, yielding files in file-name order per directory.
    pub fn walk(&self, root: &Path) -> Walk {
        let rules = self.config.clone();
        let inner = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned(entry, &rules))
            .build();

        Walk {
            inner,
            stats: WalkStats::default(),
        }
    }

    /// Walk `root` to completion and return every file with the final stats.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut walk = self.walk(root);
        let files: Vec<WalkedFile> = walk.by_ref().collect();
        (files, walk.stats())
    }
}

/// The root is never pruned; below it only directories are.
fn is_pruned(entry: &DirEntry, rules: &WalkerConfig) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    is_dir && rules.is_excluded_dir(&entry.file_name().to_string_lossy())
}

/// In-progress walk. Iterating yields files; errors are counted and skipped.
pub struct Walk {
    inner: ignore::Walk,
    stats: WalkStats,
}

impl Walk {
    /// Counters so far.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }
}

impl Iterator for Walk {
    type Item = WalkedFile;

    fn next(&mut self) -> Option<WalkedFile> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("skipping unreadable entry: {}", err);
                    self.stats.errors += 1;
                    continue;
                }
            };

            if entry.depth() == 0 || !is_file(&entry) {
                continue;
            }

            self.stats.files_found += 1;
            return Some(WalkedFile {
                depth: entry.depth(),
                path: entry.into_path(),
            });
        }
    }
}

/// Regular files, plus symlinks that resolve to regular files.
fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
