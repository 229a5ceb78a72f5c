// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized built-in values.
//!
//! There is no configuration file; every tunable lives here so the walker,
//! filter, and matcher agree on the same constants.

/// Directory pruning during the tree walk.
pub mod walk {
    /// Directory names that are never descended into (exact match).
    pub const EXCLUDED_DIRS: &[&str] = &[
        ".git",
        "node_modules",
        "venv",
        "__pycache__",
        ".venv",
        ".next",
        "dist",
        "build",
    ];

    /// Directory name prefixes that are never descended into.
    pub const EXCLUDED_DIR_PREFIXES: &[&str] = &[".pytest_cache"];
}

/// File eligibility.
pub mod filter {
    /// Lowercase file name suffixes that mark a file as scannable.
    pub const EXTENSIONS: &[&str] = &[
        ".js", ".ts", ".tsx", ".jsx", ".py", ".go", ".rb", ".php", ".java", ".rs", ".cs", ".swift",
    ];
}

/// Matcher windows.
pub mod context {
    /// Lines shown before and after a delete call.
    pub const DELETE_BEFORE: usize = 2;
    pub const DELETE_AFTER: usize = 2;

    /// Lines shown before and after update and scoped filter matches.
    pub const MUTATION_BEFORE: usize = 3;
    pub const MUTATION_AFTER: usize = 6;

    /// Characters after an `organization_id` filter searched for a mutation.
    pub const LOOKAHEAD_CHARS: usize = 800;
}

/// Report text.
pub mod report {
    /// Line printed when the scan finds nothing.
    pub const NO_MATCHES: &str = "No matches found for the three patterns.";

    /// Separator between report blocks.
    pub const SEPARATOR: &str = "----";
}
