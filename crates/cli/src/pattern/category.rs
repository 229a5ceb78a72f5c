// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match categories and records.

use std::path::PathBuf;

use serde::Serialize;

/// Kind of call site detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// `.delete(` call.
    #[serde(rename = "delete")]
    DeleteCall,
    /// `.update(` call whose argument text reaches `deleted_at`.
    #[serde(rename = "update_with_deleted_at")]
    UpdateWithSoftDeleteMarker,
    /// `.eq('organization_id')` followed closely by a delete or update.
    #[serde(rename = "eq_org_with_delete_or_update")]
    ScopedFilterWithMutation,
}

impl Category {
    /// All categories in pass order.
    pub const ALL: [Category; 3] = [
        Category::DeleteCall,
        Category::UpdateWithSoftDeleteMarker,
        Category::ScopedFilterWithMutation,
    ];

    /// Label printed in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DeleteCall => "delete",
            Self::UpdateWithSoftDeleteMarker => "update_with_deleted_at",
            Self::ScopedFilterWithMutation => "eq_org_with_delete_or_update",
        }
    }

    /// Lines of context (before, after) captured around a match.
    pub fn context(&self) -> (usize, usize) {
        use crate::defaults::context::*;
        match self {
            Self::DeleteCall => (DELETE_BEFORE, DELETE_AFTER),
            Self::UpdateWithSoftDeleteMarker | Self::ScopedFilterWithMutation => {
                (MUTATION_BEFORE, MUTATION_AFTER)
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub category: Category,
    /// File the match came from, as walked.
    pub path: PathBuf,
    /// 1-based line on which the match begins.
    pub line: usize,
    /// Surrounding lines, verbatim with their terminators.
    pub snippet: String,
}
