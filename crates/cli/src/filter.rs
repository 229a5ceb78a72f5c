// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extension-based file eligibility.

use std::path::Path;

use crate::defaults::filter::EXTENSIONS;

/// True if the lowercased file name ends with a scannable extension.
///
/// No content sniffing is done; the name alone decides.
pub fn is_scannable(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
