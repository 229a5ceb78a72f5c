//! Test helpers for behavioral specifications.
//!
//! Provides high-level helpers for testing mutscan CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the mutscan binary
pub fn mutscan_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mutscan"))
}

/// Run mutscan with `args` in `dir` and return stdout, asserting exit code 0.
pub fn scan_in(dir: &Path, args: &[&str]) -> String {
    let output = mutscan_cmd()
        .args(args)
        .current_dir(dir)
        .output()
        .expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

/// Creates a directory tree from a list of (path, content) pairs.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
