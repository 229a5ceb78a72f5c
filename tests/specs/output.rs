// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for report output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use similar_asserts::assert_eq;

use crate::prelude::*;

/// > Text output is a sequence of fixed blocks followed by a count summary.
#[test]
fn text_output_matches_golden() {
    let stdout = scan_in(&fixture("tenant-app"), &[]);
    assert_eq!(stdout.as_str(), include_str!("golden/tenant-app.txt"));
}

/// > JSON output lists the same sorted matches.
#[test]
fn json_output_structure() {
    let stdout = scan_in(&fixture("tenant-app"), &["--output", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");

    assert_eq!(json["total"], 6);
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 6);

    let keys: Vec<(&str, u64, &str)> = matches
        .iter()
        .map(|m| {
            (
                m["file"].as_str().unwrap(),
                m["line"].as_u64().unwrap(),
                m["type"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("./src/invoices.ts", 6, "update_with_deleted_at"),
            ("./src/invoices.ts", 13, "eq_org_with_delete_or_update"),
            ("./src/invoices.ts", 14, "delete"),
            ("./src/legacy/Cleanup.JS", 1, "delete"),
            ("./src/users.py", 2, "update_with_deleted_at"),
            ("./src/users.py", 8, "delete"),
        ]
    );
}

/// > JSON output for an empty scan is an empty list.
#[test]
fn json_output_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let stdout = scan_in(tmp.path(), &["-o", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json, serde_json::json!({ "matches": [], "total": 0 }));
}

/// > The report never leaks diagnostics into stdout.
#[test]
fn quiet_by_default() {
    mutscan_cmd()
        .current_dir(fixture("tenant-app"))
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
