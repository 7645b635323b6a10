// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const ISSUES_JSON: &str = r#"[
    {"number": 3, "title": "Fix typo in docs", "state": "closed", "closed_at": "2021-06-01T12:00:00Z",
     "labels": [], "assignees": [],
     "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/3"}},
    {"number": 1, "title": "Fix crash on startup", "body": "Segfault when config is missing",
     "state": "open", "closed_at": null,
     "labels": [{"name": "bug"}], "assignees": [{"login": "alice"}]},
    {"number": 2, "title": "Add dark mode", "state": "closed", "closed_at": "2020-01-01T00:00:00Z",
     "labels": [{"name": "feature"}], "assignees": null}
]"#;

pub const PULLS_JSON: &str = r#"[
    {"url": "https://api.github.com/repos/o/r/pulls/3", "number": 3, "merged_at": "2021-06-01T12:00:00Z"}
]"#;

/// The binary, isolated from any config in the environment.
pub fn triage() -> Command {
    let mut cmd = cargo_bin_cmd!("triage");
    cmd.env_remove("TRIAGE_CONFIG")
        .env_remove("TRIAGE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A temp directory holding the sample listings.
pub fn data_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("issues.json"), ISSUES_JSON).unwrap();
    fs::write(temp.path().join("pulls.json"), PULLS_JSON).unwrap();
    temp
}

/// Run `triage list <query>` in `temp` and return stdout.
pub fn list(temp: &TempDir, query: &[&str]) -> String {
    let output = triage()
        .arg("list")
        .args(query)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "list {:?} failed", query);
    String::from_utf8_lossy(&output.stdout).into_owned()
}
