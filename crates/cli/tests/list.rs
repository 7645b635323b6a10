// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn list_everything_in_number_order() {
    let temp = data_dir();
    let stdout = list(&temp, &[]);
    similar_asserts::assert_eq!(
        stdout,
        "\
#1 Fix crash on startup [open] {bug} @alice
#2 Add dark mode [closed] {feature}
#3 Fix typo in docs [closed, merged]
3 records shown
"
    );
}

#[test]
fn list_query_words_are_joined() {
    let temp = data_dir();
    let stdout = list(&temp, &["closed", "not(merged)"]);
    assert!(stdout.contains("#2 Add dark mode"));
    assert!(!stdout.contains("#3"));
    assert!(stdout.ends_with("1 records shown\n"));
}

#[test]
fn list_bare_number() {
    let temp = data_dir();
    let stdout = list(&temp, &["-o", "id", "3"]);
    assert_eq!(stdout, "3\n");
}

#[test]
fn list_json_output() {
    let temp = data_dir();
    let stdout = list(&temp, &["--output", "json", "label(bug)"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["number"], 1);
    assert_eq!(records[0]["assignees"][0]["login"], "alice");
}

#[test]
fn list_limit_reports_matches() {
    let temp = data_dir();
    let stdout = list(&temp, &["-n", "1"]);
    assert!(stdout.contains("#1 "));
    assert!(!stdout.contains("#2 "));
    assert!(stdout.ends_with("1 records shown (3 matched)\n"));
}

#[test]
fn list_limit_from_config_and_no_limit() {
    let temp = data_dir();
    std::fs::write(temp.path().join("triage.toml"), "limit = 2\n").unwrap();

    let stdout = list(&temp, &[]);
    assert!(stdout.ends_with("2 records shown (3 matched)\n"));

    let stdout = list(&temp, &["--no-limit"]);
    assert!(stdout.ends_with("3 records shown\n"));
}

#[test]
fn list_with_directory_flag() {
    let temp = data_dir();
    let cwd = TempDir::new().unwrap();
    triage()
        .arg("-C")
        .arg(temp.path())
        .arg("list")
        .arg("closed_since(2021-01-01)")
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#3 Fix typo in docs"))
        .stdout(predicate::str::contains("1 records shown"));
}

#[test]
fn list_unknown_filter_fails() {
    let temp = data_dir();
    triage()
        .arg("list")
        .arg("unknownfn")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: unknown filter: 'unknownfn'"))
        .stderr(predicate::str::contains("hint: valid filters are:"));
}

#[test]
fn list_missing_separator_fails() {
    let temp = data_dir();
    triage()
        .arg("list")
        .arg("or(open closed)")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expecting separator ','"));
}

#[test]
fn list_invalid_pattern_fails() {
    let temp = data_dir();
    triage()
        .arg("list")
        .arg("title([)")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern '['"));
}

#[test]
fn list_without_records_fails() {
    let temp = TempDir::new().unwrap();
    triage()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records found"));
}

#[test]
fn list_missing_config_fails() {
    let temp = data_dir();
    triage()
        .arg("--config")
        .arg("missing.toml")
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
