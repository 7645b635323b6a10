// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn directory_overrides_configured_data_dir() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("triage.toml");
    fs::write(&path, "data_dir = \"records\"\nlimit = 3\n").unwrap();

    let config = load_config(Some(&path), Some(PathBuf::from("/elsewhere"))).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/elsewhere"));
    assert_eq!(config.limit, Some(3));
}

#[test]
fn config_data_dir_kept_without_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("triage.toml");
    fs::write(&path, "data_dir = \"records\"\n").unwrap();

    let config = load_config(Some(&path), None).unwrap();
    assert_eq!(config.data_dir, temp.path().join("records"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let result = load_config(Some(&temp.path().join("nope.toml")), None);
    assert!(matches!(result, Err(Error::ConfigNotFound(_))));
}

#[test]
fn filters_command_runs() {
    let cli = Cli::try_parse_from(["triage", "filters"]).unwrap();
    assert!(run(cli).is_ok());
}

#[test]
fn list_with_bad_query_fails_before_loading() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("triage.toml");
    fs::write(&config, "").unwrap();

    let cli = Cli::try_parse_from([
        "triage",
        "--config",
        config.to_str().unwrap(),
        "-C",
        temp.path().to_str().unwrap(),
        "list",
        "unknownfn",
    ])
    .unwrap();
    let err = run(cli).unwrap_err();
    assert!(matches!(
        err,
        Error::Query(triage_core::Error::UnknownFilter { .. })
    ));
}
