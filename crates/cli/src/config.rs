// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is an optional TOML file with:
//! - `data_dir`: Directory holding the record files (default: `.`)
//! - `issues_file`: Issues listing inside `data_dir` (default: `issues.json`)
//! - `pulls_file`: Pull request listing inside `data_dir` (default: `pulls.json`)
//! - `limit`: Default cap on the number of records listed
//!
//! The file is looked up at `--config`, then `$TRIAGE_CONFIG`, then
//! `./triage.toml`, then `<config dir>/triage/config.toml`. When none
//! exists the defaults apply.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const LOCAL_CONFIG_FILE_NAME: &str = "triage.toml";
const USER_CONFIG_DIR_NAME: &str = "triage";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Record source and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory holding the record files. A relative path in a config file
    /// is relative to the file's own directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_issues_file")]
    pub issues_file: String,
    #[serde(default = "default_pulls_file")]
    pub pulls_file: String,
    /// Default maximum number of records to list.
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_issues_file() -> String {
    "issues.json".to_string()
}

fn default_pulls_file() -> String {
    "pulls.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            issues_file: default_issues_file(),
            pulls_file: default_pulls_file(),
            limit: None,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file is found.
    ///
    /// An explicit path, from the command line or `$TRIAGE_CONFIG`, must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let explicit = explicit.map(Path::to_path_buf).or_else(env::config_path);
        let cwd = std::env::current_dir()?;
        match resolve_path(explicit.as_deref(), &cwd, dirs::config_dir().as_deref())? {
            Some(path) => Config::from_file(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Point the config at a different data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Config {
        self.data_dir = dir.into();
        self
    }

    pub fn issues_path(&self) -> PathBuf {
        self.data_dir.join(&self.issues_file)
    }

    pub fn pulls_path(&self) -> PathBuf {
        self.data_dir.join(&self.pulls_file)
    }
}

/// Decide which config file to read, if any.
///
/// Returns an error if `explicit` names a file that doesn't exist.
pub fn resolve_path(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user_config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR_NAME).join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.is_file()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
