// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the triage CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    /// A query failed to parse. The message comes straight from the core.
    #[error(transparent)]
    Query(#[from] triage_core::Error),

    #[error("no records found: {0} does not exist\n  hint: use -C <dir> to point at a directory containing the issues file")]
    NoRecords(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown command: /{0}\n  hint: commands are /help, /local [dir], /quit")]
    UnknownCommand(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for triage CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
