// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for triage-core operations.

use thiserror::Error;

/// All possible errors that can occur while parsing or loading queries.
///
/// Every query error is terminal for the query that raised it. Nothing here
/// leaves the registry or later queries in a different state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown filter: '{name}'\n  hint: valid filters are: {}", crate::filter::filter_names())]
    UnknownFilter { name: String },

    #[error("expecting separator '{expected}' but found {}", describe_found(.found))]
    ExpectedSeparator { expected: char, found: Option<char> },

    #[error("unterminated string\n  hint: string arguments end at the next ')'")]
    UnterminatedString,

    #[error("malformed argument to {filter}: expected {expected}")]
    MalformedArgument {
        filter: &'static str,
        expected: &'static str,
    },

    #[error("malformed argument to {filter}: expected {usage}, found {found} argument(s)")]
    WrongArgumentCount {
        filter: &'static str,
        usage: String,
        found: usize,
    },

    #[error("malformed argument: integer '{literal}' is out of range")]
    IntegerOutOfRange { literal: String },

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid timestamp: '{value}'\n  hint: use YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS, or RFC 3339")]
    InvalidTimestamp { value: String },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}

/// A specialized Result type for triage-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
