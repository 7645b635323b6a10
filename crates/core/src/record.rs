// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record types for issues and pull requests.
//!
//! Records mirror the shape of the GitHub issues API closely enough to be
//! deserialized straight from its JSON. Only the fields that filters or
//! output formatting look at are modelled; everything else is ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single filterable issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Issue number, unique within a repository.
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// `open` or `closed` as reported by the source.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    /// Author of the issue.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assignees: Vec<User>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,
    /// Closing timestamp, kept as text so malformed values still read as closed.
    #[serde(default)]
    pub closed_at: Option<String>,
    /// Linked pull request, either a bare reference or the full pull object.
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

impl Record {
    /// Creates a bare record with only a number set.
    pub fn new(number: u64) -> Self {
        Record {
            number,
            title: None,
            body: None,
            state: None,
            html_url: None,
            user: None,
            assignees: Vec::new(),
            labels: Vec::new(),
            closed_at: None,
            pull_request: None,
        }
    }

    /// Returns true if the record carries a non-empty closing timestamp.
    pub fn is_closed(&self) -> bool {
        self.closed_at.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns the closing time, if present and parseable.
    pub fn closed_time(&self) -> Option<DateTime<Utc>> {
        self.closed_at.as_deref().and_then(parse_timestamp)
    }

    /// Returns true if the linked pull request has been merged.
    pub fn is_merged(&self) -> bool {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.merged_at.as_deref())
            .is_some_and(|s| !s.is_empty())
    }
}

/// A GitHub user reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(login: impl Into<String>) -> Self {
        User {
            login: login.into(),
            html_url: None,
            avatar_url: None,
        }
    }
}

/// A label attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Hex color without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label {
            name: name.into(),
            color: None,
        }
    }
}

/// A pull request attached to an issue record.
///
/// The issues API only supplies `url`/`html_url`; once a pull has been
/// linked in from the pulls listing, `number` and `merged_at` are present too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a point in time from user or API text.
///
/// Accepts RFC 3339 (`2020-01-01T12:00:00Z`), a naive date-time with `T` or a
/// space separator, and a bare date. Naive values are taken as UTC; a bare
/// date means midnight.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
