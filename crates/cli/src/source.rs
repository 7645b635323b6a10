// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading records from local JSON listings.
//!
//! The issues listing is the record set. The pulls listing supplies the full
//! pull request objects that issue records only link to by URL.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use triage_core::{PullRequest, Record};

use crate::config::Config;
use crate::error::{Error, Result};

/// Load and link the records described by `config`, sorted by number.
///
/// A missing issues file is an error; a missing pulls file just means no
/// pull request gets linked.
pub fn load_local(config: &Config) -> Result<Vec<Record>> {
    let issues_path = config.issues_path();
    if !issues_path.is_file() {
        return Err(Error::NoRecords(issues_path.display().to_string()));
    }
    let issues: Vec<Record> = read_json(&issues_path)?;

    let pulls_path = config.pulls_path();
    let pulls: Vec<PullRequest> = if pulls_path.is_file() {
        read_json(&pulls_path)?
    } else {
        tracing::debug!(path = %pulls_path.display(), "no pulls file");
        Vec::new()
    };

    tracing::info!(
        issues = issues.len(),
        pulls = pulls.len(),
        dir = %config.data_dir.display(),
        "loaded records"
    );
    Ok(link_pulls(issues, &pulls))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Replace each issue's pull request link with the matching pull object.
///
/// Pulls are matched on `url`. Links without a match are kept as they are.
/// The result is sorted by issue number; equal numbers keep their order.
pub fn link_pulls(mut issues: Vec<Record>, pulls: &[PullRequest]) -> Vec<Record> {
    let by_url: HashMap<&str, &PullRequest> = pulls
        .iter()
        .filter_map(|pull| pull.url.as_deref().map(|url| (url, pull)))
        .collect();

    let mut linked = 0usize;
    for issue in &mut issues {
        let pull = issue
            .pull_request
            .as_ref()
            .and_then(|link| link.url.as_deref())
            .and_then(|url| by_url.get(url))
            .map(|pull| (*pull).clone());
        if let Some(pull) = pull {
            issue.pull_request = Some(pull);
            linked += 1;
        }
    }
    tracing::debug!(linked, "linked pull requests");

    issues.sort_by_key(|issue| issue.number);
    issues
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
