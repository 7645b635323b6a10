// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filters against records.

use crate::record::Record;

use super::expr::Filter;

impl Filter {
    /// Test a single record.
    ///
    /// A missing title or body never matches a pattern. A record whose
    /// closing timestamp is missing or unparseable is never "closed since".
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::Assigned => !record.assignees.is_empty(),
            Filter::AssignedTo(login) => record.assignees.iter().any(|u| &u.login == login),
            Filter::Closed => record.is_closed(),
            Filter::Open => !record.is_closed(),
            Filter::Number(number) => record.number == *number,
            Filter::Label(name) => record.labels.iter().any(|l| &l.name == name),
            Filter::Labelled => !record.labels.is_empty(),
            Filter::Title(re) => record.title.as_deref().is_some_and(|t| re.is_match(t)),
            Filter::Body(re) => record.body.as_deref().is_some_and(|b| re.is_match(b)),
            Filter::Text(re) => {
                record.title.as_deref().is_some_and(|t| re.is_match(t))
                    || record.body.as_deref().is_some_and(|b| re.is_match(b))
            }
            Filter::PullRequest => record.pull_request.is_some(),
            Filter::Issue => record.pull_request.is_none(),
            Filter::Merged => record.is_merged(),
            Filter::Or(a, b) => a.matches(record) || b.matches(record),
            Filter::And(a, b) => a.matches(record) && b.matches(record),
            Filter::Not(a) => !a.matches(record),
            Filter::ClosedSince(since) => record.closed_time().is_some_and(|t| t > *since),
        }
    }
}

/// Keep the records that every filter matches, in their original order.
///
/// With no filters, every record is kept.
pub fn evaluate<'r>(records: &'r [Record], filters: &[Filter]) -> Vec<&'r Record> {
    records
        .iter()
        .filter(|record| filters.iter().all(|f| f.matches(record)))
        .collect()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
