// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expression types.

use std::fmt;

use chrono::{DateTime, Utc};
use regex::Regex;

/// A constructed filter: a pure test over a single record.
///
/// Leaf variants hold their literal arguments already converted (patterns
/// compiled, timestamps parsed). Combinators own their operands.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Has at least one assignee.
    Assigned,
    /// Some assignee's login equals the value.
    AssignedTo(String),
    /// Has a non-empty closing timestamp.
    Closed,
    /// Has no closing timestamp.
    Open,
    /// Issue number equals the value.
    Number(u64),
    /// Some label's name equals the value.
    Label(String),
    /// Has at least one label.
    Labelled,
    /// Title matches the pattern.
    Title(Regex),
    /// Body matches the pattern.
    Body(Regex),
    /// Title or body matches the pattern.
    Text(Regex),
    /// Carries a pull request reference.
    PullRequest,
    /// Carries no pull request reference.
    Issue,
    /// Carries a pull request with a merge timestamp.
    Merged,
    Or(Box<Filter>, Box<Filter>),
    And(Box<Filter>, Box<Filter>),
    Not(Box<Filter>),
    /// Closed strictly after the given time.
    ClosedSince(DateTime<Utc>),
}

/// The kind of a formal filter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Raw text up to the closing `)`.
    String,
    /// A decimal integer.
    Integer,
    /// A nested filter expression.
    Filter,
}

impl ArgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::String => "string",
            ArgKind::Integer => "integer",
            ArgKind::Filter => "filter",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed argument value, ready to hand to a filter's constructor.
#[derive(Debug, Clone)]
pub enum Arg {
    String(String),
    Integer(u64),
    Filter(Filter),
}

impl Arg {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::String(_) => ArgKind::String,
            Arg::Integer(_) => ArgKind::Integer,
            Arg::Filter(_) => ArgKind::Filter,
        }
    }
}
