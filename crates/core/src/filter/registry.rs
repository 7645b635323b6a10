// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The catalog of named filters.
//!
//! Each entry declares its argument kinds, used both to drive the parser and
//! to render help, and a constructor that turns parsed arguments into a
//! [`Filter`]. The catalog is fixed at compile time.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};
use crate::record::parse_timestamp;

use super::expr::{Arg, ArgKind, Filter};

/// A registered filter: its name, signature, help text and constructor.
pub struct FilterDef {
    pub name: &'static str,
    /// Formal parameter kinds, in order.
    pub args: &'static [ArgKind],
    pub help: Option<&'static str>,
    build: fn(&mut Args) -> Result<Filter>,
}

impl FilterDef {
    /// Construct a filter from arguments matching [`FilterDef::args`].
    ///
    /// # Errors
    ///
    /// Returns `WrongArgumentCount` if the number of arguments differs from
    /// the signature, `MalformedArgument` if an argument has the wrong kind,
    /// or the constructor's own error (an invalid pattern or timestamp).
    pub fn construct(&self, args: Vec<Arg>) -> Result<Filter> {
        if args.len() != self.args.len() {
            return Err(Error::WrongArgumentCount {
                filter: self.name,
                usage: self.usage(),
                found: args.len(),
            });
        }
        let mut args = Args {
            filter: self.name,
            values: args.into_iter(),
        };
        (self.build)(&mut args)
    }

    /// The name with its argument list, e.g. `or(<filter>, <filter>)`.
    pub fn usage(&self) -> String {
        if self.args.is_empty() {
            return self.name.to_string();
        }
        let args: Vec<String> = self.args.iter().map(|k| format!("<{k}>")).collect();
        format!("{}({})", self.name, args.join(", "))
    }

    /// One help line: usage followed by ` - help` when help text exists.
    pub fn describe(&self) -> String {
        match self.help {
            Some(help) => format!("{} - {}", self.usage(), help),
            None => self.usage(),
        }
    }
}

impl fmt::Debug for FilterDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDef")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Typed access to the arguments handed to a constructor.
struct Args {
    filter: &'static str,
    values: std::vec::IntoIter<Arg>,
}

impl Args {
    fn next(&mut self, expected: ArgKind) -> Result<Arg> {
        let arg = self.values.next();
        arg.ok_or_else(|| self.malformed(expected))
    }

    fn string(&mut self) -> Result<String> {
        match self.next(ArgKind::String)? {
            Arg::String(s) => Ok(s),
            _ => Err(self.malformed(ArgKind::String)),
        }
    }

    fn integer(&mut self) -> Result<u64> {
        match self.next(ArgKind::Integer)? {
            Arg::Integer(n) => Ok(n),
            _ => Err(self.malformed(ArgKind::Integer)),
        }
    }

    fn filter(&mut self) -> Result<Box<Filter>> {
        match self.next(ArgKind::Filter)? {
            Arg::Filter(f) => Ok(Box::new(f)),
            _ => Err(self.malformed(ArgKind::Filter)),
        }
    }

    fn pattern(&mut self) -> Result<Regex> {
        let pattern = self.string()?;
        Regex::new(&pattern).map_err(|source| Error::InvalidPattern { pattern, source })
    }

    fn malformed(&self, expected: ArgKind) -> Error {
        Error::MalformedArgument {
            filter: self.filter,
            expected: expected.as_str(),
        }
    }
}

const NONE: &[ArgKind] = &[];
const STRING: &[ArgKind] = &[ArgKind::String];
const INTEGER: &[ArgKind] = &[ArgKind::Integer];
const FILTER: &[ArgKind] = &[ArgKind::Filter];
const FILTER_PAIR: &[ArgKind] = &[ArgKind::Filter, ArgKind::Filter];

/// Every registered filter, in help order.
pub static FILTERS: &[FilterDef] = &[
    FilterDef {
        name: "assigned",
        args: NONE,
        help: Some("has an assignee"),
        build: |_| Ok(Filter::Assigned),
    },
    FilterDef {
        name: "assigned_to",
        args: STRING,
        help: Some("assigned to a specific user"),
        build: |a| Ok(Filter::AssignedTo(a.string()?)),
    },
    FilterDef {
        name: "closed",
        args: NONE,
        help: Some("is closed"),
        build: |_| Ok(Filter::Closed),
    },
    FilterDef {
        name: "open",
        args: NONE,
        help: Some("is open"),
        build: |_| Ok(Filter::Open),
    },
    FilterDef {
        name: "n",
        args: INTEGER,
        help: Some("issue by number"),
        build: |a| Ok(Filter::Number(a.integer()?)),
    },
    FilterDef {
        name: "label",
        args: STRING,
        help: Some("has a specific label"),
        build: |a| Ok(Filter::Label(a.string()?)),
    },
    FilterDef {
        name: "labelled",
        args: NONE,
        help: Some("has any label"),
        build: |_| Ok(Filter::Labelled),
    },
    FilterDef {
        name: "title",
        args: STRING,
        help: Some("search title with a regular expression"),
        build: |a| Ok(Filter::Title(a.pattern()?)),
    },
    FilterDef {
        name: "body",
        args: STRING,
        help: Some("search body with a regular expression"),
        build: |a| Ok(Filter::Body(a.pattern()?)),
    },
    FilterDef {
        name: "text",
        args: STRING,
        help: Some("search title and body with a regular expression"),
        build: |a| Ok(Filter::Text(a.pattern()?)),
    },
    FilterDef {
        name: "pr",
        args: NONE,
        help: Some("is a pull request"),
        build: |_| Ok(Filter::PullRequest),
    },
    FilterDef {
        name: "issue",
        args: NONE,
        help: Some("is a plain issue, i.e., not(pr)"),
        build: |_| Ok(Filter::Issue),
    },
    FilterDef {
        name: "merged",
        args: NONE,
        help: Some("a merged pull request"),
        build: |_| Ok(Filter::Merged),
    },
    FilterDef {
        name: "or",
        args: FILTER_PAIR,
        help: Some("union"),
        build: |a| Ok(Filter::Or(a.filter()?, a.filter()?)),
    },
    FilterDef {
        name: "and",
        args: FILTER_PAIR,
        help: Some("intersection"),
        build: |a| Ok(Filter::And(a.filter()?, a.filter()?)),
    },
    FilterDef {
        name: "not",
        args: FILTER,
        help: Some("exclusion"),
        build: |a| Ok(Filter::Not(a.filter()?)),
    },
    FilterDef {
        name: "closed_since",
        args: STRING,
        help: Some("issues closed since the date and time"),
        build: build_closed_since,
    },
];

fn build_closed_since(args: &mut Args) -> Result<Filter> {
    let value = args.string()?;
    match parse_timestamp(&value) {
        Some(since) => Ok(Filter::ClosedSince(since)),
        None => Err(Error::InvalidTimestamp { value }),
    }
}

/// Find a filter by name.
///
/// # Errors
///
/// Returns `UnknownFilter` naming `name` if nothing is registered under it.
pub fn lookup(name: &str) -> Result<&'static FilterDef> {
    FILTERS
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| Error::UnknownFilter {
            name: name.to_string(),
        })
}

/// One help line per registered filter, in registration order.
pub fn describe_all() -> Vec<String> {
    FILTERS.iter().map(FilterDef::describe).collect()
}

/// Comma-separated filter names for error hints.
pub fn filter_names() -> String {
    FILTERS
        .iter()
        .map(|def| def.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
