// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! triage-core: the record query language behind the triage CLI.
//!
//! This crate provides the record model, the registry of named filters, and
//! the parser and evaluator that turn a query string into the matching
//! subset of an in-memory record list.
//!
//! ```rust,ignore
//! use triage_core::Query;
//!
//! let query = Query::parse("and(open,label(bug))")?;
//! for record in query.filter(&records) {
//!     println!("#{}", record.number);
//! }
//! ```

pub mod error;
pub mod filter;
pub mod record;

pub use error::{Error, Result};
pub use filter::{describe_all, evaluate, lookup, ArgKind, Filter, FilterDef, Query, FILTERS};
pub use record::{parse_timestamp, Label, PullRequest, Record, User};
