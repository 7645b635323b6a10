// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A small query language for filtering issue records.
//!
//! A query is a whitespace-separated list of filter expressions. A record is
//! kept only when every expression matches it. Each expression is either a
//! bare number (shorthand for `n(<number>)`) or a registered filter name,
//! followed by a parenthesized, comma-separated argument list when the
//! filter takes arguments:
//!
//! ```text
//! open label(bug)                 # open issues labelled "bug"
//! or(assigned_to(alice),not(assigned))
//! title(^Fix) closed_since(2024-01-01)
//! 42                              # issue number 42
//! ```
//!
//! # Arguments
//!
//! - `<string>` - raw text up to the next `)`, trimmed. Commas and `(` are
//!   taken literally, so a string argument must be the last one.
//! - `<integer>` - one or more decimal digits.
//! - `<filter>` - a nested filter expression.
//!
//! String arguments to `title`, `body` and `text` are regular expressions.

mod cursor;
mod eval;
mod expr;
mod parser;
mod query;
mod registry;

pub use cursor::Cursor;
pub use eval::evaluate;
pub use expr::{Arg, ArgKind, Filter};
pub use parser::{parse_filters, parse_one_filter};
pub use query::Query;
pub use registry::{describe_all, filter_names, lookup, FilterDef, FILTERS};
