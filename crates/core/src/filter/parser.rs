// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser for filter expressions.
//!
//! Names are resolved against the registry as they are read, and each
//! filter's declared argument kinds decide how its argument list is parsed.

use crate::error::{Error, Result};

use super::cursor::Cursor;
use super::expr::{Arg, ArgKind, Filter};
use super::registry::{lookup, FilterDef};

/// Parse the next filter expression at the cursor.
///
/// Returns `Ok(None)` when the next character starts neither a name nor a
/// number, which marks the end of the expression list.
///
/// # Errors
///
/// Fails on an unknown name, a missing separator, an unterminated string, a
/// missing integer or nested filter, or an argument the filter rejects.
pub fn parse_one_filter(cursor: &mut Cursor<'_>) -> Result<Option<Filter>> {
    let Some(name) = cursor.parse_identifier() else {
        return match cursor.parse_integer()? {
            // A bare number is shorthand for n(<number>).
            Some(number) => lookup("n")?
                .construct(vec![Arg::Integer(number)])
                .map(Some),
            None => Ok(None),
        };
    };

    let def = lookup(name)?;
    if def.args.is_empty() {
        return def.construct(Vec::new()).map(Some);
    }

    let mut args = Vec::with_capacity(def.args.len());
    for (idx, kind) in def.args.iter().enumerate() {
        cursor.expect_separator(if idx == 0 { '(' } else { ',' })?;
        args.push(parse_arg(cursor, def, *kind)?);
    }
    cursor.expect_separator(')')?;

    def.construct(args).map(Some)
}

fn parse_arg(cursor: &mut Cursor<'_>, def: &FilterDef, kind: ArgKind) -> Result<Arg> {
    let malformed = || Error::MalformedArgument {
        filter: def.name,
        expected: kind.as_str(),
    };

    match kind {
        ArgKind::String => cursor.parse_delimited_string().map(Arg::String),
        ArgKind::Integer => cursor
            .parse_integer()?
            .map(Arg::Integer)
            .ok_or_else(malformed),
        ArgKind::Filter => parse_one_filter(cursor)?
            .map(Arg::Filter)
            .ok_or_else(malformed),
    }
}

/// Parse every filter expression in `input`, in order.
///
/// An empty or blank input yields no filters. Parsing stops at the first
/// character that cannot begin an expression; any text from there on is
/// ignored.
///
/// # Errors
///
/// Returns the first error from [`parse_one_filter`]; no partial list is
/// returned.
pub fn parse_filters(input: &str) -> Result<Vec<Filter>> {
    let mut cursor = Cursor::new(input);
    let mut filters = Vec::new();
    while let Some(filter) = parse_one_filter(&mut cursor)? {
        filters.push(filter);
    }

    if !cursor.is_empty() {
        tracing::debug!(rest = cursor.remaining(), "ignoring unparsed query input");
    }
    tracing::debug!(count = filters.len(), "parsed query");
    Ok(filters)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
