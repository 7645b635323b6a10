// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A parsed query: the implicit conjunction of its top-level filters.

use crate::error::Result;
use crate::record::Record;

use super::eval::evaluate;
use super::expr::Filter;
use super::parser::parse_filters;

/// The filters of one query string, combined with AND.
///
/// A query is built fresh for every input string and holds no state beyond
/// the filters parsed from it.
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<Filter>,
}

impl Query {
    /// Parse a query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_core::{Query, Record};
    ///
    /// let query = Query::parse("n(2)").unwrap();
    /// let records = vec![Record::new(1), Record::new(2)];
    /// let shown = query.filter(&records);
    /// assert_eq!(shown.len(), 1);
    /// assert_eq!(shown[0].number, 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first parse error; nothing is evaluated on failure.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Query {
            filters: parse_filters(input)?,
        })
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// True when the query has no filters and so keeps everything.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a single record passes every filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    /// The records passing every filter, in input order.
    pub fn filter<'r>(&self, records: &'r [Record]) -> Vec<&'r Record> {
        evaluate(records, &self.filters)
    }
}

impl From<Vec<Filter>> for Query {
    fn from(filters: Vec<Filter>) -> Self {
        Query { filters }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
