// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use triage_core::Query;

use crate::cli::{LimitArgs, OutputFormat};
use crate::config::Config;
use crate::display::write_records;
use crate::error::Result;
use crate::source::load_local;

pub fn run(config: &Config, query: &[String], output: OutputFormat, limits: &LimitArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_impl(
        &mut out,
        config,
        &query.join(" "),
        output,
        limits.resolve(config.limit),
    )
}

pub(crate) fn run_impl<W: Write>(
    out: &mut W,
    config: &Config,
    query: &str,
    output: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    // Parse before loading so a bad query fails without touching the disk.
    let query = Query::parse(query)?;
    let records = load_local(config)?;

    let matched = query.filter(&records);
    let shown = match limit {
        Some(limit) => &matched[..limit.min(matched.len())],
        None => &matched[..],
    };
    tracing::debug!(matched = matched.len(), shown = shown.len(), "listed records");
    write_records(out, shown, matched.len(), output)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
