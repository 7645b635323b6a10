// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use triage_core::Record;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a record as a single line.
///
/// Format: `#<number> <title> [<state>] {<labels>} @<assignee>...`, where
/// parts the record doesn't carry are left out.
pub fn format_record_line(record: &Record) -> String {
    let mut line = format!("#{}", record.number);

    if let Some(title) = record.title.as_deref().filter(|t| !t.is_empty()) {
        line.push(' ');
        line.push_str(title);
    }

    let state = match (record.state.as_deref(), record.pull_request.is_some()) {
        (Some(state), true) if record.is_merged() => format!("{state}, merged"),
        (Some(state), true) => format!("{state}, pr"),
        (Some(state), false) => state.to_string(),
        (None, true) => "pr".to_string(),
        (None, false) => String::new(),
    };
    if !state.is_empty() {
        line.push_str(&format!(" [{state}]"));
    }

    if !record.labels.is_empty() {
        let labels: Vec<&str> = record.labels.iter().map(|l| l.name.as_str()).collect();
        line.push_str(&format!(" {{{}}}", labels.join(", ")));
    }

    for assignee in &record.assignees {
        line.push_str(&format!(" @{}", assignee.login));
    }

    line
}

/// Status line shown after a listing.
///
/// When a limit cut the listing short, the number of matches is included.
pub fn status_line(shown: usize, matched: usize) -> String {
    if shown < matched {
        format!("{shown} records shown ({matched} matched)")
    } else {
        format!("{shown} records shown")
    }
}

/// Write records in the requested format.
///
/// Text output ends with a status line. JSON output is a single array and
/// `id` output is one number per line, so both stay machine-readable.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[&Record],
    matched: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(out, "{}", format_record_line(record))?;
            }
            writeln!(out, "{}", status_line(records.len(), matched))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Id => {
            for record in records {
                writeln!(out, "{}", record.number)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
