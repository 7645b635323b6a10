// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::error::Result;

/// Print one line per registered filter.
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_impl(&mut out)
}

pub(crate) fn run_impl<W: Write>(out: &mut W) -> Result<()> {
    for line in triage_core::describe_all() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
