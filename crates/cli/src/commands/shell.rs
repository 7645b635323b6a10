// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented query shell.
//!
//! Each input line is either a query, whose matches are printed followed by
//! a status line, or a `/`-prefixed command. A bad query prints its error
//! and the shell carries on with the next line.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use triage_core::{Query, Record};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::write_records;
use crate::error::{Error, Result};
use crate::help::filter_reference;
use crate::source::load_local;

const PROMPT: &str = "> ";

pub fn run(config: Config) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Shell::new(config).run(stdin.lock(), &mut out, interactive)
}

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Shell state: where records come from and the records currently loaded.
pub struct Shell {
    config: Config,
    records: Option<Vec<Record>>,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Shell {
            config,
            records: None,
        }
    }

    /// Load records, then handle input lines until `/quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        prompt: bool,
    ) -> Result<()> {
        self.reload(out)?;
        let mut line = String::new();
        loop {
            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if self.handle_line(line.trim(), out)? == Step::Quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Step> {
        if let Some(command) = line.strip_prefix('/') {
            return self.handle_command(command, out);
        }

        let Some(records) = &self.records else {
            writeln!(out, "no records loaded\n  hint: use /local <dir> to load records")?;
            return Ok(Step::Continue);
        };

        match Query::parse(line) {
            Ok(query) => {
                let matched = query.filter(records);
                let shown = match self.config.limit {
                    Some(limit) => &matched[..limit.min(matched.len())],
                    None => &matched[..],
                };
                write_records(out, shown, matched.len(), OutputFormat::Text)?;
            }
            Err(e) => {
                tracing::debug!(query = line, error = %e, "query failed");
                writeln!(out, "Error: {e}")?;
            }
        }
        Ok(Step::Continue)
    }

    fn handle_command<W: Write>(&mut self, command: &str, out: &mut W) -> Result<Step> {
        let words: Vec<&str> = command.split_whitespace().collect();
        let name = words.first().map(|w| w.to_lowercase());

        match name.as_deref() {
            Some("help") => writeln!(out, "{}", filter_reference())?,
            Some("local") => {
                if let Some(dir) = words.get(1) {
                    self.config.data_dir = PathBuf::from(dir);
                }
                self.reload(out)?;
            }
            Some("quit") | Some("exit") => return Ok(Step::Quit),
            _ => writeln!(out, "Error: {}", Error::UnknownCommand(words.join(" ")))?,
        }
        Ok(Step::Continue)
    }

    /// Reload records from the configured directory.
    ///
    /// A failed load is reported and leaves the shell without records.
    fn reload<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match load_local(&self.config) {
            Ok(records) => {
                writeln!(
                    out,
                    "loaded {} records from {}",
                    records.len(),
                    self.config.data_dir.display()
                )?;
                self.records = Some(records);
            }
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                self.records = None;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
