// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trg - command-line front end for the triage query language.
//!
//! This crate wires the query engine in `triage_core` to local JSON listings
//! of issues and pull requests, and provides the `triage` binary.
//!
//! # Main Components
//!
//! - [`Config`] - Where records live and how many to list
//! - [`source`] - Loading and linking issue and pull request listings
//! - [`Cli`] / [`Command`] - Argument parsing for the binary
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use trg::{run, Cli};
//!
//! run(Cli::parse_from(["triage", "-C", "data", "list", "open", "label(bug)"]))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;

pub mod config;
pub mod error;
pub mod source;

pub use cli::{Cli, Command, LimitArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;

/// Load configuration, then apply a `-C` data directory override.
fn load_config(explicit: Option<&Path>, directory: Option<PathBuf>) -> Result<Config> {
    let config = Config::load(explicit)?;
    Ok(match directory {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        directory,
        config,
        command,
        ..
    } = cli;

    match command {
        Command::List {
            query,
            output,
            limits,
        } => {
            let config = load_config(config.as_deref(), directory)?;
            commands::list::run(&config, &query, output, &limits)
        }
        Command::Filters => commands::filters::run(),
        Command::Shell => commands::shell::run(load_config(config.as_deref(), directory)?),
        Command::Completion { shell } => {
            generate(shell, &mut Cli::command(), "triage", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
