// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::LimitArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "triage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Filter issue and pull request listings with a small query language")]
#[command(
    long_about = "Filter issue and pull request listings with a small query language.\n\n\
    Records are read from local JSON listings (issues.json and pulls.json) \
    and narrowed down by composable filters such as open, label(bug) or or(pr,assigned)."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Read records from <path> instead of the configured data directory
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Read configuration from <path>
    #[arg(long = "config", global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List records matching a query
    #[command(after_help = help::list_after_help())]
    List {
        /// Query words, joined with spaces (empty lists everything)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Show the filter reference
    Filters,

    /// Run queries interactively, one per line
    #[command(after_help = colors::examples("\
Commands:
  /help           Show the filter reference
  /local <dir>    Reload records from another directory
  /quit           Leave the shell"))]
    Shell,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
