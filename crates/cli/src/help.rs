// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header}
  {list}        List records matching a query
  {filters}     Show the filter reference
  {shell}       Run queries interactively
  {completion}  Generate shell completions
",
        header = colors::header("Commands:"),
        list = colors::literal("list"),
        filters = colors::literal("filters"),
        shell = colors::literal("shell"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  triage -C <dir> list                 List every record
  triage list open label(bug)          Open records labelled bug
  triage list \"or(pr,assigned)\"        Pull requests or assigned records
  triage filters                       Show all filters",
    )
}

/// Filter reference: one line per registered filter.
///
/// Shown by `triage filters`, `/help` in the shell, and after `list --help`.
pub fn filter_reference() -> String {
    let mut text = String::from("Filters:");
    for line in triage_core::describe_all() {
        text.push_str("\n  ");
        text.push_str(&line);
    }
    text
}

/// Examples and filter reference for `list --help`.
pub fn list_after_help() -> String {
    colors::examples(&format!(
        "\
Examples:
  triage list                          Every record
  triage list 42                       Record number 42
  triage list closed_since(2024-01-01)   Closed this year
  triage list \"not(labelled) open\"     Open records without labels

Query Syntax:
  Filters separated by spaces must all match.
  String arguments run to the next ')' and are taken literally.

{}",
        filter_reference()
    ))
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
