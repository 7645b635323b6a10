// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[parameterized(
    header = { super::header("Filters:"), "\x1b[38;5;74mFilters:\x1b[0m" },
    literal = { super::literal("open"), "\x1b[38;5;250mopen\x1b[0m" },
    context = { super::context("<dir>"), "\x1b[38;5;245m<dir>\x1b[0m" },
)]
fn color_wrappers(actual: String, expected: &str) {
    assert_eq!(actual, expected);
}

#[parameterized(
    command_and_description = { "triage list open   Open records", Some(16) },
    no_description = { "triage list open", None },
    trailing_spaces_only = { "triage list   ", None },
)]
fn description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn colorize_examples_preserves_text() {
    let text = "Examples:\n  triage -C <dir> list open    Open records\nplain line";
    let colored = colorize_examples(text);
    assert_ne!(colored, text);
    assert_eq!(strip_ansi(&colored), text);
}

#[test]
fn colorize_examples_headers() {
    let colored = colorize_examples("Examples:");
    assert_eq!(colored, header("Examples:"));
}

#[test]
fn colorize_command_dims_placeholders() {
    let colored = colorize_command("triage -C <dir> list");
    assert_eq!(
        colored,
        format!(
            "{}{}{}",
            literal("triage -C "),
            context("<dir>"),
            literal(" list")
        )
    );
}
