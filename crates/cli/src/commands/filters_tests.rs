// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn prints_every_filter_in_order() {
    let mut out = Vec::new();
    run_impl(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), triage_core::FILTERS.len());
    assert_eq!(lines[0], "assigned - has an assignee");
    assert_eq!(
        lines.last().copied(),
        Some("closed_since(<string>) - issues closed since the date and time")
    );
}
