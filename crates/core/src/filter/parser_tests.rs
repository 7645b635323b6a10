// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse_single(input: &str) -> Filter {
    let mut filters = parse_filters(input).unwrap();
    assert_eq!(filters.len(), 1, "expected one filter from {input:?}");
    filters.remove(0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Names and arguments
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    assigned = { "assigned" },
    closed = { "closed" },
    open = { "open" },
    labelled = { "labelled" },
    pr = { "pr" },
    issue = { "issue" },
    merged = { "merged" },
)]
fn parse_zero_argument_filter(input: &str) {
    parse_single(input);
}

#[test]
fn parse_string_argument() {
    match parse_single("label( good first issue )") {
        Filter::Label(name) => assert_eq!(name, "good first issue"),
        other => panic!("unexpected filter: {other:?}"),
    }
}

#[test]
fn parse_integer_argument() {
    assert!(matches!(parse_single("n( 12 )"), Filter::Number(12)));
}

#[test]
fn parse_bare_number_is_number_filter() {
    assert!(matches!(parse_single("2"), Filter::Number(2)));
}

#[test]
fn parse_pattern_argument() {
    match parse_single("title(^Fix)") {
        Filter::Title(re) => assert_eq!(re.as_str(), "^Fix"),
        other => panic!("unexpected filter: {other:?}"),
    }
}

#[test]
fn parse_nested_filters() {
    match parse_single("and(open,label(bug))") {
        Filter::And(a, b) => {
            assert!(matches!(*a, Filter::Open));
            assert!(matches!(*b, Filter::Label(ref name) if name == "bug"));
        }
        other => panic!("unexpected filter: {other:?}"),
    }
}

#[test]
fn parse_deeply_nested_with_whitespace() {
    let filter = parse_single(" or ( not ( assigned ) , and ( pr , merged ) ) ");
    assert!(matches!(filter, Filter::Or(..)));
}

#[test]
fn parse_closed_since() {
    assert!(matches!(
        parse_single("closed_since(2020-01-01)"),
        Filter::ClosedSince(_)
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Top-level lists
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    empty = { "" },
    blank = { "   \t " },
)]
fn parse_empty_query_yields_no_filters(input: &str) {
    assert!(parse_filters(input).unwrap().is_empty());
}

#[test]
fn parse_multiple_top_level_filters() {
    let filters = parse_filters("open label(bug)  assigned_to(alice) 7").unwrap();
    assert_eq!(filters.len(), 4);
    assert!(matches!(filters[0], Filter::Open));
    assert!(matches!(filters[1], Filter::Label(_)));
    assert!(matches!(filters[2], Filter::AssignedTo(_)));
    assert!(matches!(filters[3], Filter::Number(7)));
}

#[test]
fn parse_stops_at_unparseable_input() {
    let filters = parse_filters("open !closed").unwrap();
    assert_eq!(filters.len(), 1);
}

#[test]
fn parse_one_filter_leaves_cursor_after_expression() {
    let mut cursor = Cursor::new("label(bug) open");
    parse_one_filter(&mut cursor).unwrap().unwrap();
    assert_eq!(cursor.remaining(), "open");
}

#[test]
fn parse_one_filter_returns_none_at_end() {
    let mut cursor = Cursor::new("");
    assert!(parse_one_filter(&mut cursor).unwrap().is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_filter_names_offender() {
    let err = parse_filters("unknownfn").unwrap_err();
    assert!(matches!(err, Error::UnknownFilter { ref name } if name == "unknownfn"));
    assert!(err.to_string().contains("unknownfn"));
}

#[test]
fn unknown_nested_filter() {
    let err = parse_filters("not(bogus)").unwrap_err();
    assert!(matches!(err, Error::UnknownFilter { ref name } if name == "bogus"));
}

#[test]
fn missing_closing_paren_is_unterminated_string() {
    let err = parse_filters("label(bug").unwrap_err();
    assert!(matches!(err, Error::UnterminatedString));
}

#[parameterized(
    missing_open = { "label bug)", '(' },
    missing_comma = { "and(open closed)", ',' },
    missing_close_nested = { "not(open", ')' },
    missing_close_integer = { "n(1", ')' },
    missing_open_at_end = { "n", '(' },
)]
fn missing_separator(input: &str, expected_char: char) {
    let err = parse_filters(input).unwrap_err();
    match err {
        Error::ExpectedSeparator { expected, .. } => assert_eq!(expected, expected_char),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[parameterized(
    integer_missing = { "n()", "n" },
    integer_word = { "n(two)", "n" },
    filter_missing = { "not()", "not" },
    second_filter_missing = { "or(open,)", "or" },
)]
fn malformed_argument(input: &str, filter_name: &str) {
    let err = parse_filters(input).unwrap_err();
    match err {
        Error::MalformedArgument { filter, .. } => assert_eq!(filter, filter_name),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[parameterized(
    title = { "title(()" },
    body = { "body([a-)" },
    text = { "text(*)" },
)]
fn invalid_pattern_fails_at_parse_time(input: &str) {
    let err = parse_filters(input).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));
}

#[test]
fn invalid_timestamp_fails_at_parse_time() {
    let err = parse_filters("closed_since(last tuesday)").unwrap_err();
    assert!(matches!(err, Error::InvalidTimestamp { ref value } if value == "last tuesday"));
}

#[test]
fn error_discards_earlier_filters() {
    assert!(parse_filters("open closed label(bug").is_err());
}
