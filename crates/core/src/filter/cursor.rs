// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical scanning over a query string.
//!
//! The cursor holds a byte position into the original input and only ever
//! moves forward. Every operation that consumes input also skips any
//! whitespace that follows, so callers always see the next significant
//! character.

use crate::error::{Error, Result};

/// Forward-only scanner over a query string.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first non-whitespace character.
    pub fn new(input: &'a str) -> Self {
        let mut cursor = Cursor { input, pos: 0 };
        cursor.skip_whitespace();
        cursor
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume leading whitespace. Calling this twice is the same as once.
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// The next unconsumed character, without advancing.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Drop `len` bytes of input, then skip whitespace.
    ///
    /// Advancing past the end leaves the cursor empty. A length that lands
    /// inside a multi-byte character is rounded up to the next character.
    pub fn advance(&mut self, len: usize) {
        self.pos = self.pos.saturating_add(len).min(self.input.len());
        while !self.input.is_char_boundary(self.pos) {
            self.pos += 1;
        }
        self.skip_whitespace();
    }

    /// Match a filter name: an ASCII letter, optionally followed by letters,
    /// digits, `-` or `_`, where a name longer than one character must end in
    /// a letter or digit.
    ///
    /// Returns `None` without advancing if the next character is not a letter.
    pub fn parse_identifier(&mut self) -> Option<&'a str> {
        let rest = self.remaining();
        let bytes = rest.as_bytes();
        if !bytes.first().is_some_and(u8::is_ascii_alphabetic) {
            return None;
        }

        let run = bytes
            .iter()
            .position(|b| !(b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_'))
            .unwrap_or(bytes.len());
        // Trailing '-' and '_' are not part of the name.
        let len = bytes[..run]
            .iter()
            .rposition(u8::is_ascii_alphanumeric)
            .map_or(1, |i| i + 1);

        let name = &rest[..len];
        self.advance(len);
        Some(name)
    }

    /// Match one or more decimal digits.
    ///
    /// Returns `Ok(None)` without advancing if no digit is next.
    pub fn parse_integer(&mut self) -> Result<Option<u64>> {
        let rest = self.remaining();
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if len == 0 {
            return Ok(None);
        }

        let literal = &rest[..len];
        let value = literal.parse().map_err(|_| Error::IntegerOutOfRange {
            literal: literal.to_string(),
        })?;
        self.advance(len);
        Ok(Some(value))
    }

    /// Capture everything up to the next `)`, trimmed.
    ///
    /// The cursor stops in front of the `)` so the argument list closer can
    /// consume it. Nothing inside is interpreted, so `,` and `(` are literal.
    pub fn parse_delimited_string(&mut self) -> Result<String> {
        let rest = self.remaining();
        let end = rest.find(')').ok_or(Error::UnterminatedString)?;
        let text = rest[..end].trim().to_string();
        self.advance(end);
        Ok(text)
    }

    /// Consume `expected` or fail with the character actually found.
    pub fn expect_separator(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance(c.len_utf8());
                Ok(())
            }
            found => Err(Error::ExpectedSeparator { expected, found }),
        }
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
