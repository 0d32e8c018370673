//! Read cursor over the raw dump string.
//!
//! The cursor knows nothing about the grammar: it only offers lookahead,
//! consumption, and whitespace skipping over a borrowed input. Each parse call
//! owns its own cursor, so concurrent parses never share mutable state.

use crate::error::{ParseError, Result};

/// A read position into an input string.
///
/// End of input is a distinguished state (`peek()` returns `None`), never a
/// panic: all operations are safe to call at any position. Positions are byte
/// offsets; `advance` steps one full `char` so multi-byte UTF-8 sequences are
/// never split.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the character at the cursor without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes and returns the character at the cursor.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Does the input at the cursor start with `literal`? Does not consume.
    pub fn check(&self, literal: &str) -> bool {
        self.input[self.pos..].starts_with(literal)
    }

    /// Consumes `literal` if present. Returns whether it was consumed.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.check(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` or fails.
    ///
    /// At end of input the construct being parsed is still open, so the error
    /// is [`ParseError::UnexpectedEndOfInput`]; a mismatching character
    /// reports [`ParseError::ExpectedToken`] at the cursor position.
    pub fn expect(&mut self, literal: &'static str) -> Result<()> {
        if self.eat(literal) {
            return Ok(());
        }
        match self.peek() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(found) => Err(ParseError::ExpectedToken {
                expected: literal,
                found,
                position: self.pos,
            }),
        }
    }

    /// Skips past any run of whitespace at the cursor.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }
}
