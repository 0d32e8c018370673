//! Error types for dump parsing.

use thiserror::Error;

/// Errors that can occur while parsing a repr-style dump.
///
/// Positions are byte offsets into the original input string, suitable for
/// pointing a caret at the offending character in diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No grammar rule matches the character at the cursor.
    #[error("unexpected character {ch:?} at offset {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// The input ended while a construct (string, argument list, mapping,
    /// sequence) was still open.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A specific delimiter or keyword was required and something else was
    /// found instead.
    #[error("expected {expected:?} at offset {position}, found {found:?}")]
    ExpectedToken {
        expected: &'static str,
        found: char,
        position: usize,
    },

    /// The input nests containers deeper than the configured maximum.
    #[error("nesting depth exceeds the maximum of {limit}")]
    NestingTooDeep { limit: usize },
}

/// Convenience alias used throughout agentdump-core.
pub type Result<T> = std::result::Result<T, ParseError>;
