//! Fatal lexer errors.
//!
//! Unrecognized characters are not errors at this level: they become
//! `TokenKind::Error` tokens and scanning continues. A [`LexError`] ends the
//! scan session; no further tokens are produced after it.

use thiserror::Error;

/// A fatal lexer error.
///
/// Carries WHERE (`line`, `offset` of the offending literal's first byte)
/// and WHAT (`kind`).
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} (line {line}, byte {offset})")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line where the failing construct started.
    pub line: u32,
    /// Byte offset where the failing construct started.
    pub offset: u32,
}

/// What kind of fatal error occurred.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// `"` with no closing quote before end of input.
    #[error("Unterminated string")]
    UnterminatedString,
}

impl LexError {
    /// Missing closing `"` for a string literal opened at `line`/`offset`.
    pub fn unterminated_string(line: u32, offset: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedString,
            line,
            offset,
        }
    }
}
