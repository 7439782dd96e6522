//! Token cooking layer.
//!
//! Maps `(RawTag, text)` pairs from the raw scanner onto [`TokenKind`]:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → cook → TokenKind
//! ```
//!
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup, falling back to `Identifier`
//! - **Literals**: text kept verbatim, no value parsing
//! - **Invalid characters**: `Error` kind, scanning continues
//!
//! Trivia cooks to `None`. The unterminated string tag is not a token at
//! all; the lexer turns it into a fatal error before cooking.

use jlex_core::RawTag;

use crate::keywords;
use crate::TokenKind;

/// Cook a single raw token. `text` is the token's source text.
///
/// Returns `None` for tags that never become tokens.
pub(crate) fn cook(tag: RawTag, text: &str) -> Option<TokenKind> {
    let kind = match tag {
        // Operators
        RawTag::Plus => TokenKind::Plus,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Star => TokenKind::Star,
        RawTag::Slash => TokenKind::Divide,
        RawTag::Bang => TokenKind::Bang,
        RawTag::Equal => TokenKind::Equal,
        RawTag::Less => TokenKind::Less,
        RawTag::Greater => TokenKind::Greater,

        // Compound operators
        RawTag::BangEqual => TokenKind::BangEqual,
        RawTag::EqualEqual => TokenKind::EqualEqual,
        RawTag::LessEqual => TokenKind::LessEqual,
        RawTag::GreaterEqual => TokenKind::GreaterEqual,

        // Delimiters
        RawTag::LeftParen => TokenKind::LeftParen,
        RawTag::RightParen => TokenKind::RightParen,
        RawTag::LeftBrace => TokenKind::LeftBrace,
        RawTag::RightBrace => TokenKind::RightBrace,
        RawTag::LeftBracket => TokenKind::LeftBracket,
        RawTag::RightBracket => TokenKind::RightBracket,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Dot => TokenKind::Dot,
        RawTag::Semicolon => TokenKind::Semicolon,

        // Identifiers and literals
        RawTag::Ident => keywords::lookup(text).unwrap_or(TokenKind::Identifier),
        RawTag::Number => TokenKind::NumberLiteral,
        RawTag::String => TokenKind::StringLiteral,

        RawTag::InvalidByte => TokenKind::Error,
        RawTag::Eof => TokenKind::EndOfFile,

        RawTag::Whitespace
        | RawTag::Newline
        | RawTag::LineComment
        | RawTag::UnterminatedString => return None,
    };
    Some(kind)
}
