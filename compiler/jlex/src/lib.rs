//! Lexer for a small Java-like teaching language.
//!
//! Builds on the raw scanner in `jlex_core`:
//!
//! ```text
//! &str → SourceBuffer → RawScanner → (RawTag, len) → Lexer → Token → TokenStream
//! ```
//!
//! The [`Lexer`] skips trivia, tracks the 1-based line, resolves keywords and
//! copies each token's text. Unrecognized characters become
//! [`TokenKind::Error`] tokens and scanning continues; an unterminated string
//! literal is the only fatal condition and surfaces as a [`LexError`].
//!
//! ```
//! use jlex::{lex, TokenKind};
//!
//! let tokens = lex("int x = 5;").unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::Int);
//! assert!(tokens.last().is_some_and(|t| t.is_eof()));
//! ```

mod cooker;
mod keywords;
mod lex_error;
mod lexer;
mod token;
mod token_stream;

pub use jlex_core::SourceBuffer;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;

/// Lex a whole source text into a [`TokenStream`] ending in `EndOfFile`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenStream, LexError> {
    Lexer::new(source).scan_tokens()
}
