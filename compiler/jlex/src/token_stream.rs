//! Append-only token buffer.
//!
//! Tokens are stored by value, so growing the buffer never invalidates a
//! token a caller already cloned out of it. There is no removal: insertion
//! order is scan order is source order.

use std::ops::Index;

use crate::{Token, TokenKind};

/// Ordered, growable sequence of tokens produced by one scan session.
///
/// After [`Lexer::scan_tokens`](crate::Lexer::scan_tokens) the last token is
/// always the single `EndOfFile` token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffer, e.g. from a source-length estimate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token. Amortized O(1).
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of recoverable `Error` tokens.
    pub fn error_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Error)
            .count()
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
