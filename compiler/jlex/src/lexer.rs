//! Scan session: raw tokens in, cooked [`Token`]s out.
//!
//! A [`Lexer`] owns a sentinel-terminated copy of the source and a resume
//! offset. Each [`scan_token`](Lexer::scan_token) call rebuilds a raw scanner
//! at that offset, skips trivia, counts newlines and cooks the first
//! significant raw token.

use jlex_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, trace};

use crate::cooker::cook;
use crate::{LexError, Token, TokenKind, TokenStream};

/// One scan session over one source text.
///
/// Sessions are independent: nothing is shared between two `Lexer`s.
#[derive(Clone, Debug)]
pub struct Lexer {
    buf: SourceBuffer,
    /// Byte offset of the next unconsumed character.
    pos: u32,
    /// 1-based line of the next unconsumed character.
    line: u32,
    /// Sticky fatal error; once set, every call returns it.
    failure: Option<LexError>,
    /// Set after `EndOfFile` or a fatal error has been yielded by `next()`.
    finished: bool,
}

impl Lexer {
    /// Start a session at byte 0, line 1.
    pub fn new(source: &str) -> Self {
        Self::from_buffer(SourceBuffer::new(source))
    }

    /// Start a session over an already-built buffer.
    pub fn from_buffer(buf: SourceBuffer) -> Self {
        Self {
            buf,
            pos: 0,
            line: 1,
            failure: None,
            finished: false,
        }
    }

    /// Produce the next significant token.
    ///
    /// Whitespace, newlines and `//` comments are skipped. At end of input
    /// an `EndOfFile` token with empty text is returned, and again on every
    /// later call. An unterminated string literal is fatal: the error is
    /// returned now and on every later call.
    pub fn scan_token(&mut self) -> Result<Token, LexError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut cursor = self.buf.cursor();
        cursor.advance_n(self.pos);
        let mut scanner = RawScanner::new(cursor);

        loop {
            let start = scanner.pos();
            let raw = scanner.next_token();
            let text = scanner.slice(start, start + raw.len);
            self.pos = start + raw.len;

            if raw.tag.is_trivia() {
                if raw.tag == RawTag::Newline {
                    self.line += 1;
                }
                continue;
            }
            if raw.tag == RawTag::UnterminatedString {
                let err = LexError::unterminated_string(self.line, start);
                debug!(line = err.line, offset = err.offset, "unterminated string");
                self.failure = Some(err.clone());
                return Err(err);
            }

            let Some(kind) = cook(raw.tag, text) else {
                continue;
            };
            let token = Token::new(kind, text, self.line);
            if kind == TokenKind::StringLiteral {
                // Reported at the opening quote; the session moves past.
                self.line += newline_count(text);
            }
            trace!(
                kind = %kind,
                line = token.line(),
                len = token.length(),
                "token"
            );
            return Ok(token);
        }
    }

    /// Scan every remaining token into a [`TokenStream`], ending with the
    /// single `EndOfFile` token.
    pub fn scan_tokens(&mut self) -> Result<TokenStream, LexError> {
        // Rough estimate: one token per five source bytes.
        let estimate = (self.buf.len().saturating_sub(self.pos) / 5) as usize + 1;
        let mut stream = TokenStream::with_capacity(estimate);
        loop {
            let token = self.scan_token()?;
            let eof = token.is_eof();
            stream.push(token);
            if eof {
                break;
            }
        }
        debug!(
            tokens = stream.len(),
            errors = stream.error_count(),
            lines = self.line,
            "scan complete"
        );
        Ok(stream)
    }
}

/// Yields tokens up to and including `EndOfFile`, or up to the fatal error,
/// then `None`.
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.scan_token();
        self.finished = match &item {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(item)
    }
}

#[inline]
fn newline_count(text: &str) -> u32 {
    let n = memchr::memchr_iter(b'\n', text.as_bytes()).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
