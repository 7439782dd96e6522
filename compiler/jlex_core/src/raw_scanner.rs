//! Splits source text into `(RawTag, len)` pairs.
//!
//! One `match` on the byte under the cursor picks the lexeme shape; a helper
//! per shape consumes it. The terminating `0x00` lands in the `0` arm, which
//! yields `Eof` or, for a NUL inside the source, an error token.
//!
//! Keywords and line numbers are not handled here.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Raw scanner over one [`SourceBuffer`](crate::SourceBuffer).
///
/// Never allocates and never fails: bad input comes back as the
/// `InvalidByte` and `UnterminatedString` tags.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Scan from the cursor's current position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text between two offsets previously returned by [`pos`](Self::pos).
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Scan one raw token.
    ///
    /// At end of input the result is a zero-length `Eof`, on this call and
    /// every later one.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.single(start, RawTag::Minus),
            b'*' => self.single(start, RawTag::Star),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b';' => self.single(start, RawTag::Semicolon),
            // Remaining punctuation, control characters, DEL and non-ASCII
            _ => self.invalid_char(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte, not the terminator.
            self.cursor.advance();
            self.token(RawTag::InvalidByte, start)
        }
    }

    // ─── Whitespace & Newlines ────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(RawTag::Newline, start)
    }

    // ─── Comments ─────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'/' {
            self.cursor.advance();
            self.cursor.eat_until_newline_or_eof();
            self.token(RawTag::LineComment, start)
        } else {
            self.token(RawTag::Slash, start)
        }
    }

    // ─── Identifiers ──────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Ident, start)
    }

    // ─── Operators ────────────────────────────────────────────────

    /// One-byte punctuation.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// `base` alone, or `compound` when immediately followed by `=`.
    fn with_equal(&mut self, start: u32, base: RawTag, compound: RawTag) -> RawToken {
        self.cursor.advance(); // consume base character
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(compound, start)
        } else {
            self.token(base, start)
        }
    }

    // ─── Numeric Literals ─────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Fractional part only when a digit follows the dot; `1.` and
        // `1.foo` leave the dot for the next token.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        self.token(RawTag::Number, start)
    }

    // ─── String Literals ──────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.token(RawTag::String, start);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        // Escaped character is kept verbatim, never decoded.
                        self.cursor.advance_char();
                    }
                }
                _ => return self.token(RawTag::UnterminatedString, start),
            }
        }
    }

    // ─── Error tokens ─────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(RawTag::InvalidByte, start)
    }
}

/// Bytes allowed after the first character of an identifier.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
