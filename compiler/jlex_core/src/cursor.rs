//! Byte cursor used by the raw scanner.
//!
//! Reads past the end of the source return `0x00`, so scanning loops stop on
//! the terminator without a length check of their own.
//!
//! A `0x00` byte inside the source reads the same as the terminator. The two
//! are told apart by position: before `source_len` it is source text (and
//! scans as an error token), at or after it is end of input.

/// Read position over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Obtained from [`SourceBuffer::cursor`](crate::SourceBuffer::cursor).
/// `Copy`, so a scanner can save a position and come back to it.
///
/// Every byte of `src` from `source_len` on is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source text followed by the zero padding.
    src: &'a str,
    /// Byte index of the next unread byte.
    pos: u32,
    /// Number of source bytes, padding excluded.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor at byte 0. `src` must carry the zero padding.
    pub(crate) fn new(src: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < src.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            src.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            src,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor, `0x00` at end of input.
    ///
    /// An embedded NUL also reads as `0x00`; check [`is_eof`](Self::is_eof).
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the one under the cursor.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Step one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Step `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text in `start..end`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on character
    /// boundaries. The scanner only ends tokens after ASCII bytes or whole
    /// characters, so token boundaries always qualify. An invalid range
    /// yields the empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Consume bytes while `pred` holds.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Encoded width of the UTF-8 character whose lead byte is `byte`.
    ///
    /// Continuation and invalid lead bytes count as width 1.
    #[inline]
    fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one whole character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Jump to the next `\n` (left unconsumed) or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.src.as_bytes()[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Newlines are ordinary string content here; string literals may span
    /// lines.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.src.as_bytes()[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past horizontal whitespace (space, tab and carriage return).
    ///
    /// The sentinel byte is none of these, so scanning stops at EOF.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
    }
}
