//! Owned, zero-terminated copy of the text being scanned.
//!
//! At least one `0x00` byte follows the source, and the total is padded out
//! to a multiple of 64 bytes, so `current()` and `peek()` near the end of the
//! text read zeros instead of leaving the buffer.

use crate::Cursor;

/// Padding granularity in bytes.
const PAD_ALIGN: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The padding is made of `'\0'` characters, so the whole buffer is still a
/// valid `str` and the cursor can hand out `&str` slices without re-checking
/// UTF-8.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content in bytes.
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` and append the zero padding.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are accepted but the length
    /// saturates at `u32::MAX`; everything past that point reads as EOF.
    pub fn new(source: &str) -> Self {
        let source_len = source.len();

        // At least one terminator byte, then up to the next multiple of 64.
        let padded_len = (source_len + 1 + PAD_ALIGN - 1) & !(PAD_ALIGN - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// A [`Cursor`] at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
