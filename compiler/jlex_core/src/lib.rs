//! Raw byte scanner for the jlex Java-subset lexer.
//!
//! This crate splits a sentinel-terminated source buffer into `(RawTag, len)`
//! pairs. It keeps trivia (whitespace, newlines, line comments) in the output
//! and never allocates per token. Keyword resolution, line tracking and
//! owned token text live one layer up, in `jlex`.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
