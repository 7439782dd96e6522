//! Raw token tags produced by the scanner.
//!
//! A [`RawTag`] says *what shape* of lexeme was found; it carries no text.
//! Keywords are not distinguished here: `class` and `count` are both
//! [`RawTag::Ident`] until the cooking layer looks them up.

/// Raw token tag.
///
/// Discriminants are grouped into ranges so related tags stay adjacent:
///
/// | Range     | Group                  |
/// |-----------|------------------------|
/// | 0-15      | identifiers & literals |
/// | 32-63     | operators              |
/// | 80-95     | delimiters             |
/// | 112-114   | trivia                 |
/// | 240-241   | errors                 |
/// | 255       | control                |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident = 0,
    /// Decimal number with optional fractional part: `42`, `3.14`.
    Number = 1,
    /// Closed string literal including both quotes.
    String = 2,

    // === Operators ===
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `!`
    Bang = 36,
    /// `!=`
    BangEqual = 37,
    /// `=`
    Equal = 38,
    /// `==`
    EqualEqual = 39,
    /// `<`
    Less = 40,
    /// `<=`
    LessEqual = 41,
    /// `>`
    Greater = 42,
    /// `>=`
    GreaterEqual = 43,

    // === Delimiters ===
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,
    /// `[`
    LeftBracket = 84,
    /// `]`
    RightBracket = 85,
    /// `,`
    Comma = 86,
    /// `.`
    Dot = 87,
    /// `;`
    Semicolon = 88,

    // === Trivia ===
    /// Run of spaces, tabs and carriage returns.
    Whitespace = 112,
    /// A single `\n`.
    Newline = 113,
    /// `//` through end of line (newline excluded).
    LineComment = 114,

    // === Errors ===
    /// One character that starts no token (control, non-ASCII, `%`, ...).
    InvalidByte = 240,
    /// `"` with no closing quote before end of input.
    UnterminatedString = 241,

    // === Control ===
    /// End of input. Always has length 0.
    Eof = 255,
}

impl RawTag {
    /// Whitespace, newlines and comments: skipped before every real token.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::LineComment)
    }
}

/// A raw token: tag plus byte length. The start offset is implicit in the
/// scan order (sum of the lengths of all previous tokens).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

#[cfg(test)]
mod tests;
