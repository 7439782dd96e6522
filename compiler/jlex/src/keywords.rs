//! Keyword resolution.
//!
//! Runs only after the raw scanner has delimited the whole identifier, so a
//! keyword never matches a prefix: `forest` is an identifier, not `for`
//! followed by `est`.
//!
//! The table is partial. Java keywords missing from it
//! (`static`, `void`, `new`, ...) scan as plain identifiers.

use crate::TokenKind;

/// Look up a keyword by its exact spelling.
///
/// Returns `None` for any identifier not in the table. Uses the identifier's
/// length as a first-pass filter (keywords are 2-9 chars), then matches
/// against the keywords of that length.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            "nil" => Some(TokenKind::NullKeyword),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        7 => match text {
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        9 => match text {
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        _ => None,
    }
}
