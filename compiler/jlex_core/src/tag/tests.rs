use super::*;
use crate::{RawScanner, SourceBuffer};
use pretty_assertions::assert_eq;

/// Every tag with a fixed spelling.
const FIXED: [(RawTag, &str); 21] = [
    (RawTag::Plus, "+"),
    (RawTag::Minus, "-"),
    (RawTag::Star, "*"),
    (RawTag::Slash, "/"),
    (RawTag::Bang, "!"),
    (RawTag::BangEqual, "!="),
    (RawTag::Equal, "="),
    (RawTag::EqualEqual, "=="),
    (RawTag::Less, "<"),
    (RawTag::LessEqual, "<="),
    (RawTag::Greater, ">"),
    (RawTag::GreaterEqual, ">="),
    (RawTag::LeftParen, "("),
    (RawTag::RightParen, ")"),
    (RawTag::LeftBrace, "{"),
    (RawTag::RightBrace, "}"),
    (RawTag::LeftBracket, "["),
    (RawTag::RightBracket, "]"),
    (RawTag::Comma, ","),
    (RawTag::Dot, "."),
    (RawTag::Semicolon, ";"),
];

/// Tags whose text depends on the source.
const VARIABLE: [RawTag; 9] = [
    RawTag::Ident,
    RawTag::Number,
    RawTag::String,
    RawTag::Whitespace,
    RawTag::Newline,
    RawTag::LineComment,
    RawTag::InvalidByte,
    RawTag::UnterminatedString,
    RawTag::Eof,
];

fn first_token(source: &str) -> RawToken {
    let buf = SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).next_token()
}

// === Layout ===

#[test]
fn groups_occupy_their_ranges() {
    for tag in [RawTag::Ident, RawTag::Number, RawTag::String] {
        assert!((tag as u8) < 16, "{tag:?}");
    }
    for (tag, _) in &FIXED[..12] {
        assert!((32..64).contains(&(*tag as u8)), "{tag:?}");
    }
    for (tag, _) in &FIXED[12..] {
        assert!((80..96).contains(&(*tag as u8)), "{tag:?}");
    }
    assert_eq!(RawTag::Newline as u8, 113);
    assert_eq!(RawTag::UnterminatedString as u8, 241);
    assert_eq!(RawTag::Eof as u8, u8::MAX);
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Spelling ===

#[test]
fn fixed_spelling_scans_to_its_tag() {
    for (tag, spelling) in FIXED {
        let tok = first_token(spelling);
        assert_eq!(tok.tag, tag, "{spelling:?}");
        assert_eq!(tok.len as usize, spelling.len());
    }
}

// === Trivia ===

#[test]
fn only_whitespace_newline_and_comment_are_trivia() {
    let trivia: Vec<RawTag> = FIXED
        .iter()
        .map(|(tag, _)| *tag)
        .chain(VARIABLE)
        .filter(|t| t.is_trivia())
        .collect();
    assert_eq!(
        trivia,
        vec![RawTag::Whitespace, RawTag::Newline, RawTag::LineComment]
    );
}

#[test]
fn raw_token_copies() {
    let tok = RawToken {
        tag: RawTag::Semicolon,
        len: 1,
    };
    let copy = tok;
    assert_eq!(tok, copy);
}
