use super::*;
use pretty_assertions::assert_eq;

// === Discriminants ===

#[test]
fn codes_match_reference_numbering() {
    assert_eq!(TokenKind::Class.code(), 0);
    assert_eq!(TokenKind::Int.code(), 8);
    assert_eq!(TokenKind::If.code(), 10);
    assert_eq!(TokenKind::NullKeyword.code(), 27);
    assert_eq!(TokenKind::Instanceof.code(), 40);
    assert_eq!(TokenKind::Plus.code(), 41);
    assert_eq!(TokenKind::Divide.code(), 44);
    assert_eq!(TokenKind::Equal.code(), 49);
    assert_eq!(TokenKind::LessEqual.code(), 52);
    assert_eq!(TokenKind::Bang.code(), 61);
    assert_eq!(TokenKind::EqualEqual.code(), 63);
    assert_eq!(TokenKind::Semicolon.code(), 64);
    assert_eq!(TokenKind::Star.code(), 73);
    assert_eq!(TokenKind::Identifier.code(), 74);
    assert_eq!(TokenKind::NumberLiteral.code(), 75);
    assert_eq!(TokenKind::StringLiteral.code(), 76);
    assert_eq!(TokenKind::Error.code(), 77);
    assert_eq!(TokenKind::EndOfFile.code(), 78);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Names ===

#[test]
fn names_use_reference_spelling() {
    assert_eq!(TokenKind::NullKeyword.name(), "NULL_KEYWORD");
    assert_eq!(TokenKind::LessEqual.name(), "LESS_EQUAL");
    assert_eq!(TokenKind::EndOfFile.name(), "END_OF_FILE");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
}

// === Token ===

#[test]
fn token_copies_text_and_counts_length() {
    let source = String::from("counter");
    let token = Token::new(TokenKind::Identifier, &source, 3);
    drop(source);
    assert_eq!(token.text(), "counter");
    assert_eq!(token.length(), 7);
    assert_eq!(token.line(), 3);
    assert_eq!(token.kind(), TokenKind::Identifier);
}

#[test]
fn length_counts_characters_not_bytes() {
    let token = Token::new(TokenKind::StringLiteral, "\"caf\u{e9}\"", 1);
    assert_eq!(token.length(), 6);
}

#[test]
fn column_is_length() {
    let token = Token::new(TokenKind::LessEqual, "<=", 9);
    assert_eq!(token.column(), token.length());
    assert_eq!(token.column(), 2);
}

#[test]
fn eof_token_is_empty() {
    let token = Token::new(TokenKind::EndOfFile, "", 4);
    assert!(token.is_eof());
    assert_eq!(token.length(), 0);
    assert_eq!(token.text(), "");
}

#[test]
fn display_matches_reference_format() {
    let token = Token::new(TokenKind::Identifier, "x", 1);
    assert_eq!(
        token.to_string(),
        "Token: 74, Line: 1, Column: 1, Lexeme: x"
    );

    let eof = Token::new(TokenKind::EndOfFile, "", 2);
    assert_eq!(eof.to_string(), "Token: 78, Line: 2, Column: 0, Lexeme: ");
}
