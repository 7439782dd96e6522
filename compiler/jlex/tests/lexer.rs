//! Public-API tests for the lexer: whole programs through `lex()`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use jlex::{lex, LexErrorKind, Lexer, Token, TokenKind, TokenStream};
use pretty_assertions::assert_eq;

const PROGRAM: &str = r#"import lib;

// entry point
public class Main {
    private int count = 0;

    public int run(int n) {
        var i = 0;
        while (i <= n and !done) {
            if (i != 3) { count = count + i * 2; } else { return nil; }
            i = i - 1 / 2;
        }
        print("done\n");
        return this.count >= 10 or false;
    }
}
"#;

/// Kinds the keyword table can produce.
fn is_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::And
            | TokenKind::Class
            | TokenKind::Else
            | TokenKind::False
            | TokenKind::For
            | TokenKind::If
            | TokenKind::Import
            | TokenKind::Int
            | TokenKind::NullKeyword
            | TokenKind::Or
            | TokenKind::Private
            | TokenKind::Protected
            | TokenKind::Public
            | TokenKind::Return
            | TokenKind::Super
            | TokenKind::This
            | TokenKind::True
            | TokenKind::Var
            | TokenKind::While
    )
}

fn kinds(tokens: &TokenStream) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

fn summary(tokens: &[Token]) -> Vec<(TokenKind, &str, u32)> {
    tokens
        .iter()
        .map(|t| (t.kind(), t.text(), t.line()))
        .collect()
}

#[test]
fn realistic_program() {
    let tokens = lex(PROGRAM).unwrap();
    assert_eq!(tokens.error_count(), 0);

    let all: Vec<Token> = tokens.iter().cloned().collect();
    assert_eq!(
        summary(&all[..3]),
        vec![
            (TokenKind::Import, "import", 1),
            (TokenKind::Identifier, "lib", 1),
            (TokenKind::Semicolon, ";", 1),
        ]
    );
    assert_eq!(
        summary(&all[3..7]),
        vec![
            (TokenKind::Public, "public", 4),
            (TokenKind::Class, "class", 4),
            (TokenKind::Identifier, "Main", 4),
            (TokenKind::LeftBrace, "{", 4),
        ]
    );

    let string = tokens
        .iter()
        .find(|t| t.kind() == TokenKind::StringLiteral)
        .unwrap();
    assert_eq!(string.text(), "\"done\\n\"");
    assert_eq!(string.line(), 13);

    let eof = tokens.last().unwrap();
    assert!(eof.is_eof());
    assert_eq!(eof.line(), 17);
}

#[test]
fn every_keyword_in_context() {
    let tokens = lex("and class else false for if import int nil or private protected public return super this true var while").unwrap();
    assert!(tokens
        .iter()
        .take(tokens.len() - 1)
        .all(|t| is_keyword(t.kind())));
    assert_eq!(tokens.len(), 20);
}

#[test]
fn unsupported_java_keywords_are_identifiers() {
    let tokens = lex("static void new boolean").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn adjacent_tokens_without_whitespace() {
    let tokens = lex("f(a,b)[0].x;").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::LeftBracket,
            TokenKind::NumberLiteral,
            TokenKind::RightBracket,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn display_matches_reference_line() {
    let tokens = lex("\n  x").unwrap();
    assert_eq!(
        tokens[0].to_string(),
        "Token: 74, Line: 2, Column: 1, Lexeme: x"
    );
    assert_eq!(
        tokens[1].to_string(),
        "Token: 78, Line: 2, Column: 0, Lexeme: "
    );
}

#[test]
fn tokens_outlive_the_session() {
    let token = {
        let mut lexer = Lexer::new("outlives");
        lexer.scan_token().unwrap()
    };
    assert_eq!(token.text(), "outlives");
}

#[test]
fn fatal_error_reports_string_start() {
    let err = lex("a\nb \"never\nclosed").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.line, 2);
    assert_eq!(err.offset, 4);
    assert_eq!(err.to_string(), "Unterminated string (line 2, byte 4)");
}

#[test]
fn escaped_quote_does_not_close_string() {
    let tokens = lex(r#""a\"b" c"#).unwrap();
    assert_eq!(tokens[0].text(), r#""a\"b""#);
    assert_eq!(tokens[1].text(), "c");
}

#[test]
fn interior_nul_is_error_token() {
    let tokens = lex("a\0b").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]
    );
}
