//! Cooked tokens: kind, owned text, line and length.

use std::fmt;

/// Token kind.
///
/// The discriminants are part of the external output format (the
/// `Token: <n>` column), so variant order must never change. Several
/// variants (`Assign`, `PlusAssign`, `Not`, ...) are never produced by the
/// scanner; they hold their slot so later discriminants stay put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Keywords ===
    Class,
    Public,
    Static,
    Void,
    Main,
    String,
    Extends,
    Return,
    Int,
    Boolean,
    If,
    Else,
    While,
    System,
    Out,
    Println,
    Length,
    This,
    New,
    True,
    False,
    Private,
    Protected,
    For,
    Break,
    Continue,
    Super,
    NullKeyword,
    Var,
    Float,
    Double,
    Char,
    Short,
    Long,
    Byte,
    Enum,
    Interface,
    Implements,
    Package,
    Import,
    Instanceof,

    // === Operators ===
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Assign,
    PlusAssign,
    MinusAssign,
    MultiplyAssign,
    DivideAssign,
    ModulusAssign,
    Bang,
    BangEqual,
    EqualEqual,

    // === Punctuation ===
    Semicolon,
    Comma,
    Dot,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Star,

    // === Identifiers & Literals ===
    Identifier,
    NumberLiteral,
    StringLiteral,

    // === Control ===
    /// Unrecognized character. Recoverable: scanning continues after it.
    Error,
    /// End of input. Empty text; always the last token of a stream.
    EndOfFile,
}

impl TokenKind {
    /// Integer code used in the reference output format.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case name, e.g. `LESS_EQUAL`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Class => "CLASS",
            Self::Public => "PUBLIC",
            Self::Static => "STATIC",
            Self::Void => "VOID",
            Self::Main => "MAIN",
            Self::String => "STRING",
            Self::Extends => "EXTENDS",
            Self::Return => "RETURN",
            Self::Int => "INT",
            Self::Boolean => "BOOLEAN",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::System => "SYSTEM",
            Self::Out => "OUT",
            Self::Println => "PRINTLN",
            Self::Length => "LENGTH",
            Self::This => "THIS",
            Self::New => "NEW",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::For => "FOR",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Super => "SUPER",
            Self::NullKeyword => "NULL_KEYWORD",
            Self::Var => "VAR",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Char => "CHAR",
            Self::Short => "SHORT",
            Self::Long => "LONG",
            Self::Byte => "BYTE",
            Self::Enum => "ENUM",
            Self::Interface => "INTERFACE",
            Self::Implements => "IMPLEMENTS",
            Self::Package => "PACKAGE",
            Self::Import => "IMPORT",
            Self::Instanceof => "INSTANCEOF",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Modulus => "MODULUS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Assign => "ASSIGN",
            Self::PlusAssign => "PLUS_ASSIGN",
            Self::MinusAssign => "MINUS_ASSIGN",
            Self::MultiplyAssign => "MULTIPLY_ASSIGN",
            Self::DivideAssign => "DIVIDE_ASSIGN",
            Self::ModulusAssign => "MODULUS_ASSIGN",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::Star => "STAR",
            Self::Identifier => "IDENTIFIER",
            Self::NumberLiteral => "NUMBER_LITERAL",
            Self::StringLiteral => "STRING_LITERAL",
            Self::Error => "ERROR",
            Self::EndOfFile => "END_OF_FILE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// Owns a copy of its text, so a token stays valid after the source buffer
/// it came from is dropped. Fields are read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: u32,
    length: u32,
}

impl Token {
    /// Build a token, copying `text`. `length` is its character count.
    pub fn new(kind: TokenKind, text: &str, line: u32) -> Self {
        let length = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        Self {
            kind,
            text: text.to_owned(),
            line,
            length,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token. Strings keep their quotes.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line of the token's first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Number of characters in [`text`](Self::text).
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The value printed in the `Column:` field of the reference format.
    ///
    /// This is the token length, not an offset from the start of the line.
    #[inline]
    pub fn column(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

/// Reference output line: `Token: <code>, Line: <n>, Column: <len>, Lexeme: <text>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token: {}, Line: {}, Column: {}, Lexeme: {}",
            self.kind.code(),
            self.line,
            self.column(),
            self.text
        )
    }
}

#[cfg(test)]
mod tests;
