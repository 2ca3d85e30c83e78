//! Lexer for the Exp language.
//!
//! Converts source text into a flat token list. Whitespace (newlines
//! included) and `//` line comments are insignificant. Identifiers are
//! interned while lexing so the parser only ever sees [`Name`]s.
//!
//! The raw scanner is generated by `logos`; [`lex`] turns its output into
//! [`Token`]s and terminates the list with [`TokenKind::Eof`].

use exp_diagnostic::{Diagnostic, ErrorCode};
use exp_ir::{BinaryOp, Int, Name, Span, StringInterner};
use logos::Logos;

/// Raw token produced by the generated scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
enum RawToken {
    // Keywords
    #[token("fun")]
    Fun,
    #[token("var")]
    Var,
    #[token("while")]
    While,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token("<=")]
    LtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("||")]
    PipePipe,
    #[token("&&")]
    AmpAmp,

    // Literals
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Token kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Fun,
    Var,
    While,
    If,
    Else,
    Return,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Assign,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Gt,
    Lt,
    GtEq,
    LtEq,
    EqEq,
    NotEq,
    PipePipe,
    AmpAmp,

    // Literals
    Int(Int),
    Ident(Name),

    Eof,
}

impl TokenKind {
    /// Short human-readable description for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Fun => "`fun`",
            TokenKind::Var => "`var`",
            TokenKind::While => "`while`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Return => "`return`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Assign => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Gt => "`>`",
            TokenKind::Lt => "`<`",
            TokenKind::GtEq => "`>=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::PipePipe => "`||`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::Int(_) => "integer literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Eof => "end of file",
        }
    }

    /// The binary operator this token spells, if any.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::PipePipe => Some(BinaryOp::Or),
            TokenKind::AmpAmp => Some(BinaryOp::And),
            _ => None,
        }
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer errors. Lexing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("invalid character `{ch}`")]
    InvalidCharacter { ch: char, span: Span },
    #[error("integer literal `{text}` is out of range")]
    IntegerOutOfRange { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { span, .. } | LexError::IntegerOutOfRange { span, .. } => {
                *span
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::InvalidCharacter { .. } => ErrorCode::E0002,
            LexError::IntegerOutOfRange { .. } => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::InvalidCharacter { .. } => diag.with_label(self.span(), "not valid here"),
            LexError::IntegerOutOfRange { .. } => diag
                .with_label(self.span(), "literal does not fit")
                .with_note(format!("the largest integer literal is {}", Int::MAX)),
        }
    }
}

/// Tokenize `source`, interning identifiers into `interner`.
///
/// The returned list always ends with a single `Eof` token whose span is
/// the empty range at the end of the source.
pub fn lex(source: &str, interner: &StringInterner) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        let Ok(raw) = result else {
            let ch = slice.chars().next().unwrap_or('\0');
            return Err(LexError::InvalidCharacter { ch, span });
        };
        let kind = match raw {
            RawToken::Fun => TokenKind::Fun,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Return => TokenKind::Return,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Lt => TokenKind::Lt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::Int => match slice.parse::<Int>() {
                Ok(value) => TokenKind::Int(value),
                Err(_) => {
                    return Err(LexError::IntegerOutOfRange {
                        text: slice.to_string(),
                        span,
                    })
                }
            },
            RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        };
        tokens.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    Ok(tokens)
}
