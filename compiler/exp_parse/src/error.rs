//! Parse errors.
//!
//! The parser stops at the first error; each error carries a code, a
//! message, the offending span and optionally the span of a related token
//! (the opening delimiter for unclosed-delimiter errors).

use exp_diagnostic::{Diagnostic, ErrorCode};
use exp_ir::{Span, StringInterner};
use exp_lexer::{LexError, Token, TokenKind};

/// Parse error with error code for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Inline label at the primary location.
    pub label: String,
    /// Related location, e.g. where an unclosed delimiter was opened.
    pub related: Option<(Span, String)>,
}

impl ParseError {
    #[cold]
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        label: impl Into<String>,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            label: label.into(),
            related: None,
        }
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    /// `expected <what>, found <token>`.
    #[cold]
    pub fn unexpected_token(expected: &str, found: &Token, interner: &StringInterner) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", describe(found, interner)),
            found.span,
            format!("expected {expected}"),
        )
    }

    #[cold]
    pub fn expected_expression(found: &Token, interner: &StringInterner) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", describe(found, interner)),
            found.span,
            "expected expression",
        )
    }

    /// End of input reached before the delimiter opened at `open` was closed.
    #[cold]
    pub fn unclosed_delimiter(open_kind: TokenKind, open: Span, eof: Span) -> Self {
        let delim = open_kind.display_name();
        ParseError::new(
            ErrorCode::E1003,
            format!("unclosed delimiter {delim}"),
            eof,
            "input ends here",
        )
        .with_related(open, format!("{delim} opened here"))
    }

    /// `what` names the identifier's role, e.g. "function name".
    #[cold]
    pub fn expected_identifier(what: &str, found: &Token, interner: &StringInterner) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected {what}, found {}", describe(found, interner)),
            found.span,
            format!("expected {what}"),
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, &self.label);
        match &self.related {
            Some((span, message)) => diag.with_secondary_label(*span, message),
            None => diag,
        }
    }
}

/// Describe a token for an error message, including identifier text.
fn describe(token: &Token, interner: &StringInterner) -> String {
    match token.kind {
        TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(name)),
        TokenKind::Int(value) => format!("integer literal `{value}`"),
        kind => kind.display_name().to_string(),
    }
}

/// Any error produced while turning source text into an AST.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(err) => err.span(),
            SyntaxError::Parse(err) => err.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::Lex(err) => err.code(),
            SyntaxError::Parse(err) => err.code,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SyntaxError::Lex(err) => err.to_diagnostic(),
            SyntaxError::Parse(err) => err.to_diagnostic(),
        }
    }
}
