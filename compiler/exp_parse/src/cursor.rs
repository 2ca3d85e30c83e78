//! Token cursor for navigating the token stream.

use crate::ParseError;
use exp_ir::{Name, Span, StringInterner};
use exp_lexer::{Token, TokenKind};
use tracing::trace;

/// Cursor over a token slice.
///
/// Reading past the end yields a synthetic `Eof` token, so a slice that
/// lacks the trailing `Eof` from the lexer is still safe to walk.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        let end = tokens
            .last()
            .map_or(Span::DUMMY, |t| Span::new(t.span.end, t.span.end));
        Cursor {
            tokens,
            interner,
            pos: 0,
            eof: Token::new(TokenKind::Eof, end),
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eof).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if token.kind != TokenKind::Eof {
            trace!(kind = ?token.kind, start = token.span.start, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with "expected `kind`".
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected_token(
                kind.display_name(),
                self.current(),
                self.interner,
            ))
        }
    }

    /// Consume the closing delimiter matching an opener at `open`.
    ///
    /// Reaching end of input reports the opener as unclosed.
    pub fn expect_closing(
        &mut self,
        close: TokenKind,
        opener: TokenKind,
        open: Span,
    ) -> Result<Token, ParseError> {
        if self.is_at_end() {
            return Err(ParseError::unclosed_delimiter(
                opener,
                open,
                self.current_span(),
            ));
        }
        self.expect(close)
    }

    /// Consume an identifier. `what` names its role in the error message.
    pub fn expect_ident(&mut self, what: &str) -> Result<Name, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::expected_identifier(what, self.current(), self.interner))
        }
    }
}
