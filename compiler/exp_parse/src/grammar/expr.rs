//! Expression parsing.
//!
//! Binary operators are parsed by precedence climbing over
//! [`BinaryOp::precedence`]: level 1 binds tightest (`* / %`), level 6
//! loosest (`||`). Every level is left-associative.

use crate::{ParseError, Parser};
use exp_ir::{BinaryOp, Expr};
use exp_lexer::TokenKind;
use exp_stack::ensure_sufficient_stack;

/// Precedence level of `||`.
const LOOSEST: u8 = 6;

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary(LOOSEST))
    }

    fn parse_binary(&mut self, level: u8) -> Result<Expr, ParseError> {
        if level == 0 {
            return self.parse_primary();
        }
        let mut left = self.parse_binary(level - 1)?;
        while let Some(op) = self.binary_op_at(level) {
            self.cursor.advance();
            let right = self.parse_binary(level - 1)?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn binary_op_at(&self, level: u8) -> Option<BinaryOp> {
        self.cursor
            .current_kind()
            .binary_op()
            .filter(|op| op.precedence() == level)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Int(value) => {
                self.cursor.advance();
                Ok(Expr::Literal(value))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::LParen) {
                    let args = self.parse_call_args()?;
                    Ok(Expr::call(name, args))
                } else {
                    Ok(Expr::Ident(name))
                }
            }
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let inner = self.parse_expr()?;
                self.cursor
                    .expect_closing(TokenKind::RParen, TokenKind::LParen, open)?;
                Ok(inner)
            }
            _ => Err(ParseError::expected_expression(
                self.cursor.current(),
                self.cursor.interner(),
            )),
        }
    }

    /// `"(" (expr ("," expr)*)? ")"`
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?.span;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .expect_closing(TokenKind::RParen, TokenKind::LParen, open)?;
        Ok(args)
    }
}
