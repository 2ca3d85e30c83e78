//! Statement and block parsing.

use crate::{ParseError, Parser};
use exp_ir::{Block, Expr, Function, Stmt};
use exp_lexer::TokenKind;
use exp_stack::ensure_sufficient_stack;
use tracing::debug;

impl Parser<'_> {
    /// Parse statements until end of input.
    pub(crate) fn parse_program(&mut self) -> Result<Block, ParseError> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.eat(TokenKind::Semicolon) {
                continue;
            }
            stmts.push(self.parse_stmt()?);
        }
        Ok(Block::new(stmts))
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RBrace => {
                    self.cursor.advance();
                    return Ok(Block::new(stmts));
                }
                TokenKind::Eof => {
                    return Err(ParseError::unclosed_delimiter(
                        TokenKind::LBrace,
                        open,
                        self.cursor.current_span(),
                    ));
                }
                TokenKind::Semicolon => {
                    self.cursor.advance();
                }
                _ => stmts.push(self.parse_stmt()?),
            }
        }
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| {
            let stmt = match self.cursor.current_kind() {
                TokenKind::Fun => Stmt::Function(self.parse_function()?),
                TokenKind::Var => {
                    self.cursor.advance();
                    let name = self.cursor.expect_ident("variable name")?;
                    self.cursor.expect(TokenKind::Assign)?;
                    let value = self.parse_expr()?;
                    Stmt::Variable { name, value }
                }
                TokenKind::While => {
                    self.cursor.advance();
                    let cond = self.parse_condition()?;
                    let body = self.parse_block()?;
                    Stmt::While { cond, body }
                }
                TokenKind::If => {
                    self.cursor.advance();
                    let cond = self.parse_condition()?;
                    let then_branch = self.parse_block()?;
                    let else_branch = if self.cursor.eat(TokenKind::Else) {
                        self.parse_block()?
                    } else {
                        Block::empty()
                    };
                    Stmt::If {
                        cond,
                        then_branch,
                        else_branch,
                    }
                }
                TokenKind::Return => {
                    self.cursor.advance();
                    Stmt::Return(self.parse_expr()?)
                }
                TokenKind::Ident(name) if self.cursor.peek_kind() == TokenKind::Assign => {
                    self.cursor.advance();
                    self.cursor.advance();
                    let value = self.parse_expr()?;
                    Stmt::Assign { name, value }
                }
                _ => Stmt::Expr(self.parse_expr()?),
            };
            self.cursor.eat(TokenKind::Semicolon);
            Ok(stmt)
        })
    }

    fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.cursor.expect(TokenKind::Fun)?;
        let name = self.cursor.expect_ident("function name")?;
        let open = self.cursor.expect(TokenKind::LParen)?.span;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                params.push(self.cursor.expect_ident("parameter name")?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .expect_closing(TokenKind::RParen, TokenKind::LParen, open)?;

        let body = self.parse_block()?;
        debug!(
            name = self.cursor.interner().lookup(name),
            arity = params.len(),
            "parsed function"
        );
        Ok(Function { name, params, body })
    }

    /// `"(" expr ")"` after `while` and `if`.
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?.span;
        let cond = self.parse_expr()?;
        self.cursor
            .expect_closing(TokenKind::RParen, TokenKind::LParen, open)?;
        Ok(cond)
    }
}
