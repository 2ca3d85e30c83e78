//! Recursive descent parser for Exp.
//!
//! Produces a [`Block`] holding the program's top-level statements. Parsing
//! stops at the first error.

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, SyntaxError};

use cursor::Cursor;
use exp_ir::{Block, StringInterner};
use exp_lexer::Token;

/// Parser state.
struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }
}

/// Parse a token list produced by [`exp_lexer::lex`].
pub fn parse(tokens: &[Token], interner: &StringInterner) -> Result<Block, ParseError> {
    Parser::new(tokens, interner).parse_program()
}

/// Lex and parse source text in one step.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<Block, SyntaxError> {
    let tokens = exp_lexer::lex(source, interner)?;
    Ok(parse(&tokens, interner)?)
}
