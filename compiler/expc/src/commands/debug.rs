//! Inspection commands: `lex` and `parse`.

use std::fmt::Write;
use std::process::ExitCode;

use exp_diagnostic::span_utils::LineOffsetTable;
use exp_diagnostic::Diagnostic;
use exp_ir::pretty::print_block;
use exp_ir::StringInterner;
use exp_lexer::TokenKind;

use super::drive;
use crate::CliOptions;

/// One token per line: `line:col kind`.
pub fn lex_listing(source: &str) -> Result<String, Diagnostic> {
    let interner = StringInterner::new();
    let tokens = exp_lexer::lex(source, &interner).map_err(|e| e.to_diagnostic())?;
    let table = LineOffsetTable::build(source);

    let mut out = String::new();
    for token in &tokens {
        let (line, col) = table.offset_to_line_col(source, token.span.start as usize);
        let _ = match token.kind {
            TokenKind::Ident(name) => {
                writeln!(out, "{line}:{col} identifier `{}`", interner.lookup(name))
            }
            TokenKind::Int(value) => writeln!(out, "{line}:{col} integer `{value}`"),
            kind => writeln!(out, "{line}:{col} {}", kind.display_name()),
        };
    }
    Ok(out)
}

/// The canonical source of the parsed program.
pub fn parse_listing(source: &str) -> Result<String, Diagnostic> {
    let interner = StringInterner::new();
    let program = exp_parse::parse_source(source, &interner).map_err(|e| e.to_diagnostic())?;
    Ok(print_block(&program, &interner))
}

pub fn lex_file(options: &CliOptions) -> ExitCode {
    drive(options, |source| {
        print!("{}", lex_listing(source)?);
        Ok(())
    })
}

pub fn parse_file(options: &CliOptions) -> ExitCode {
    drive(options, |source| {
        print!("{}", parse_listing(source)?);
        Ok(())
    })
}
