//! Evaluator tests driven by parsed source.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod control_flow;

use exp_ir::{Block, StringInterner};

use crate::{buffer_handler, EvalResult, InterpreterBuilder};

pub(crate) fn parse(source: &str, interner: &StringInterner) -> Block {
    exp_parse::parse_source(source, interner).unwrap()
}

/// Run `source` with `println` captured; return the result and the output.
pub(crate) fn run_capture(source: &str) -> (EvalResult<()>, String) {
    let interner = StringInterner::new();
    let program = parse(source, &interner);
    let out = buffer_handler();
    let result = InterpreterBuilder::new(&interner)
        .print_handler(out.clone())
        .build()
        .run(&program);
    (result, out.get_output())
}

/// Run `source`, which must succeed, and return its output.
pub(crate) fn output(source: &str) -> String {
    let (result, out) = run_capture(source);
    if let Err(err) = result {
        panic!("program failed: {err}\noutput so far:\n{out}");
    }
    out
}
