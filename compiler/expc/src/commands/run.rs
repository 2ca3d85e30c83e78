//! The `run` command.

use std::process::ExitCode;

use exp_diagnostic::Diagnostic;
use exp_eval::{stdout_handler, InterpreterBuilder, SharedPrintHandler};
use exp_ir::StringInterner;
use tracing::debug;

use super::drive;
use crate::CliOptions;

/// Parse and evaluate `source`, with `println` writing through `handler`.
pub fn run_program(
    source: &str,
    max_depth: Option<usize>,
    handler: SharedPrintHandler,
) -> Result<(), Diagnostic> {
    let interner = StringInterner::new();
    let program =
        exp_parse::parse_source(source, &interner).map_err(|e| e.to_diagnostic())?;
    debug!(statements = program.stmts.len(), "parsed program");
    InterpreterBuilder::new(&interner)
        .print_handler(handler)
        .max_call_depth(max_depth)
        .build()
        .run(&program)
        .map_err(|e| e.to_diagnostic())
}

/// `exp run <file>`: evaluate a file with `println` on stdout.
pub fn run_file(options: &CliOptions) -> ExitCode {
    drive(options, |source| {
        run_program(source, options.max_depth, stdout_handler())
    })
}
