//! Command handlers for the `exp` CLI.
//!
//! Each command has a pure core that maps source text to output or a
//! [`Diagnostic`], and a file-level wrapper used by the binary that reads
//! the file, prints, and picks the exit status.

use std::io::IsTerminal;
use std::process::ExitCode;

use exp_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use exp_diagnostic::Diagnostic;

use crate::CliOptions;

mod debug;
mod run;

pub use debug::{lex_file, lex_listing, parse_file, parse_listing};
pub use run::{run_file, run_program};

/// Read a source file, reporting failure on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            None
        }
    }
}

/// Render `diagnostic` against `source` as terminal text.
pub fn render_diagnostic(
    diagnostic: &Diagnostic,
    source: &str,
    path: &str,
    color: ColorMode,
    is_tty: bool,
) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Shared driver: read the file, run `core`, print its output or the
/// diagnostic.
pub(crate) fn drive(
    options: &CliOptions,
    core: impl FnOnce(&str) -> Result<(), Diagnostic>,
) -> ExitCode {
    let Some(source) = read_file(&options.path) else {
        return ExitCode::FAILURE;
    };
    match core(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(diagnostic) => {
            let is_tty = std::io::stderr().is_terminal();
            eprint!(
                "{}",
                render_diagnostic(&diagnostic, &source, &options.path, options.color, is_tty)
            );
            ExitCode::FAILURE
        }
    }
}
