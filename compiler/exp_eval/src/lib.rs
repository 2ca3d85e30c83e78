//! Tree-walking interpreter for Exp.
//!
//! Evaluates a parsed [`Block`](exp_ir::Block) against a chain of
//! [`Scope`]s. The only capability the host supplies is a set of
//! [`Builtins`]; by default that is `println` writing to stdout.

mod builtins;
mod diagnostics;
mod environment;
pub mod errors;
mod function_val;
mod interpreter;
mod operators;
mod print_handler;

pub use builtins::{Builtins, PRINTLN};
pub use diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{LocalScope, Scope, ScopeError, WeakScope};
pub use errors::{EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use function_val::{Callable, NativeFn};
pub use interpreter::{run, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};

#[cfg(test)]
mod tests;
