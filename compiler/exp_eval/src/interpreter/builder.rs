//! `InterpreterBuilder` for configuring an [`Interpreter`].

use exp_ir::StringInterner;

use super::Interpreter;
use crate::builtins::Builtins;
use crate::diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: standard builtins printing to stdout, call depth limited to
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    builtins: Option<Builtins>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            builtins: None,
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Use exactly these builtins. Overrides [`print_handler`](Self::print_handler).
    #[must_use]
    pub fn builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = Some(builtins);
        self
    }

    /// Route the standard `println` through `handler`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Bound nested user-function calls. `None` removes the bound.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let builtins = self.builtins.unwrap_or_else(|| {
            Builtins::standard(self.print_handler.unwrap_or_else(stdout_handler))
        });
        Interpreter {
            interner: self.interner,
            builtins,
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}
