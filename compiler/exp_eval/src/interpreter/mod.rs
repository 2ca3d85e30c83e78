//! The tree-walking interpreter.
//!
//! A run creates a fresh root [`Scope`] seeded with the configured
//! builtins and evaluates the program block directly in it. Statements
//! yield `Option<Int>`: `Some` only ever comes from `return` and is
//! propagated outward until a function activation (or the program root)
//! absorbs it.

mod builder;
mod call;
mod exec;

pub use builder::InterpreterBuilder;

use exp_ir::{Block, StringInterner};
use tracing::debug;

use crate::builtins::Builtins;
use crate::diagnostics::CallStack;
use crate::environment::{LocalScope, Scope, ScopeError};
use crate::errors::{
    duplicate_function, duplicate_variable, undefined_function, undefined_variable, EvalError,
    EvalResult,
};
use crate::function_val::Callable;

/// Evaluates programs against a set of builtins.
///
/// Runs are independent: nothing declared by one run is visible to the next.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    builtins: Builtins,
    call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the standard builtins writing to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Run `program` to completion.
    ///
    /// A top-level `return` ends the run early; its value is discarded.
    pub fn run(&mut self, program: &Block) -> EvalResult<()> {
        debug!(
            statements = program.stmts.len(),
            builtins = self.builtins.len(),
            max_call_depth = ?self.call_stack.max_depth(),
            "run start"
        );
        let root = self.root_scope()?;
        let result = self.eval_block(program, &root);
        debug_assert!(self.call_stack.is_empty(), "unbalanced call stack after run");
        debug!(ok = result.is_ok(), "run finished");
        result.map(|_| ())
    }

    /// Fresh root scope holding one entry per builtin.
    fn root_scope<'p>(&self) -> EvalResult<LocalScope<Scope<'p>>> {
        let root = LocalScope::new(Scope::new());
        for (name, f) in self.builtins.iter() {
            let name = self.interner.intern(name);
            let declared = root
                .borrow_mut()
                .declare_function(name, Callable::Builtin(f.clone()));
            declared.map_err(|e| self.scope_error(e))?;
        }
        Ok(root)
    }

    /// Resolve a scope failure's name and attach the current backtrace.
    #[cold]
    fn scope_error(&self, err: ScopeError) -> EvalError {
        let err = match err {
            ScopeError::DuplicateVariable(name) => duplicate_variable(self.interner.lookup(name)),
            ScopeError::DuplicateFunction(name) => duplicate_function(self.interner.lookup(name)),
            ScopeError::UndefinedVariable(name) => undefined_variable(self.interner.lookup(name)),
            ScopeError::UndefinedFunction(name) => undefined_function(self.interner.lookup(name)),
        };
        self.fail(err)
    }

    /// Attach the current backtrace to an error raised at this point.
    #[cold]
    fn fail(&self, err: EvalError) -> EvalError {
        self.call_stack.attach_backtrace(err, self.interner)
    }
}

/// Run `program` once with the given builtins and default settings.
pub fn run(program: &Block, builtins: Builtins, interner: &StringInterner) -> EvalResult<()> {
    InterpreterBuilder::new(interner)
        .builtins(builtins)
        .build()
        .run(program)
}
