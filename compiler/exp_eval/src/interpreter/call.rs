//! Function calls.
//!
//! The callee is resolved from the call site; its arguments are evaluated
//! left to right in a throwaway child of the call site; a user function's
//! body then runs in a fresh child of the scope it was declared in.

use exp_ir::{Expr, Function, Int, Name};
use smallvec::SmallVec;
use tracing::trace;

use super::Interpreter;
use crate::environment::{LocalScope, Scope, WeakScope};
use crate::errors::{arity_mismatch, undefined_function, EvalResult};
use crate::function_val::Callable;

/// Evaluated call arguments.
type Args = SmallVec<[Int; 4]>;

impl Interpreter<'_> {
    pub(super) fn eval_call<'p>(
        &mut self,
        callee: Name,
        args: &'p [Expr],
        scope: &LocalScope<Scope<'p>>,
    ) -> EvalResult<Int> {
        let found = scope.borrow().get_function(callee);
        let callable = found.map_err(|e| self.scope_error(e))?;

        let values = {
            let arg_scope = Scope::child_of(scope);
            let mut values = Args::with_capacity(args.len());
            for arg in args {
                values.push(self.eval_expr(arg, &arg_scope)?);
            }
            values
        };

        match callable {
            Callable::Builtin(f) => Ok(f(values.as_slice())),
            Callable::User { decl, env } => self.call_user(decl, &env, &values),
        }
    }

    /// Invoke a user function: check arity, bind parameters in a child of
    /// the declaration scope, run the body. No `return` means `0`.
    fn call_user<'p>(
        &mut self,
        decl: &'p Function,
        env: &WeakScope<Scope<'p>>,
        args: &[Int],
    ) -> EvalResult<Int> {
        let name = self.interner.lookup(decl.name);
        if args.len() != decl.arity() {
            return Err(self.fail(arity_mismatch(name, decl.arity(), args.len())));
        }
        // The declaring scope owns this function, so it is alive whenever the
        // function could be resolved.
        let Some(env) = env.upgrade() else {
            return Err(self.fail(undefined_function(name)));
        };

        self.call_stack.push(decl.name).map_err(|e| self.fail(e))?;
        trace!(function = name, depth = self.call_stack.depth(), "call");

        let result = self.run_activation(decl, &env, args);
        self.call_stack.pop();
        Ok(result?.unwrap_or(0))
    }

    fn run_activation<'p>(
        &mut self,
        decl: &'p Function,
        env: &LocalScope<Scope<'p>>,
        args: &[Int],
    ) -> EvalResult<Option<Int>> {
        let activation = Scope::child_of(env);
        for (&param, &value) in decl.params.iter().zip(args) {
            let declared = activation.borrow_mut().declare_variable(param, value);
            declared.map_err(|e| self.scope_error(e))?;
        }
        self.eval_block(&decl.body, &activation)
    }
}
