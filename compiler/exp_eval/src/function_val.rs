//! Callable values stored in a scope's function table.

use std::fmt;
use std::rc::Rc;

use exp_ir::{Function, Int};

use crate::environment::{Scope, WeakScope};

/// Native function: evaluated arguments in, integer out.
pub type NativeFn = Rc<dyn Fn(&[Int]) -> Int>;

/// Anything a call expression can resolve to.
#[derive(Clone)]
pub enum Callable<'p> {
    /// Host-supplied function. Accepts any number of arguments.
    Builtin(NativeFn),
    /// Function declared by the program, closed over its declaration scope.
    User {
        decl: &'p Function,
        env: WeakScope<Scope<'p>>,
    },
}

impl Callable<'_> {
    /// Declared parameter count, or `None` for variadic builtins.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Callable::Builtin(_) => None,
            Callable::User { decl, .. } => Some(decl.arity()),
        }
    }
}

impl fmt::Debug for Callable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Builtin(_) => f.write_str("Builtin"),
            Callable::User { decl, .. } => f
                .debug_struct("User")
                .field("name", &decl.name)
                .field("arity", &decl.arity())
                .finish(),
        }
    }
}
