//! Chained scopes binding names to integers and to callables.
//!
//! Each [`Scope`] holds its own variable and function tables and a handle
//! to its parent. Lookups walk outward from the innermost scope; declarations
//! only ever touch the scope they are made in, so a child may shadow any
//! name its ancestors bind.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use exp_ir::{Int, Name};

use crate::function_val::Callable;

/// A single-threaded shared scope: `Rc<RefCell<T>>` behind a factory.
///
/// Scopes are shared between the evaluation that is running in them, their
/// children, and the functions declared in them; the interpreter is
/// single-threaded, so `Rc` rather than `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Non-owning handle to this scope.
    #[inline]
    pub fn downgrade(&self) -> WeakScope<T> {
        WeakScope(Rc::downgrade(&self.0))
    }

    /// Whether both handles refer to the same scope.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Weak counterpart of [`LocalScope`].
///
/// A function stores one of these to the scope it was declared in. The
/// function itself lives in that scope's table, so a strong handle would
/// form a cycle.
pub struct WeakScope<T>(Weak<RefCell<T>>);

impl<T> WeakScope<T> {
    #[inline]
    pub fn upgrade(&self) -> Option<LocalScope<T>> {
        self.0.upgrade().map(LocalScope)
    }
}

impl<T> Clone for WeakScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        WeakScope(Weak::clone(&self.0))
    }
}

impl<T> fmt::Debug for WeakScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakScope(..)")
    }
}

/// Failure of a scope operation. Carries the name the operation was about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// The variable is already declared in this very scope.
    DuplicateVariable(Name),
    /// The function is already declared in this very scope.
    DuplicateFunction(Name),
    /// No scope in the chain declares the variable.
    UndefinedVariable(Name),
    /// No scope in the chain declares the function.
    UndefinedFunction(Name),
}

/// One link in the scope chain.
///
/// `'p` is the lifetime of the program being run: user functions borrow
/// their declarations from it.
pub struct Scope<'p> {
    variables: FxHashMap<Name, Int>,
    functions: FxHashMap<Name, Callable<'p>>,
    parent: Option<LocalScope<Scope<'p>>>,
}

impl<'p> Scope<'p> {
    /// Create a root scope.
    pub fn new() -> Self {
        Scope {
            variables: FxHashMap::default(),
            functions: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a child of `parent`.
    pub fn with_parent(parent: LocalScope<Scope<'p>>) -> Self {
        Scope {
            variables: FxHashMap::default(),
            functions: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Create a child of `parent`, already wrapped for sharing.
    pub fn child_of(parent: &LocalScope<Scope<'p>>) -> LocalScope<Scope<'p>> {
        LocalScope::new(Scope::with_parent(parent.clone()))
    }

    /// Bind `name` in this scope. Ancestors are not consulted.
    pub fn declare_variable(&mut self, name: Name, value: Int) -> Result<(), ScopeError> {
        if self.variables.contains_key(&name) {
            return Err(ScopeError::DuplicateVariable(name));
        }
        self.variables.insert(name, value);
        Ok(())
    }

    /// Overwrite the nearest binding of `name`.
    pub fn set_variable(&mut self, name: Name, value: Int) -> Result<(), ScopeError> {
        if let Some(slot) = self.variables.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().set_variable(name, value),
            None => Err(ScopeError::UndefinedVariable(name)),
        }
    }

    /// Read the nearest binding of `name`.
    pub fn get_variable(&self, name: Name) -> Result<Int, ScopeError> {
        if let Some(&value) = self.variables.get(&name) {
            return Ok(value);
        }
        match &self.parent {
            Some(parent) => parent.borrow().get_variable(name),
            None => Err(ScopeError::UndefinedVariable(name)),
        }
    }

    /// Register `callable` under `name` in this scope. Ancestors are not consulted.
    pub fn declare_function(
        &mut self,
        name: Name,
        callable: Callable<'p>,
    ) -> Result<(), ScopeError> {
        if self.functions.contains_key(&name) {
            return Err(ScopeError::DuplicateFunction(name));
        }
        self.functions.insert(name, callable);
        Ok(())
    }

    /// Resolve the nearest function named `name`.
    ///
    /// Returns a clone so no borrow of the chain outlives the lookup.
    pub fn get_function(&self, name: Name) -> Result<Callable<'p>, ScopeError> {
        if let Some(callable) = self.functions.get(&name) {
            return Ok(callable.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().get_function(name),
            None => Err(ScopeError::UndefinedFunction(name)),
        }
    }

    #[cfg(test)]
    pub(crate) fn parent(&self) -> Option<&LocalScope<Scope<'p>>> {
        self.parent.as_ref()
    }
}

impl Default for Scope<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("variables", &self.variables)
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
