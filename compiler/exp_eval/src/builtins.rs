//! Host-supplied functions seeded into the root scope.

use std::fmt;
use std::rc::Rc;

use exp_ir::Int;

use crate::function_val::NativeFn;
use crate::print_handler::SharedPrintHandler;

/// Name of the output builtin.
pub const PRINTLN: &str = "println";

/// Ordered registry of native functions.
#[derive(Clone, Default)]
pub struct Builtins {
    entries: Vec<(String, NativeFn)>,
}

impl Builtins {
    /// An empty registry.
    pub fn new() -> Self {
        Builtins::default()
    }

    /// The standard library: `println` writing through `handler`.
    ///
    /// `println` joins its arguments with single spaces, writes them as one
    /// line, and returns `0`.
    pub fn standard(handler: SharedPrintHandler) -> Self {
        Builtins::new().with(PRINTLN, move |args: &[Int]| {
            let line = args
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            handler.println(&line);
            0
        })
    }

    /// Register `f` under `name`, replacing any earlier entry of that name.
    #[must_use]
    pub fn with(mut self, name: &str, f: impl Fn(&[Int]) -> Int + 'static) -> Self {
        self.insert(name, Rc::new(f));
        self
    }

    pub fn insert(&mut self, name: &str, f: NativeFn) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = f,
            None => self.entries.push((name.to_string(), f)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NativeFn)> {
        self.entries.iter().map(|(name, f)| (name.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Builtins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print_handler::buffer_handler;

    fn call(builtins: &Builtins, name: &str, args: &[Int]) -> Option<Int> {
        builtins
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| f(args))
    }

    #[test]
    fn println_joins_with_spaces_and_returns_zero() {
        let out = buffer_handler();
        let builtins = Builtins::standard(out.clone());
        assert_eq!(call(&builtins, PRINTLN, &[1, -2, 3]), Some(0));
        assert_eq!(call(&builtins, PRINTLN, &[]), Some(0));
        assert_eq!(out.get_output(), "1 -2 3\n\n");
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let builtins = Builtins::new()
            .with("f", |_: &[Int]| 1)
            .with("g", |_: &[Int]| 2)
            .with("f", |args: &[Int]| args.iter().sum());
        assert_eq!(builtins.len(), 2);
        assert_eq!(call(&builtins, "f", &[4, 5]), Some(9));
        assert_eq!(call(&builtins, "g", &[]), Some(2));
        assert_eq!(call(&builtins, "h", &[]), None);
        assert_eq!(format!("{builtins:?}"), r#"["f", "g"]"#);
    }

    #[test]
    fn empty_registry() {
        assert!(Builtins::new().is_empty());
    }
}
