//! Call-frame tracking for the evaluator.
//!
//! [`CallStack`] records the user functions currently executing. It bounds
//! recursion depth and supplies the backtrace attached to runtime errors.

use exp_ir::{Name, StringInterner};

use crate::errors::{recursion_limit_exceeded, EvalBacktrace, EvalError};

/// Default bound on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Live stack of user-function activations.
///
/// Each call pushes the callee's name and pops it on return, successful or
/// not. Builtins are not tracked.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<Name>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing if the depth limit is reached.
    ///
    /// The frame is not pushed on failure.
    pub fn push(&mut self, name: Name) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(name);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot the frames, most recent call first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        EvalBacktrace::new(
            self.frames
                .iter()
                .rev()
                .map(|&name| interner.lookup(name).to_string())
                .collect(),
        )
    }

    /// Attach the current backtrace to `err`.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}
