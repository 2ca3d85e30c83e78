//! Runtime errors.
//!
//! Every runtime failure is fatal: it unwinds to the caller of
//! [`Interpreter::run`](crate::Interpreter::run) carrying the kind, the
//! offending name where there is one, and the user-function backtrace at
//! the point of failure.

use std::fmt;

use exp_diagnostic::{Diagnostic, ErrorCode};

/// Result of evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Backtrace frames rendered as notes before the rest are summarized.
const MAX_NOTE_FRAMES: usize = 8;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("variable `{name}` is already declared in this scope")]
    DuplicateVariable { name: String },
    #[error("function `{name}` is already declared in this scope")]
    DuplicateFunction { name: String },
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String },
    #[error("function `{name}` takes {expected} argument{}, got {got}", plural(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("call depth limit of {depth} exceeded")]
    RecursionLimitExceeded { depth: usize },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::DuplicateVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::DuplicateFunction { .. } => ErrorCode::E6002,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
            EvalErrorKind::UndefinedFunction { .. } => ErrorCode::E6004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::DivisionByZero => ErrorCode::E6006,
            EvalErrorKind::ModuloByZero => ErrorCode::E6007,
            EvalErrorKind::RecursionLimitExceeded { .. } => ErrorCode::E6008,
        }
    }
}

/// User functions active when an error was raised, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<String>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<String>) -> Self {
        EvalBacktrace { frames }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {i}: {frame}")?;
        }
        Ok(())
    }
}

/// A fatal runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub backtrace: EvalBacktrace,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            backtrace: EvalBacktrace::default(),
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic. Backtrace frames become notes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        for frame in self.backtrace.frames().iter().take(MAX_NOTE_FRAMES) {
            diag = diag.with_note(format!("in call to `{frame}`"));
        }
        if self.backtrace.len() > MAX_NOTE_FRAMES {
            diag = diag.with_note(format!(
                "... and {} more calls",
                self.backtrace.len() - MAX_NOTE_FRAMES
            ));
        }
        match &self.kind {
            EvalErrorKind::UndefinedVariable { name } => diag.with_help(format!(
                "declare it before use with `var {name} = ...`"
            )),
            EvalErrorKind::DuplicateVariable { name } => {
                diag.with_help(format!("use `{name} = ...` to assign to the existing variable"))
            }
            EvalErrorKind::RecursionLimitExceeded { .. } => {
                diag.with_help("raise the limit with `--max-depth=N` or `--max-depth=unlimited`")
            }
            _ => diag,
        }
    }
}

// Factories

#[cold]
pub fn duplicate_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::DuplicateVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_function(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::DuplicateFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimitExceeded { depth })
}
