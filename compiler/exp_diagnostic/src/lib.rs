//! Diagnostic system for error reporting.
//!
//! Every phase (lexer, parser, interpreter) reports failures as a
//! [`Diagnostic`]:
//! - Error code for searchability
//! - Clear message (what went wrong)
//! - Primary span (where it went wrong), when the phase knows one
//! - Notes and help (context and how to fix)
//!
//! Rendering is handled by the emitters in [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
