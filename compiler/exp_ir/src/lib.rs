//! Exp IR - shared data structures for the Exp interpreter.
//!
//! This crate contains:
//! - Spans for source locations
//! - Names for interned identifiers
//! - AST nodes (`Block`, `Stmt`, `Expr`, `Function`, `BinaryOp`)
//! - A canonical source printer for the AST
//!
//! # Design Philosophy
//!
//! - **Intern Identifiers**: Strings → `Name(u32)`, compared in O(1)
//! - **Own the Tree**: every node is owned by its parent, nothing is shared
//!   or cyclic, so a `&Block` borrowed for the duration of a run is all the
//!   interpreter needs.

mod interner;
mod name;
mod span;

pub mod ast;
pub mod pretty;

pub use ast::{BinaryOp, Block, Expr, Function, Stmt};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;

/// The only runtime value type of the language: a 32-bit two's complement integer.
pub type Int = i32;
