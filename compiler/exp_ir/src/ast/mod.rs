//! AST nodes.
//!
//! A program is a [`Block`]. Every node owns its children; the tree is never
//! shared and never cyclic. Identifiers are interned [`Name`]s.

mod operators;

pub use operators::BinaryOp;

use crate::{Int, Name};

/// Ordered sequence of statements: a program root, function body, branch
/// body or loop body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    /// The block used for an omitted `else`.
    pub fn empty() -> Self {
        Block { stmts: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Function declaration: `fun name(params) { body }`.
///
/// Parameter names are expected to be pairwise distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Block,
}

impl Function {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `fun name(params) { body }`
    Function(Function),
    /// `var name = value`: declares a new binding in the current scope.
    Variable { name: Name, value: Expr },
    /// `while (cond) { body }`
    While { cond: Expr, body: Block },
    /// `if (cond) { then_branch } else { else_branch }`
    ///
    /// `else_branch` is an empty block when the source omits it.
    If {
        cond: Expr,
        then_branch: Block,
        else_branch: Block,
    },
    /// `name = value`: mutates an existing binding.
    Assign { name: Name, value: Expr },
    /// `return value`
    Return(Expr),
    /// Expression evaluated for its side effects.
    Expr(Expr),
}

/// Expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// `callee(args...)`
    Call { callee: Name, args: Vec<Expr> },
    /// Variable reference.
    Ident(Name),
    /// Non-negative integer constant.
    Literal(Int),
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn call(callee: Name, args: Vec<Expr>) -> Self {
        Expr::Call { callee, args }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
