//! Canonical source printer for the AST.
//!
//! Output uses four-space indentation, one statement per line, and adds
//! parentheses only where operator precedence or left associativity would
//! otherwise change the tree. Parsing the printed text yields an equal AST.

use std::fmt::Write;

use crate::ast::{BinaryOp, Block, Expr, Function, Stmt};
use crate::StringInterner;

const INDENT: &str = "    ";

/// Render a program (or any block) as canonical source text.
pub fn print_block(block: &Block, interner: &StringInterner) -> String {
    let mut printer = Printer {
        interner,
        out: String::new(),
        depth: 0,
    };
    for stmt in &block.stmts {
        printer.stmt(stmt);
    }
    printer.out
}

/// Render a single expression.
pub fn print_expr(expr: &Expr, interner: &StringInterner) -> String {
    let mut printer = Printer {
        interner,
        out: String::new(),
        depth: 0,
    };
    printer.expr(expr);
    printer.out
}

struct Printer<'a> {
    interner: &'a StringInterner,
    out: String,
    depth: usize,
}

impl Printer<'_> {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        self.indent();
        match stmt {
            Stmt::Function(function) => self.function(function),
            Stmt::Variable { name, value } => {
                let _ = write!(self.out, "var {} = ", self.interner.lookup(*name));
                self.expr(value);
            }
            Stmt::While { cond, body } => {
                self.out.push_str("while (");
                self.expr(cond);
                self.out.push_str(") ");
                self.block(body);
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("if (");
                self.expr(cond);
                self.out.push_str(") ");
                self.block(then_branch);
                if !else_branch.is_empty() {
                    self.out.push_str(" else ");
                    self.block(else_branch);
                }
            }
            Stmt::Assign { name, value } => {
                let _ = write!(self.out, "{} = ", self.interner.lookup(*name));
                self.expr(value);
            }
            Stmt::Return(value) => {
                self.out.push_str("return ");
                self.expr(value);
            }
            Stmt::Expr(expr) => self.expr(expr),
        }
        self.out.push('\n');
    }

    fn function(&mut self, function: &Function) {
        let _ = write!(self.out, "fun {}(", self.interner.lookup(function.name));
        for (i, param) in function.params.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(self.interner.lookup(*param));
        }
        self.out.push_str(") ");
        self.block(&function.body);
    }

    fn block(&mut self, block: &Block) {
        if block.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        self.depth += 1;
        for stmt in &block.stmts {
            self.stmt(stmt);
        }
        self.depth -= 1;
        self.indent();
        self.out.push('}');
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(value) => {
                let _ = write!(self.out, "{value}");
            }
            Expr::Ident(name) => self.out.push_str(self.interner.lookup(*name)),
            Expr::Call { callee, args } => {
                self.out.push_str(self.interner.lookup(*callee));
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(arg);
                }
                self.out.push(')');
            }
            Expr::Binary { op, left, right } => {
                self.operand(left, *op, false);
                let _ = write!(self.out, " {op} ");
                self.operand(right, *op, true);
            }
        }
    }

    /// Print an operand of `parent`, parenthesized when it binds looser, or
    /// equally loose on the right-hand side (all operators are left-associative).
    fn operand(&mut self, expr: &Expr, parent: BinaryOp, is_right: bool) {
        let needs_parens = match expr {
            Expr::Binary { op, .. } => {
                op.precedence() > parent.precedence()
                    || (is_right && op.precedence() == parent.precedence())
            }
            _ => false,
        };
        if needs_parens {
            self.out.push('(');
            self.expr(expr);
            self.out.push(')');
        } else {
            self.expr(expr);
        }
    }
}
