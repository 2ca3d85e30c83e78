//! Statement and expression evaluation.

use exp_ir::{Block, Expr, Int, Stmt};
use exp_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::errors::EvalResult;
use crate::function_val::Callable;
use crate::operators::evaluate_binary;

impl Interpreter<'_> {
    /// Evaluate statements in order, stopping at the first that yields.
    pub(super) fn eval_block<'p>(
        &mut self,
        block: &'p Block,
        scope: &LocalScope<Scope<'p>>,
    ) -> EvalResult<Option<Int>> {
        for stmt in &block.stmts {
            if let Some(value) = self.eval_stmt(stmt, scope)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Evaluate `block` in a fresh child of `scope`.
    pub(super) fn eval_nested<'p>(
        &mut self,
        block: &'p Block,
        scope: &LocalScope<Scope<'p>>,
    ) -> EvalResult<Option<Int>> {
        let child = Scope::child_of(scope);
        ensure_sufficient_stack(|| self.eval_block(block, &child))
    }

    fn eval_stmt<'p>(
        &mut self,
        stmt: &'p Stmt,
        scope: &LocalScope<Scope<'p>>,
    ) -> EvalResult<Option<Int>> {
        match stmt {
            Stmt::Function(decl) => {
                let callable = Callable::User {
                    decl,
                    env: scope.downgrade(),
                };
                let declared = scope.borrow_mut().declare_function(decl.name, callable);
                declared.map_err(|e| self.scope_error(e))?;
                Ok(None)
            }
            Stmt::Variable { name, value } => {
                let value = self.eval_expr(value, scope)?;
                let declared = scope.borrow_mut().declare_variable(*name, value);
                declared.map_err(|e| self.scope_error(e))?;
                Ok(None)
            }
            Stmt::Assign { name, value } => {
                let value = self.eval_expr(value, scope)?;
                let assigned = scope.borrow_mut().set_variable(*name, value);
                assigned.map_err(|e| self.scope_error(e))?;
                Ok(None)
            }
            Stmt::While { cond, body } => {
                // The condition sees the enclosing scope; each iteration gets its own.
                while self.eval_expr(cond, scope)? != 0 {
                    if let Some(value) = self.eval_nested(body, scope)? {
                        return Ok(Some(value));
                    }
                }
                Ok(None)
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval_expr(cond, scope)? != 0 {
                    then_branch
                } else {
                    else_branch
                };
                self.eval_nested(branch, scope)
            }
            Stmt::Return(value) => Ok(Some(self.eval_expr(value, scope)?)),
            Stmt::Expr(expr) => {
                self.eval_expr(expr, scope)?;
                Ok(None)
            }
        }
    }

    pub(crate) fn eval_expr<'p>(
        &mut self,
        expr: &'p Expr,
        scope: &LocalScope<Scope<'p>>,
    ) -> EvalResult<Int> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Ident(name) => {
                let found = scope.borrow().get_variable(*name);
                found.map_err(|e| self.scope_error(e))
            }
            Expr::Call { callee, args } => self.eval_call(*callee, args, scope),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                evaluate_binary(*op, left, right).map_err(|e| self.fail(e))
            }
        })
    }
}
