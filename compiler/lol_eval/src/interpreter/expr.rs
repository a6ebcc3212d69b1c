//! Expression evaluation.

use lol_ir::{Expr, ExprKind, VariadicOp};
use lol_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{unbound_name, EvalResult};
use crate::operators::evaluate_binary;
use crate::Value;

impl<'p> Interpreter<'p> {
    /// Evaluate an expression, attaching its span to any error that does
    /// not already carry a narrower one.
    pub(crate) fn eval_expr(&mut self, expr: &'p Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
            .map_err(|e| e.with_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &'p Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(Value::from(lit)),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| unbound_name(name)),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right)
            }
            ExprKind::Variadic { op, operands } => self.eval_variadic(*op, operands),
            ExprKind::Call { name, args } => self.call_function(name, args),
            ExprKind::Cast { expr, target } => self.eval_expr(expr)?.cast(*target),
        }
    }

    /// `SMOOSH` concatenates renders; `ANY OF`/`ALL OF` stop at the first
    /// operand that decides the result.
    fn eval_variadic(&mut self, op: VariadicOp, operands: &'p [Expr]) -> EvalResult {
        match op {
            VariadicOp::Smoosh => {
                let mut text = String::new();
                for operand in operands {
                    text.push_str(&self.eval_expr(operand)?.render());
                }
                Ok(Value::Yarn(text))
            }
            VariadicOp::AnyOf => {
                for operand in operands {
                    if self.eval_expr(operand)?.is_truthy() {
                        return Ok(Value::Troof(true));
                    }
                }
                Ok(Value::Troof(false))
            }
            VariadicOp::AllOf => {
                for operand in operands {
                    if !self.eval_expr(operand)?.is_truthy() {
                        return Ok(Value::Troof(false));
                    }
                }
                Ok(Value::Troof(true))
            }
        }
    }
}

