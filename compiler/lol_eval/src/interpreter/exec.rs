//! Statement execution.

use lol_ir::{FuncDef, IfCondition, IfStmt, LoopStep, LoopStmt, Stmt, StmtKind};

use super::Interpreter;
use crate::errors::{redefinition, unbound_name, EvalResult};
use crate::operators::step_counter;
use crate::Value;

impl<'p> Interpreter<'p> {
    /// Run statements in order, yielding the last one's value (`NOOB` for
    /// an empty block).
    pub(crate) fn exec_block(&mut self, block: &'p [Stmt]) -> EvalResult {
        let mut last = Value::Noob;
        for stmt in block {
            last = self.exec_stmt(stmt)?;
        }
        Ok(last)
    }

    fn exec_stmt(&mut self, stmt: &'p Stmt) -> EvalResult {
        let result = match &stmt.kind {
            StmtKind::VarDecl { name, init } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Noob,
                };
                // A bare read of a function name parses as a call.
                if self.functions.contains_key(name.as_str()) {
                    return Err(redefinition(name).with_span(stmt.span));
                }
                self.env.declare_at(name, value.clone(), stmt.span)?;
                Ok(value)
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
            StmtKind::Retype { name, target } => {
                let current = self.env.lookup(name).ok_or_else(|| unbound_name(name))?;
                let value = current.cast(*target)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
            StmtKind::Expr(expr) => self.eval_expr(expr),
            StmtKind::If(if_stmt) => self.exec_if(if_stmt),
            StmtKind::Loop(loop_stmt) => self.exec_loop(loop_stmt),
            StmtKind::FuncDef(def) => self.define_function(def),
            StmtKind::Visible(args) => {
                let mut line = String::new();
                for arg in args {
                    line.push_str(&self.eval_expr(arg)?.render());
                }
                self.print_handler.println(&line);
                Ok(Value::Noob)
            }
            StmtKind::Noop => Ok(Value::Noob),
        };
        result.map_err(|e| e.with_span(stmt.span))
    }

    /// The first branch whose condition is truthy runs; `NOOB` if none does.
    fn exec_if(&mut self, if_stmt: &'p IfStmt) -> EvalResult {
        let subject = match &if_stmt.cond {
            IfCondition::Expr(expr) => self.eval_expr(expr)?,
            IfCondition::Stmt(stmt) => self.exec_stmt(stmt)?,
        };
        if subject.is_truthy() {
            return self.exec_block(&if_stmt.then_block);
        }
        for (cond, block) in &if_stmt.elifs {
            if self.eval_expr(cond)?.is_truthy() {
                return self.exec_block(block);
            }
        }
        match &if_stmt.else_block {
            Some(block) => self.exec_block(block),
            None => Ok(Value::Noob),
        }
    }

    /// Check the condition, run the body, step the counter, repeat. Yields
    /// the counter's final value.
    fn exec_loop(&mut self, loop_stmt: &'p LoopStmt) -> EvalResult {
        let counter = loop_stmt.counter.as_str();
        if self.env.lookup(counter).is_none() {
            self.env.declare(counter, Value::Numbr(0))?;
        }
        let delta = match loop_stmt.step {
            LoopStep::Increment => 1,
            LoopStep::Decrement => -1,
        };

        let mut iterations: u64 = 0;
        while self.eval_expr(&loop_stmt.cond)?.is_truthy() {
            self.exec_block(&loop_stmt.body)?;
            let current = self.env.lookup(counter).ok_or_else(|| unbound_name(counter))?;
            let next = step_counter(current, delta)?;
            self.env.assign(counter, next)?;
            iterations += 1;
        }
        tracing::debug!(label = %loop_stmt.label, iterations, "loop finished");

        self.env
            .lookup(counter)
            .cloned()
            .ok_or_else(|| unbound_name(counter))
    }

    /// Register a function. Re-running the same definition (e.g. inside a
    /// loop body) is allowed; a different function or a variable with the
    /// same name is not.
    fn define_function(&mut self, def: &'p FuncDef) -> EvalResult {
        if let Some(existing) = self.functions.get(def.name.as_str()) {
            if !std::ptr::eq(*existing, def) {
                return Err(redefinition(&def.name));
            }
        }
        if self.env.lookup(&def.name).is_some() {
            return Err(redefinition(&def.name));
        }
        tracing::debug!(name = %def.name, arity = def.params.len(), "function defined");
        self.functions.insert(&def.name, def);
        Ok(Value::Noob)
    }
}
