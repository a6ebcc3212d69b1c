//! User function calls.

use lol_ir::Expr;
use lol_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{recursion_limit, unbound_name, wrong_arg_count, EvalResult};

impl<'p> Interpreter<'p> {
    /// Call a defined function.
    ///
    /// Arguments are evaluated in the caller's frame, then bound to the
    /// parameters in a fresh frame that sees only itself and the globals.
    /// The result is the value of the last statement the body executed.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub(crate) fn call_function(&mut self, name: &str, args: &'p [Expr]) -> EvalResult {
        let def = *self.functions.get(name).ok_or_else(|| unbound_name(name))?;
        if def.params.len() != args.len() {
            return Err(wrong_arg_count(name, def.params.len(), args.len()));
        }
        if let Some(limit) = self.max_call_depth {
            if self.env.depth() >= limit {
                return Err(recursion_limit(limit));
            }
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }

        self.env.push_frame();
        let result = def
            .params
            .iter()
            .zip(values)
            .try_for_each(|(param, value)| self.env.declare(param, value))
            .and_then(|()| ensure_sufficient_stack(|| self.exec_block(&def.body)));
        self.env.pop_frame();
        result
    }
}
