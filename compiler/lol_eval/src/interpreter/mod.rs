//! Tree-walking interpreter.
//!
//! Statements run strictly in order; the program's result is the value of
//! the last statement executed. The interpreter owns its environment and
//! function table, so separate instances share nothing.

mod exec;
mod expr;
mod function_call;

use rustc_hash::FxHashMap;

use lol_ir::{FuncDef, Program};

use crate::config::EvalConfig;
use crate::errors::EvalResult;
use crate::print_handler::SharedPrintHandler;
use crate::Environment;

/// Interpreter state for one run over a borrowed [`Program`].
pub struct Interpreter<'p> {
    env: Environment,
    /// Functions whose `HOW DUZ I` statement has executed.
    functions: FxHashMap<&'p str, &'p FuncDef>,
    print_handler: SharedPrintHandler,
    max_call_depth: Option<usize>,
}

impl<'p> Interpreter<'p> {
    pub fn new(config: &EvalConfig) -> Self {
        Interpreter {
            env: Environment::new(),
            functions: FxHashMap::default(),
            print_handler: config.print_handler().clone(),
            max_call_depth: config.max_call_depth(),
        }
    }

    /// Run a whole program. An empty program yields `NOOB`.
    pub fn run(&mut self, program: &'p Program) -> EvalResult {
        tracing::debug!(statements = program.body.len(), "evaluating program");
        self.exec_block(&program.body)
    }

    /// Global and frame bindings, for inspection after a run.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}
