//! Tree-walking interpreter for LOLCODE.
//!
//! - [`Value`]: the five runtime types and their coercion and cast rules
//! - [`operators`]: `SUM OF`, `DIFF OF`, `BOTH SAEM`, and the comparisons
//! - [`Environment`]: global scope plus one frame per function call
//! - [`Interpreter`]: walks a [`Program`] and yields its final value

mod config;
mod environment;
pub mod errors;
mod interpreter;
pub mod operators;
mod print_handler;
mod value;

pub use config::EvalConfig;
pub use environment::{Environment, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use value::{parse_numeric, Number, Value};

use lol_ir::Program;

/// Evaluate a program with the default configuration (`VISIBLE` to stdout,
/// unlimited call depth).
pub fn evaluate(program: &Program) -> EvalResult {
    evaluate_with(program, &EvalConfig::default())
}

/// Evaluate a program with an explicit configuration.
pub fn evaluate_with(program: &Program, config: &EvalConfig) -> EvalResult {
    Interpreter::new(config).run(program)
}
