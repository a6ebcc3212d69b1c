//! LOLCODE driver.
//!
//! Wires the pipeline together: [`lol_lexer::lex`] into [`lol_parse::parse`]
//! into [`lol_eval::evaluate_with`], with one [`Error`] type covering all
//! three stages. The `lol` binary is a thin layer over [`commands`].

pub mod commands;
pub mod report;
pub mod tracing_setup;

use lol_eval::{EvalConfig, EvalError};
use lol_ir::{Program, Span};
use lol_lexer::LexError;
use lol_parse::ParseError;

pub use lol_eval::Value;

/// Any failure between source text and a final value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Source range the error points at, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span),
            Error::Parse(e) => Some(e.span),
            Error::Eval(e) => e.span,
        }
    }

    /// Headline for a rendered diagnostic.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lex error",
            Error::Parse(_) => "parse error",
            Error::Eval(_) => "runtime error",
        }
    }
}

/// Lex and parse source text.
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = lol_lexer::lex(source)?;
    tracing::trace!(tokens = tokens.len(), "lexed");
    Ok(lol_parse::parse(&tokens)?)
}

/// Evaluate a parsed program, `VISIBLE` going to stdout.
pub fn evaluate(program: &Program) -> Result<Value, Error> {
    Ok(lol_eval::evaluate(program)?)
}

/// Run source text end to end with the default configuration.
pub fn run(source: &str) -> Result<Value, Error> {
    run_with(source, &EvalConfig::default())
}

/// Run source text end to end.
pub fn run_with(source: &str, config: &EvalConfig) -> Result<Value, Error> {
    let program = parse(source)?;
    Ok(lol_eval::evaluate_with(&program, config)?)
}

/// Render a final value the way a host shows it: `true`/`false` for
/// `TROOF`, bare numbers, raw text, and `null` for `NOOB`.
pub fn render_host(value: &Value) -> String {
    match value {
        Value::Noob => "null".to_owned(),
        Value::Troof(b) => b.to_string(),
        Value::Numbr(n) => n.to_string(),
        Value::Numbar(f) => f.to_string(),
        Value::Yarn(s) => s.clone(),
    }
}
