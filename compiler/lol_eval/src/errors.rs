//! Runtime errors.
//!
//! Factory functions (e.g. [`unbound_name`]) are the way to build errors;
//! the interpreter attaches the span of the innermost failing expression.

use lol_ir::{Span, TypeName};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location where the error occurred, if known.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a span unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Read, assignment, retype, or call of a name that is not bound.
    #[error("`{name}` is not defined")]
    UnboundName { name: String },

    /// An operand the operator cannot coerce.
    #[error("`{op}` cannot use a {got} operand")]
    Type { op: &'static str, got: &'static str },

    /// Text that does not look numeric, cast to a number.
    #[error("cannot cast {value} to {target}")]
    Cast { value: String, target: TypeName },

    #[error("`{name}` takes {expected} argument(s) but {got} were given")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Second declaration in the same frame, or a second function definition.
    #[error("`{name}` is already defined")]
    Redefinition { name: String },

    #[error("integer overflow in `{op}`")]
    Overflow { op: &'static str },

    #[error("maximum call depth of {limit} exceeded")]
    RecursionLimit { limit: usize },
}

#[cold]
pub fn unbound_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundName {
        name: name.to_owned(),
    })
}

/// Operand of the wrong type for `op`.
#[cold]
pub fn type_mismatch(op: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Type {
        op,
        got: got.type_name().as_str(),
    })
}

#[cold]
pub fn cast_failed(value: &Value, target: TypeName) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Cast {
        value: value.describe(),
        target,
    })
}

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Arity {
        name: name.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn redefinition(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Redefinition {
        name: name.to_owned(),
    })
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Overflow { op })
}

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}
