//! Parse error types.
//!
//! A [`ParseError`] carries the span of the offending token, what went wrong,
//! and optionally the construct being parsed when it happened, so messages
//! read "expected `OIC`, found end of input (while parsing a conditional)".

use std::fmt;

use lol_ir::{Span, TokenKind};

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// An `I HAS A` declaration.
    Declaration,
    /// An `O RLY?` ... `OIC` block.
    Conditional,
    /// An `IM IN YR` ... `IM OUTTA YR` block.
    Loop,
    /// A `HOW DUZ I` ... `IF U SAY SO` block.
    FunctionDef,
    /// An argument list closed by `MKAY`.
    FunctionCall,
    /// A `VISIBLE` statement.
    Visible,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Declaration => "a variable declaration",
            Self::Conditional => "a conditional",
            Self::Loop => "a loop",
            Self::FunctionDef => "a function definition",
            Self::FunctionCall => "a function call",
            Self::Visible => "a VISIBLE statement",
        }
    }
}

/// A parse error and where it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
    pub context: Option<ErrorContext>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ctx) = self.context {
            write!(f, " (while parsing {})", ctx.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            span,
            kind,
            context: None,
        }
    }

    /// "expected X, found Y" at the given token.
    #[cold]
    pub fn unexpected(expected: impl Into<String>, found: &TokenKind, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.describe(),
            },
            span,
        )
    }

    /// Attach a context unless a more specific one is already set.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// Byte offset of the offending token.
    pub fn position(&self) -> u32 {
        self.span.start
    }

    /// What the parser expected at [`position`](Self::position), if the
    /// error is an unexpected token.
    pub fn expected(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => Some(expected),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// `IM OUTTA YR` named a different loop than `IM IN YR`.
    #[error("loop `{opened}` closed with `IM OUTTA YR {closed}`")]
    MismatchedLabel { opened: String, closed: String },

    /// `O RLY?` with nothing before it to test.
    #[error("`O RLY?` needs a preceding expression or assignment to test")]
    MissingConditionSubject,

    #[error("parameter `{0}` is declared more than once")]
    DuplicateParameter(String),
}
