//! Lexer error types.

use lol_ir::Span;

/// A lexer error and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}

/// What went wrong while lexing.
///
/// Doubles as the logos error type, so it must be `Default`; the default is
/// what logos reports for input no token rule matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated `OBTW` comment, expected `TLDR`")]
    UnterminatedComment,
    #[error("unknown escape sequence `:{0}`")]
    UnknownEscape(char),
    #[error("invalid code point escape `:({0})`")]
    InvalidCodePoint(String),
    #[error("integer literal does not fit in a NUMBR")]
    IntegerOverflow,
    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),
}
