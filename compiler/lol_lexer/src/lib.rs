//! Lexer for LOLCODE.
//!
//! Two layers:
//! - `raw_token`: logos tokenizer over words, literals, and punctuation,
//!   consuming comments and resolving string escapes.
//! - `cooker`: resolves keyword phrases by longest match and emits the
//!   final [`TokenList`].
//!
//! Comments are dropped before phrase resolution, so a comment in the middle
//! of a line is transparent.

mod cooker;
mod escape;
mod lex_error;
mod phrase;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};

use logos::Logos;
use lol_ir::{Span, TokenList};

use crate::raw_token::RawToken;

/// Lex source text into a [`TokenList`] ending in `Eof`.
///
/// Fails on the first unterminated string or comment, bad escape, or
/// character no token rule accepts.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut raw = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(token) => raw.push((token, span)),
            Err(kind) => return Err(LexError::new(kind, span)),
        }
    }

    cooker::cook(source, raw)
}
