//! Raw token definition.
//!
//! The logos-derived tokenizer splits source into words, literals, and
//! punctuation. Keyword phrases are not recognized here: a phrase like
//! `I HAS A` comes out as three `Word`s and is stitched together by the
//! cooker. Comments are consumed by callbacks so their bodies are never
//! tokenized.

use logos::{Lexer, Logos};

use crate::escape::{cook_yarn, scan_yarn};
use crate::lex_error::LexErrorKind;

/// Raw token from logos (before phrase resolution).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    /// `BTW` to end of line.
    #[token("BTW", skip_line_comment)]
    LineComment,

    /// `OBTW` through the next `TLDR`, newlines included.
    #[token("OBTW", skip_block_comment)]
    BlockComment,

    #[token("\n")]
    Newline,

    #[token(",")]
    Comma,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexErrorKind::IntegerOverflow))]
    Numbr(i64),

    #[regex(r"[+-]?[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Numbar(f64),

    #[token("\"", |lex| lex_yarn(lex, '"'))]
    #[token("'", |lex| lex_yarn(lex, '\''))]
    Yarn(String),

    /// Identifier or one word of a keyword phrase. The optional trailing `?`
    /// exists for `O RLY?`.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*\??")]
    Word,
}

fn skip_line_comment(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
    lex.bump(len);
}

fn skip_block_comment(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let close = memchr::memmem::find_iter(bytes, b"TLDR")
        .find(|&pos| is_closing_tldr(bytes, pos));
    match close {
        Some(pos) => {
            lex.bump(pos + "TLDR".len());
            Ok(())
        }
        None => {
            lex.bump(rest.len());
            Err(LexErrorKind::UnterminatedComment)
        }
    }
}

/// `TLDR` closes a block comment only as a whole word.
fn is_closing_tldr(bytes: &[u8], pos: usize) -> bool {
    let starts_word = pos > 0 && !is_word_byte(bytes[pos - 1]);
    let ends_word = bytes
        .get(pos + "TLDR".len())
        .map_or(true, |&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b','));
    starts_word && ends_word
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'?'
}

fn lex_yarn(lex: &mut Lexer<'_, RawToken>, delim: char) -> Result<String, LexErrorKind> {
    let rest = lex.remainder();
    if let Some(len) = scan_yarn(rest, delim) {
        lex.bump(len + delim.len_utf8());
        cook_yarn(&rest[..len])
    } else {
        let line_end = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        lex.bump(line_end);
        Err(LexErrorKind::UnterminatedString)
    }
}
