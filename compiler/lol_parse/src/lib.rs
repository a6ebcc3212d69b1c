//! Recursive descent parser for LOLCODE.
//!
//! One statement per logical line. Blocks (`O RLY?`, `IM IN YR`, `HOW DUZ I`)
//! are closed by their terminator keywords. The parser stops at the first
//! error; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use lol_ir::{Keyword, Program, Span, Token, TokenKind, TokenList};
use rustc_hash::FxHashSet;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Functions whose `HOW DUZ I` header has been parsed. A bare name in
    /// this set is a zero-argument call rather than a variable read.
    functions: FxHashSet<String>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            functions: FxHashSet::default(),
        }
    }

    // Cursor delegation methods.

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat_keyword(&mut self, kw: Keyword) -> bool {
        self.cursor.eat_keyword(kw)
    }

    #[inline]
    fn expect_keyword(&mut self, kw: Keyword) -> Result<Span, ParseError> {
        self.cursor.expect_keyword(kw)
    }

    #[inline]
    fn expect_newline(&mut self) -> Result<(), ParseError> {
        self.cursor.expect_newline()
    }

    #[inline]
    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        self.cursor.unexpected(expected)
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let body = self.parse_block(&[])?;
        if !self.cursor.is_at_end() {
            return Err(self.unexpected("a statement"));
        }
        Ok(Program { body })
    }
}

/// Parse a token list into a [`Program`].
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
