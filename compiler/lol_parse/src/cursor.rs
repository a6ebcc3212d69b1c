//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use lol_ir::{Keyword, Name, Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor over a [`TokenList`].
///
/// The list always ends in `Eof` and the cursor never moves past it, so
/// [`current`](Self::current) is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    ///
    /// Falls back to a synthetic `Eof` for a list the lexer did not produce.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.get(self.tokens.len().wrapping_sub(1)))
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Peek at the next token's kind (one-token lookahead).
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        match self.tokens.get(self.pos + 1) {
            Some(token) => &token.kind,
            None => &EOF.kind,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is the given keyword.
    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    #[inline]
    pub fn check_newline(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Newline)
    }

    /// Advance to the next token, returning the one just consumed.
    ///
    /// Stays on `Eof` once reached.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the keyword if present.
    pub fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the keyword or fail with "expected `kw`".
    pub fn expect_keyword(&mut self, kw: Keyword) -> Result<Span, ParseError> {
        if self.check_keyword(kw) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(format!("`{kw}`")))
        }
    }

    /// Consume an identifier, describing it as `what` on failure.
    pub fn expect_ident(&mut self, what: &str) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name.clone(), span))
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Consume a line break and any blank lines after it.
    pub fn expect_newline(&mut self) -> Result<(), ParseError> {
        if !self.check_newline() {
            return Err(self.unexpected("end of line"));
        }
        self.skip_newlines();
        Ok(())
    }

    /// Skip any run of line breaks.
    pub fn skip_newlines(&mut self) {
        while self.check_newline() {
            self.advance();
        }
    }

    /// "expected `expected`, found <current token>".
    #[cold]
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError::unexpected(expected, &token.kind, token.span)
    }
}
