//! Grammar productions, split by construct.
//!
//! Each submodule adds methods to [`Parser`] via `impl Parser<'_>`.

mod control;
mod expr;
mod stmt;

use lol_ir::{Block, Keyword, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse statements until one of `terminators` (or end of input) starts
    /// a line. The terminator itself is left for the caller to consume.
    pub(crate) fn parse_block(&mut self, terminators: &[Keyword]) -> Result<Block, ParseError> {
        let mut stmts = Block::new();
        loop {
            self.cursor.skip_newlines();
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Keyword(kw) if terminators.contains(kw) => break,
                TokenKind::Keyword(Keyword::ORly) => {
                    let stmt = self.parse_if(&mut stmts)?;
                    stmts.push(stmt);
                }
                _ => {
                    let stmt = self.parse_stmt()?;
                    stmts.push(stmt);
                }
            }
            self.expect_stmt_end()?;
        }
        Ok(stmts)
    }

    /// A statement must be followed by a line break or end of input.
    fn expect_stmt_end(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("end of line")),
        }
    }
}
