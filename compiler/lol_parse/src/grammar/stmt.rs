//! Simple statements: declaration, assignment, retype, `VISIBLE`, `O NVM`,
//! and bare expressions.

use lol_ir::{Keyword, Stmt, StmtKind, TokenKind, TypeName};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement other than `O RLY?`, which needs the enclosing
    /// block and is handled by `parse_block`.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        tracing::trace!(token = ?self.current_kind(), "parse_stmt");
        match self.current_kind() {
            TokenKind::Keyword(Keyword::IHasA) => self
                .parse_var_decl()
                .map_err(|e| e.with_context(ErrorContext::Declaration)),
            TokenKind::Keyword(Keyword::ImInYr) => self
                .parse_loop()
                .map_err(|e| e.with_context(ErrorContext::Loop)),
            TokenKind::Keyword(Keyword::HowDuzI) => self
                .parse_func_def()
                .map_err(|e| e.with_context(ErrorContext::FunctionDef)),
            TokenKind::Keyword(Keyword::Visible) => self
                .parse_visible()
                .map_err(|e| e.with_context(ErrorContext::Visible)),
            TokenKind::Keyword(Keyword::ONvm) => {
                let span = self.advance().span;
                Ok(Stmt::new(StmtKind::Noop, span))
            }
            TokenKind::Ident(name) => match self.cursor.peek_next_kind() {
                TokenKind::Keyword(Keyword::R) => {
                    let start = self.advance().span;
                    self.advance();
                    let value = self.parse_expr()?;
                    let span = start.merge(value.span);
                    Ok(Stmt::new(
                        StmtKind::Assign {
                            name: name.clone(),
                            value,
                        },
                        span,
                    ))
                }
                TokenKind::Keyword(Keyword::IsNowA) => {
                    let start = self.advance().span;
                    self.advance();
                    let target = self.parse_type_name()?;
                    Ok(Stmt::new(
                        StmtKind::Retype {
                            name: name.clone(),
                            target,
                        },
                        start.merge(self.previous_span()),
                    ))
                }
                _ => self.parse_expr_stmt(),
            },
            _ => self.parse_expr_stmt(),
        }
    }

    /// `I HAS A name [ITZ expr]`
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::IHasA)?;
        let (name, name_span) = self.cursor.expect_ident("a variable name")?;
        let init = if self.eat_keyword(Keyword::Itz) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let end = init.as_ref().map_or(name_span, |e| e.span);
        Ok(Stmt::new(StmtKind::VarDecl { name, init }, start.merge(end)))
    }

    /// `VISIBLE expr (AN expr)*`
    fn parse_visible(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::Visible)?;
        let mut args = vec![self.parse_expr()?];
        while self.eat_keyword(Keyword::An) {
            args.push(self.parse_expr()?);
        }
        Ok(Stmt::new(
            StmtKind::Visible(args),
            start.merge(self.previous_span()),
        ))
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        let span = expr.span;
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// One of `NOOB`, `TROOF`, `NUMBR`, `NUMBAR`, `YARN`.
    pub(crate) fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let ty = match self.current_kind() {
            TokenKind::Keyword(Keyword::Noob) => TypeName::Noob,
            TokenKind::Keyword(Keyword::Troof) => TypeName::Troof,
            TokenKind::Keyword(Keyword::Numbr) => TypeName::Numbr,
            TokenKind::Keyword(Keyword::Numbar) => TypeName::Numbar,
            TokenKind::Keyword(Keyword::Yarn) => TypeName::Yarn,
            _ => return Err(self.unexpected("a type name")),
        };
        self.advance();
        Ok(ty)
    }
}
