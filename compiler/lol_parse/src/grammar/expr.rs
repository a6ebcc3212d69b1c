//! Expression parsing.
//!
//! Every operator except the comparisons is prefix (`SUM OF a AN b`), so
//! nesting needs no precedence table: operands are full expressions and
//! `AN`/`MKAY` delimit them. `SMALLR THAN` and `BIGGR THAN` are infix and
//! left-associative.

use lol_ir::{BinaryOp, Expr, ExprKind, Keyword, Literal, Span, TokenKind, VariadicOp};
use lol_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

/// Can this token begin an expression?
pub(crate) fn starts_expr(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Ident(_)
        | TokenKind::Numbr(_)
        | TokenKind::Numbar(_)
        | TokenKind::Yarn(_)
        | TokenKind::LParen => true,
        TokenKind::Keyword(kw) => matches!(
            kw,
            Keyword::SumOf
                | Keyword::DiffOf
                | Keyword::BothSaem
                | Keyword::Smoosh
                | Keyword::AnyOf
                | Keyword::AllOf
                | Keyword::Maek
                | Keyword::Win
                | Keyword::Fail
                | Keyword::Noob
        ),
        TokenKind::RParen | TokenKind::Newline | TokenKind::Eof => false,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Wrapped in `ensure_sufficient_stack` so deeply nested operator chains
    /// grow the stack instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_comparison())
    }

    /// `operand ((SMALLR THAN | BIGGR THAN) operand)*`
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Keyword(Keyword::SmallrThan) => BinaryOp::SmallrThan,
                TokenKind::Keyword(Keyword::BiggrThan) => BinaryOp::BiggrThan,
                _ => break,
            };
            self.advance();
            let right = self.parse_operand()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let span = token.span;
        let literal =
            |lit| -> Result<Expr, ParseError> { Ok(Expr::new(ExprKind::Literal(lit), span)) };
        match &token.kind {
            TokenKind::Numbr(n) => {
                self.advance();
                literal(Literal::Numbr(*n))
            }
            TokenKind::Numbar(bits) => {
                self.advance();
                literal(Literal::Numbar(f64::from_bits(*bits)))
            }
            TokenKind::Yarn(text) => {
                self.advance();
                literal(Literal::Yarn(text.clone()))
            }
            TokenKind::Ident(name) => {
                self.advance();
                self.parse_ident_or_call(name, span)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                if !matches!(self.current_kind(), TokenKind::RParen) {
                    return Err(self.unexpected("`)`"));
                }
                self.advance();
                Ok(inner)
            }
            TokenKind::Keyword(kw) => match kw {
                Keyword::Win => {
                    self.advance();
                    literal(Literal::Troof(true))
                }
                Keyword::Fail => {
                    self.advance();
                    literal(Literal::Troof(false))
                }
                Keyword::Noob => {
                    self.advance();
                    literal(Literal::Noob)
                }
                Keyword::SumOf => self.parse_binary(BinaryOp::Sum),
                Keyword::DiffOf => self.parse_binary(BinaryOp::Diff),
                Keyword::BothSaem => self.parse_binary(BinaryOp::BothSaem),
                Keyword::Smoosh => self.parse_variadic(VariadicOp::Smoosh),
                Keyword::AnyOf => self.parse_variadic(VariadicOp::AnyOf),
                Keyword::AllOf => self.parse_variadic(VariadicOp::AllOf),
                Keyword::Maek => self.parse_cast(),
                _ => Err(self.unexpected("an expression")),
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `op expr AN expr`
    fn parse_binary(&mut self, op: BinaryOp) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let left = self.parse_expr()?;
        self.expect_keyword(Keyword::An)?;
        let right = self.parse_expr()?;
        let span = start.merge(right.span);
        Ok(Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `op expr (AN expr)* MKAY`
    fn parse_variadic(&mut self, op: VariadicOp) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let operands = self.parse_args()?;
        let end = self.expect_keyword(Keyword::Mkay)?;
        Ok(Expr::new(
            ExprKind::Variadic { op, operands },
            start.merge(end),
        ))
    }

    /// `MAEK expr A type`
    fn parse_cast(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::A)?;
        let target = self.parse_type_name()?;
        Ok(Expr::new(
            ExprKind::Cast {
                expr: Box::new(expr),
                target,
            },
            start.merge(self.previous_span()),
        ))
    }

    /// An identifier already consumed: a call if arguments follow or the
    /// name is a known function, otherwise a variable read.
    fn parse_ident_or_call(&mut self, name: &str, span: Span) -> Result<Expr, ParseError> {
        if starts_expr(self.current_kind()) {
            let args = self
                .parse_args()
                .map_err(|e| e.with_context(ErrorContext::FunctionCall))?;
            let end = self
                .expect_keyword(Keyword::Mkay)
                .map_err(|e| e.with_context(ErrorContext::FunctionCall))?;
            return Ok(Expr::new(
                ExprKind::Call {
                    name: name.to_owned(),
                    args,
                },
                span.merge(end),
            ));
        }
        let kind = if self.functions.contains(name) {
            ExprKind::Call {
                name: name.to_owned(),
                args: Vec::new(),
            }
        } else {
            ExprKind::Ident(name.to_owned())
        };
        Ok(Expr::new(kind, span))
    }

    /// `expr (AN expr)*`
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = vec![self.parse_expr()?];
        while self.eat_keyword(Keyword::An) {
            args.push(self.parse_expr()?);
        }
        Ok(args)
    }
}
