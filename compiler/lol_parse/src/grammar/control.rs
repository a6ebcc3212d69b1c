//! Block constructs: conditionals, loops, and function definitions.

use lol_ir::{
    Block, Expr, ExprKind, FuncDef, IfCondition, IfStmt, Keyword, Literal, LoopStep, LoopStmt, Stmt,
    StmtKind, TokenKind,
};

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `O RLY?` NL `YA RLY` NL block (`MEBBE` expr NL block)* [`NO WAI` NL block] `OIC`
    ///
    /// The condition comes from the statement before `O RLY?` in `preceding`:
    /// - a bare expression or an earlier conditional is moved inside;
    /// - a declaration, assignment, retype, or loop stays where it is and the
    ///   conditional reads the variable it wrote;
    /// - `O NVM`, `VISIBLE`, and `HOW DUZ I` stay and the subject is `NOOB`.
    pub(crate) fn parse_if(&mut self, preceding: &mut Block) -> Result<Stmt, ParseError> {
        let orly_span = self.current_span();
        let Some(stmt) = preceding.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::MissingConditionSubject,
                orly_span,
            ));
        };
        let (cond, start) = match stmt.kind {
            StmtKind::Expr(expr) => {
                let start = expr.span;
                (IfCondition::Expr(expr), start)
            }
            StmtKind::If(_) => {
                let start = stmt.span;
                (IfCondition::Stmt(Box::new(stmt)), start)
            }
            _ => {
                let kind = match subject_name(&stmt) {
                    Some(name) => ExprKind::Ident(name.to_owned()),
                    None => ExprKind::Literal(Literal::Noob),
                };
                let cond = Expr::new(kind, stmt.span);
                preceding.push(stmt);
                (IfCondition::Expr(cond), orly_span)
            }
        };
        let if_stmt = self
            .parse_if_body(cond)
            .map_err(|e| e.with_context(ErrorContext::Conditional))?;
        Ok(Stmt::new(
            StmtKind::If(if_stmt),
            start.merge(self.previous_span()),
        ))
    }

    fn parse_if_body(&mut self, cond: IfCondition) -> Result<IfStmt, ParseError> {
        self.expect_keyword(Keyword::ORly)?;
        self.expect_newline()?;
        self.expect_keyword(Keyword::YaRly)?;
        self.expect_newline()?;
        let then_block = self.parse_block(&[Keyword::Mebbe, Keyword::NoWai, Keyword::Oic])?;

        let mut elifs = Vec::new();
        while self.eat_keyword(Keyword::Mebbe) {
            let elif_cond = self.parse_expr()?;
            self.expect_newline()?;
            let block = self.parse_block(&[Keyword::Mebbe, Keyword::NoWai, Keyword::Oic])?;
            elifs.push((elif_cond, block));
        }

        let else_block = if self.eat_keyword(Keyword::NoWai) {
            self.expect_newline()?;
            Some(self.parse_block(&[Keyword::Oic])?)
        } else {
            None
        };
        self.expect_keyword(Keyword::Oic)?;

        Ok(IfStmt {
            cond,
            then_block,
            elifs,
            else_block,
        })
    }

    /// `IM IN YR label (UPPIN | NERFIN) YR counter WILE expr` NL block
    /// `IM OUTTA YR label`
    pub(crate) fn parse_loop(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::ImInYr)?;
        let (label, _) = self.cursor.expect_ident("a loop label")?;
        let step = match self.current_kind() {
            TokenKind::Keyword(Keyword::Uppin) => LoopStep::Increment,
            TokenKind::Keyword(Keyword::Nerfin) => LoopStep::Decrement,
            _ => return Err(self.unexpected("`UPPIN` or `NERFIN`")),
        };
        self.advance();
        self.expect_keyword(Keyword::Yr)?;
        let (counter, _) = self.cursor.expect_ident("a loop counter variable")?;
        self.expect_keyword(Keyword::Wile)?;
        let cond = self.parse_expr()?;
        self.expect_newline()?;

        let body = self.parse_block(&[Keyword::ImOuttaYr])?;
        self.expect_keyword(Keyword::ImOuttaYr)?;
        let (closed, closed_span) = self.cursor.expect_ident("the loop label")?;
        if closed != label {
            return Err(ParseError::new(
                ParseErrorKind::MismatchedLabel {
                    opened: label,
                    closed,
                },
                closed_span,
            ));
        }

        Ok(Stmt::new(
            StmtKind::Loop(LoopStmt {
                label,
                counter,
                step,
                cond,
                body,
            }),
            start.merge(closed_span),
        ))
    }

    /// `HOW DUZ I name [YR param (AN YR param)*]` NL block `IF U SAY SO`
    ///
    /// The name is registered before the body is parsed so the body may call
    /// itself by bare name.
    pub(crate) fn parse_func_def(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::HowDuzI)?;
        let (name, _) = self.cursor.expect_ident("a function name")?;

        let mut params: Vec<String> = Vec::new();
        if self.eat_keyword(Keyword::Yr) {
            loop {
                let (param, span) = self.cursor.expect_ident("a parameter name")?;
                if params.contains(&param) {
                    return Err(ParseError::new(
                        ParseErrorKind::DuplicateParameter(param),
                        span,
                    ));
                }
                params.push(param);
                if !self.eat_keyword(Keyword::AnYr) {
                    break;
                }
            }
        }
        self.expect_newline()?;
        self.functions.insert(name.clone());
        tracing::trace!(%name, arity = params.len(), "function header");

        let body = self.parse_block(&[Keyword::IfUSaySo])?;
        let end = self.expect_keyword(Keyword::IfUSaySo)?;

        Ok(Stmt::new(
            StmtKind::FuncDef(FuncDef { name, params, body }),
            start.merge(end),
        ))
    }
}

/// The variable whose value a statement leaves behind, if any.
fn subject_name(stmt: &Stmt) -> Option<&str> {
    match &stmt.kind {
        StmtKind::VarDecl { name, .. }
        | StmtKind::Assign { name, .. }
        | StmtKind::Retype { name, .. } => Some(name),
        StmtKind::Loop(lp) => Some(&lp.counter),
        _ => None,
    }
}
