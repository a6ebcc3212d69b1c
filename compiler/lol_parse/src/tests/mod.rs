//! Parser tests.
//!
//! - `parser`: statements, expressions, literals, and calls
//! - `blocks`: conditionals, loops, function definitions, and their errors

#![allow(clippy::unwrap_used)]

mod blocks;

use lol_ir::{Expr, ExprKind, Literal, Program, Stmt, StmtKind};

use crate::{parse, ParseError};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = lol_lexer::lex(source).unwrap();
    parse(&tokens)
}

fn parse_ok(source: &str) -> Program {
    parse_source(source).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}

/// The single statement of a one-statement program.
fn only_stmt(source: &str) -> Stmt {
    let mut program = parse_ok(source);
    assert_eq!(program.body.len(), 1, "expected one statement in {source:?}");
    program.body.remove(0)
}

/// The expression of a one-expression program.
fn only_expr(source: &str) -> Expr {
    match only_stmt(source).kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Strip spans so trees can be compared structurally.
fn shape(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(Literal::Noob) => "NOOB".to_owned(),
        ExprKind::Literal(Literal::Troof(b)) => if *b { "WIN" } else { "FAIL" }.to_owned(),
        ExprKind::Literal(Literal::Numbr(n)) => n.to_string(),
        ExprKind::Literal(Literal::Numbar(f)) => format!("{f:?}"),
        ExprKind::Literal(Literal::Yarn(s)) => format!("{s:?}"),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_str(), shape(left), shape(right))
        }
        ExprKind::Variadic { op, operands } => {
            let parts: Vec<String> = operands.iter().map(shape).collect();
            format!("({} {})", op.as_str(), parts.join(" "))
        }
        ExprKind::Call { name, args } => {
            let parts: Vec<String> = args.iter().map(shape).collect();
            format!("(call {name} [{}])", parts.join(" "))
        }
        ExprKind::Cast { expr, target } => format!("(MAEK {} {target})", shape(expr)),
    }
}
