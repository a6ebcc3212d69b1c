//! Conditionals, loops, and function definitions.

use lol_ir::{ExprKind, IfCondition, Literal, LoopStep, Stmt, StmtKind};
use pretty_assertions::assert_eq;

use super::{parse_err, parse_ok, shape};
use crate::{ErrorContext, ParseErrorKind};

fn lines(src: &[&str]) -> String {
    src.join("\n")
}

fn if_stmt(stmt: &Stmt) -> &lol_ir::IfStmt {
    match &stmt.kind {
        StmtKind::If(if_stmt) => if_stmt,
        other => panic!("expected a conditional, got {other:?}"),
    }
}

fn subject(if_stmt: &lol_ir::IfStmt) -> &ExprKind {
    match &if_stmt.cond {
        IfCondition::Expr(expr) => &expr.kind,
        IfCondition::Stmt(stmt) => panic!("expected an expression subject, got {stmt:?}"),
    }
}

#[test]
fn conditional_with_expression_subject() {
    let program = parse_ok(&lines(&[
        "I HAS A x ITZ WIN",
        "I HAS A y",
        "x, O RLY?",
        "  YA RLY",
        "    y R 15",
        "  NO WAI",
        "    y R 20",
        "OIC",
        "y",
    ]));
    // The bare `x` is absorbed into the conditional.
    assert_eq!(program.body.len(), 4);
    let cond = if_stmt(&program.body[2]);
    assert_eq!(subject(cond), &ExprKind::Ident("x".to_owned()));
    assert_eq!(cond.then_block.len(), 1);
    assert!(cond.elifs.is_empty());
    assert_eq!(cond.else_block.as_ref().map(Vec::len), Some(1));
}

#[test]
fn conditional_after_assignment_reads_the_variable() {
    let program = parse_ok(&lines(&[
        "I HAS A x ITZ BOTH SAEM 1 AN 1",
        "O RLY?",
        "YA RLY",
        "  WIN",
        "OIC",
    ]));
    assert_eq!(program.body.len(), 2);
    assert!(matches!(program.body[0].kind, StmtKind::VarDecl { .. }));
    let cond = if_stmt(&program.body[1]);
    assert_eq!(subject(cond), &ExprKind::Ident("x".to_owned()));
    assert!(cond.else_block.is_none());
}

#[test]
fn conditional_without_subject() {
    let err = parse_err("O RLY?\nYA RLY\nOIC");
    assert_eq!(err.kind, ParseErrorKind::MissingConditionSubject);
    assert_eq!(err.position(), 0);
}

#[test]
fn conditional_after_noop_tests_noob() {
    let program = parse_ok("O NVM\nO RLY?\nYA RLY\n  1\nOIC");
    assert_eq!(program.body.len(), 2);
    assert_eq!(program.body[0].kind, StmtKind::Noop);
    assert_eq!(subject(if_stmt(&program.body[1])), &ExprKind::Literal(Literal::Noob));
}

#[test]
fn conditional_after_loop_reads_the_counter() {
    let program = parse_ok(&lines(&[
        "IM IN YR L UPPIN YR c WILE c SMALLR THAN 3",
        "IM OUTTA YR L",
        "O RLY?",
        "  YA RLY",
        "    1",
        "OIC",
    ]));
    assert_eq!(program.body.len(), 2);
    assert!(matches!(program.body[0].kind, StmtKind::Loop(_)));
    assert_eq!(subject(if_stmt(&program.body[1])), &ExprKind::Ident("c".to_owned()));
}

#[test]
fn conditional_after_conditional_nests_it() {
    let program = parse_ok(&lines(&[
        "WIN, O RLY?",
        "  YA RLY",
        "    FAIL",
        "OIC",
        "O RLY?",
        "  YA RLY",
        "    1",
        "  NO WAI",
        "    2",
        "OIC",
    ]));
    assert_eq!(program.body.len(), 1);
    let outer = if_stmt(&program.body[0]);
    let IfCondition::Stmt(inner) = &outer.cond else {
        panic!("expected the earlier conditional as subject");
    };
    assert_eq!(subject(if_stmt(inner)), &ExprKind::Literal(Literal::Troof(true)));
}

#[test]
fn mebbe_clauses_in_order() {
    let program = parse_ok(&lines(&[
        "x, O RLY?",
        "  YA RLY",
        "    1",
        "  MEBBE BOTH SAEM FAIL AN x",
        "    2",
        "  MEBBE y",
        "    3",
        "  NO WAI",
        "    4",
        "OIC",
    ]));
    let cond = if_stmt(&program.body[0]);
    let elif_conds: Vec<String> = cond.elifs.iter().map(|(c, _)| shape(c)).collect();
    assert_eq!(elif_conds, vec!["(BOTH SAEM FAIL x)", "y"]);
}

#[test]
fn nested_conditional_inside_mebbe() {
    let program = parse_ok(&lines(&[
        "I HAS A x ITZ FAIL",
        "I HAS A y",
        "x, O RLY?",
        "  YA RLY",
        "    y R 15",
        "  MEBBE BOTH SAEM FAIL AN x",
        "      x, O RLY?, YA RLY",
        "         y R 25",
        "      NO WAI",
        "         y R 28",
        "      OIC",
        "  NO WAI",
        "    y R 20",
        "OIC",
        "y",
    ]));
    assert_eq!(program.body.len(), 4);
    let outer = if_stmt(&program.body[2]);
    let (_, mebbe_block) = &outer.elifs[0];
    assert_eq!(mebbe_block.len(), 1);
    let inner = if_stmt(&mebbe_block[0]);
    assert_eq!(subject(inner), &ExprKind::Ident("x".to_owned()));
    assert!(inner.else_block.is_some());
    assert_eq!(outer.else_block.as_ref().map(Vec::len), Some(1));
}

#[test]
fn unterminated_conditional() {
    let err = parse_err("x, O RLY?\nYA RLY\n  1\n");
    assert_eq!(err.expected(), Some("`OIC`"));
    assert_eq!(err.context, Some(ErrorContext::Conditional));
}

#[test]
fn ya_rly_is_required() {
    let err = parse_err("x, O RLY?\nNO WAI\nOIC");
    assert_eq!(err.expected(), Some("`YA RLY`"));
}

#[test]
fn loop_statement() {
    let program = parse_ok(&lines(&[
        "I HAS A COUNTER ITZ 0",
        "IM IN YR LOOP UPPIN YR COUNTER WILE COUNTER SMALLR THAN 10",
        "  O NVM",
        "IM OUTTA YR LOOP",
        "COUNTER",
    ]));
    assert_eq!(program.body.len(), 3);
    let StmtKind::Loop(lp) = &program.body[1].kind else {
        panic!("expected a loop");
    };
    assert_eq!(lp.label, "LOOP");
    assert_eq!(lp.counter, "COUNTER");
    assert_eq!(lp.step, LoopStep::Increment);
    assert_eq!(shape(&lp.cond), "(SMALLR THAN COUNTER 10)");
    assert_eq!(lp.body.len(), 1);
}

#[test]
fn nerfin_loop() {
    let program = parse_ok("IM IN YR DOWN NERFIN YR N WILE N BIGGR THAN 0\nIM OUTTA YR DOWN");
    let StmtKind::Loop(lp) = &program.body[0].kind else {
        panic!("expected a loop");
    };
    assert_eq!(lp.step, LoopStep::Decrement);
    assert!(lp.body.is_empty());
}

#[test]
fn loop_labels_must_match() {
    let err = parse_err("IM IN YR LOOP UPPIN YR I WILE WIN\nIM OUTTA YR LOOPZ");
    assert_eq!(
        err.kind,
        ParseErrorKind::MismatchedLabel {
            opened: "LOOP".to_owned(),
            closed: "LOOPZ".to_owned(),
        }
    );
    assert_eq!(err.context, Some(ErrorContext::Loop));
}

#[test]
fn loop_needs_a_step() {
    let err = parse_err("IM IN YR LOOP YR I WILE WIN\nIM OUTTA YR LOOP");
    assert_eq!(err.expected(), Some("`UPPIN` or `NERFIN`"));
}

#[test]
fn function_definition() {
    let program = parse_ok(&lines(&[
        "HOW DUZ I ADD YR NUM1 AN YR NUM2",
        "  SUM OF NUM1 AN NUM2",
        "IF U SAY SO",
        "",
        "",
        "ADD 5 AN 3 MKAY",
    ]));
    assert_eq!(program.body.len(), 2);
    let StmtKind::FuncDef(def) = &program.body[0].kind else {
        panic!("expected a function definition");
    };
    assert_eq!(def.name, "ADD");
    assert_eq!(def.params, vec!["NUM1", "NUM2"]);
    assert_eq!(def.body.len(), 1);
    let StmtKind::Expr(call) = &program.body[1].kind else {
        panic!("expected a call");
    };
    assert_eq!(shape(call), "(call ADD [5 3])");
}

#[test]
fn recursive_function_sees_its_own_name() {
    let program = parse_ok(&lines(&[
        "HOW DUZ I FOREVER",
        "  FOREVER",
        "IF U SAY SO",
    ]));
    let StmtKind::FuncDef(def) = &program.body[0].kind else {
        panic!("expected a function definition");
    };
    let StmtKind::Expr(body) = &def.body[0].kind else {
        panic!("expected an expression");
    };
    assert_eq!(shape(body), "(call FOREVER [])");
}

#[test]
fn duplicate_parameter() {
    let err = parse_err("HOW DUZ I F YR A1 AN YR A1\nIF U SAY SO");
    assert_eq!(err.kind, ParseErrorKind::DuplicateParameter("A1".to_owned()));
    assert_eq!(err.context, Some(ErrorContext::FunctionDef));
}

#[test]
fn unterminated_function() {
    let err = parse_err("HOW DUZ I F\n  1\n");
    assert_eq!(err.expected(), Some("`IF U SAY SO`"));
}
