#![allow(clippy::unwrap_used)]

use super::*;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn declare_and_lookup() {
    let mut env = Environment::new();
    env.declare("x", Value::Numbr(15)).unwrap();
    assert_eq!(env.lookup("x"), Some(&Value::Numbr(15)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn redeclaring_in_the_same_frame_fails() {
    let mut env = Environment::new();
    env.declare("x", Value::Noob).unwrap();
    let err = env.declare("x", Value::Numbr(1)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::Redefinition {
            name: "x".to_owned()
        }
    );
}

#[test]
fn assign_requires_a_binding() {
    let mut env = Environment::new();
    let err = env.assign("NUM2", Value::Numbr(1)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundName {
            name: "NUM2".to_owned()
        }
    );
    env.declare("NUM2", Value::Noob).unwrap();
    env.assign("NUM2", Value::Numbr(1)).unwrap();
    assert_eq!(env.lookup("NUM2"), Some(&Value::Numbr(1)));
}

#[test]
fn frames_see_globals_but_shadow_them() {
    let mut env = Environment::new();
    env.declare("x", Value::Numbr(1)).unwrap();
    env.push_frame();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("x"), Some(&Value::Numbr(1)));
    assert!(!env.is_declared_here("x"));

    env.declare("x", Value::Numbr(2)).unwrap();
    assert_eq!(env.lookup("x"), Some(&Value::Numbr(2)));
    env.assign("x", Value::Numbr(3)).unwrap();

    env.pop_frame();
    assert_eq!(env.depth(), 0);
    assert_eq!(env.lookup("x"), Some(&Value::Numbr(1)));
}

#[test]
fn assignment_inside_a_frame_reaches_globals() {
    let mut env = Environment::new();
    env.declare("total", Value::Numbr(0)).unwrap();
    env.push_frame();
    env.assign("total", Value::Numbr(9)).unwrap();
    env.pop_frame();
    assert_eq!(env.lookup("total"), Some(&Value::Numbr(9)));
}

#[test]
fn frames_do_not_see_each_other() {
    let mut env = Environment::new();
    env.push_frame();
    env.declare("local", Value::Troof(true)).unwrap();
    env.push_frame();
    assert_eq!(env.lookup("local"), None);
    env.pop_frame();
    assert!(env.is_declared_here("local"));
    env.pop_frame();
    assert_eq!(env.lookup("local"), None);
}

#[test]
fn scope_basics() {
    let scope = Scope::new();
    assert!(!scope.contains("x"));
    assert_eq!(scope.get("x"), None);
}

#[test]
fn same_declaration_site_rebinds() {
    let mut env = Environment::new();
    let site = Span::new(10, 25);
    env.declare_at("t", Value::Numbr(0), site).unwrap();
    env.declare_at("t", Value::Numbr(1), site).unwrap();
    assert_eq!(env.lookup("t"), Some(&Value::Numbr(1)));
}

#[test]
fn different_declaration_site_is_a_redefinition() {
    let mut env = Environment::new();
    env.declare_at("t", Value::Numbr(0), Span::new(0, 9)).unwrap();
    let err = env
        .declare_at("t", Value::Numbr(1), Span::new(10, 19))
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redefinition { .. }));

    // Parameters and loop counters have no site and never rebind.
    env.declare("n", Value::Noob).unwrap();
    let err = env.declare_at("n", Value::Noob, Span::new(20, 29)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redefinition { .. }));
}
