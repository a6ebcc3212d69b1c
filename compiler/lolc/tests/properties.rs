//! Property tests over whole programs.

#![allow(clippy::unwrap_used)]

use lol_eval::EvalConfig;
use lolc::{run_with, Value};
use proptest::prelude::*;

fn eval(source: &str) -> Value {
    run_with(source, &EvalConfig::silent()).unwrap()
}

/// Literal source text that lexes to a single value.
fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        Just("WIN".to_owned()),
        Just("FAIL".to_owned()),
        Just("NOOB".to_owned()),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| format!("\"{s}\"")),
    ]
}

/// Integer expression source paired with its expected value.
fn arithmetic() -> impl Strategy<Value = (String, i64)> {
    let leaf = (-100i64..100).prop_map(|n| (n.to_string(), n));
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|((a, x), (b, y))| {
                (format!("SUM OF {a} AN {b}"), x + y)
            }),
            (inner.clone(), inner.clone()).prop_map(|((a, x), (b, y))| {
                (format!("DIFF OF {a} AN {b}"), x - y)
            }),
            inner.prop_map(|(a, x)| (format!("({a})"), x)),
        ]
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic((src, expected) in arithmetic()) {
        let program = format!("I HAS A result ITZ {src}\nresult");
        let first = eval(&program);
        prop_assert_eq!(&first, &Value::Numbr(expected));
        prop_assert_eq!(first, eval(&program));
    }

    #[test]
    fn numbr_survives_yarn_round_trip(x in any::<i64>()) {
        let src = format!("MAEK MAEK {x} A YARN A NUMBR");
        prop_assert_eq!(eval(&src), Value::Numbr(x));
    }

    #[test]
    fn both_saem_is_reflexive(lit in literal()) {
        let src = format!("BOTH SAEM {lit} AN {lit}");
        prop_assert_eq!(eval(&src), Value::Troof(true));
    }

    #[test]
    fn both_saem_never_coerces(n in any::<i32>()) {
        let src = format!("BOTH SAEM \"{n}\" AN {n}");
        prop_assert_eq!(eval(&src), Value::Troof(false));
    }

    #[test]
    fn smoosh_of_one_is_its_render(lit in literal()) {
        let rendered = eval(&lit).render();
        prop_assert_eq!(eval(&format!("SMOOSH {lit} MKAY")), Value::Yarn(rendered));
    }

    #[test]
    fn smoosh_is_associative(a in literal(), b in literal(), c in literal()) {
        let flat = eval(&format!("SMOOSH {a} AN {b} AN {c} MKAY"));
        let left = eval(&format!("SMOOSH SMOOSH {a} AN {b} MKAY AN {c} MKAY"));
        let right = eval(&format!("SMOOSH {a} AN SMOOSH {b} AN {c} MKAY MKAY"));
        prop_assert_eq!(&flat, &left);
        prop_assert_eq!(&flat, &right);
    }
}
