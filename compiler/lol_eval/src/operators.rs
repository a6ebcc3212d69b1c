//! Binary operator implementations.
//!
//! Direct enum dispatch over [`BinaryOp`]. Arithmetic and comparison share
//! one numeric coercion: if either side is a `NUMBAR` the operation runs on
//! floats, otherwise on checked integers.

use std::cmp::Ordering;

use lol_ir::BinaryOp;

use crate::errors::{integer_overflow, EvalError, EvalResult};
use crate::value::{Number, Value};

/// Evaluate `op` on two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::BothSaem => Ok(Value::Troof(left.same_as(right))),
        BinaryOp::Sum => arithmetic(op, left, right, i64::checked_add, |a, b| a + b),
        BinaryOp::Diff => arithmetic(op, left, right, i64::checked_sub, |a, b| a - b),
        BinaryOp::SmallrThan => {
            let ord = compare(op, left, right)?;
            Ok(Value::Troof(ord == Some(Ordering::Less)))
        }
        BinaryOp::BiggrThan => {
            let ord = compare(op, left, right)?;
            Ok(Value::Troof(ord == Some(Ordering::Greater)))
        }
    }
}

fn coerce_pair(op: BinaryOp, left: &Value, right: &Value) -> Result<(Number, Number), EvalError> {
    Ok((left.to_number(op.as_str())?, right.to_number(op.as_str())?))
}

fn arithmetic(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> EvalResult {
    match coerce_pair(op, left, right)? {
        (Number::Int(a), Number::Int(b)) => int_op(a, b)
            .map(Value::Numbr)
            .ok_or_else(|| integer_overflow(op.as_str())),
        (a, b) => Ok(Value::Numbar(float_op(a.as_f64(), b.as_f64()))),
    }
}

/// `None` when a `NaN` is involved, so both comparisons are false.
fn compare(op: BinaryOp, left: &Value, right: &Value) -> Result<Option<Ordering>, EvalError> {
    Ok(match coerce_pair(op, left, right)? {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
    })
}

/// Step a loop counter by `delta` with the same coercion as `SUM OF`.
pub fn step_counter(current: &Value, delta: i64) -> EvalResult {
    evaluate_binary(BinaryOp::Sum, current, &Value::Numbr(delta))
}
