//! Runtime values and the coercion rules shared by every operator.

use std::fmt;

use lol_ir::{Literal, TypeName};

use crate::errors::{cast_failed, type_mismatch, EvalError};

/// A dynamically typed runtime value.
///
/// Values are owned and copied on assignment; nothing aliases.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Noob,
    Troof(bool),
    Numbr(i64),
    Numbar(f64),
    Yarn(String),
}

/// A value after numeric coercion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl Value {
    pub fn type_name(&self) -> TypeName {
        match self {
            Value::Noob => TypeName::Noob,
            Value::Troof(_) => TypeName::Troof,
            Value::Numbr(_) => TypeName::Numbr,
            Value::Numbar(_) => TypeName::Numbar,
            Value::Yarn(_) => TypeName::Yarn,
        }
    }

    /// `NOOB`, `FAIL`, `0`, `0.0`, and `""` are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Noob => false,
            Value::Troof(b) => *b,
            Value::Numbr(n) => *n != 0,
            Value::Numbar(f) => *f != 0.0,
            Value::Yarn(s) => !s.is_empty(),
        }
    }

    /// Canonical text form, as used by `SMOOSH`, `VISIBLE`, and casts to
    /// `YARN`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Short description for error messages: the type, plus the text for
    /// a `YARN`.
    pub fn describe(&self) -> String {
        match self {
            Value::Yarn(s) => format!("YARN {s:?}"),
            other => format!("{} {other}", other.type_name()),
        }
    }

    /// Numeric coercion for arithmetic and comparison.
    ///
    /// `YARN` text that looks like a number is parsed; `TROOF` and `NOOB`
    /// are rejected.
    pub fn to_number(&self, op: &'static str) -> Result<Number, EvalError> {
        match self {
            Value::Numbr(n) => Ok(Number::Int(*n)),
            Value::Numbar(f) => Ok(Number::Float(*f)),
            Value::Yarn(s) => parse_numeric(s).ok_or_else(|| type_mismatch(op, self)),
            Value::Noob | Value::Troof(_) => Err(type_mismatch(op, self)),
        }
    }

    /// Strict equality for `BOTH SAEM`: same type and same value.
    ///
    /// `NaN` equals itself so the operator stays reflexive.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Noob, Value::Noob) => true,
            (Value::Troof(a), Value::Troof(b)) => a == b,
            (Value::Numbr(a), Value::Numbr(b)) => a == b,
            (Value::Numbar(a), Value::Numbar(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Yarn(a), Value::Yarn(b)) => a == b,
            _ => false,
        }
    }

    /// Convert to `target`, producing a new value (`MAEK`, `IS NOW A`).
    pub fn cast(&self, target: TypeName) -> Result<Value, EvalError> {
        match target {
            TypeName::Noob => Ok(Value::Noob),
            TypeName::Troof => Ok(Value::Troof(self.is_truthy())),
            TypeName::Yarn => Ok(Value::Yarn(self.render())),
            TypeName::Numbr => self.cast_numbr(),
            TypeName::Numbar => self.cast_numbar(),
        }
    }

    fn cast_numbr(&self) -> Result<Value, EvalError> {
        let n = match self {
            Value::Noob => 0,
            Value::Troof(b) => i64::from(*b),
            Value::Numbr(n) => *n,
            Value::Numbar(f) => {
                truncate(*f).ok_or_else(|| cast_failed(self, TypeName::Numbr))?
            }
            Value::Yarn(s) => match parse_numeric(s) {
                Some(Number::Int(n)) => n,
                Some(Number::Float(f)) => {
                    truncate(f).ok_or_else(|| cast_failed(self, TypeName::Numbr))?
                }
                None => return Err(cast_failed(self, TypeName::Numbr)),
            },
        };
        Ok(Value::Numbr(n))
    }

    fn cast_numbar(&self) -> Result<Value, EvalError> {
        let f = match self {
            Value::Noob => 0.0,
            Value::Troof(b) => f64::from(u8::from(*b)),
            Value::Numbr(n) => Number::Int(*n).as_f64(),
            Value::Numbar(f) => *f,
            Value::Yarn(s) => parse_numeric(s)
                .map(Number::as_f64)
                .ok_or_else(|| cast_failed(self, TypeName::Numbar))?,
        };
        Ok(Value::Numbar(f))
    }
}

/// Truncate toward zero, or `None` if the result is not a `NUMBR`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(f: f64) -> Option<i64> {
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

/// Parse text of the form `[+-]?digits(.digits)?`.
///
/// Text with a fractional part becomes a float. Anything else, including
/// surrounding whitespace or an integer too large for a `NUMBR`, is `None`.
pub fn parse_numeric(text: &str) -> Option<Number> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return None;
    }
    match frac_part {
        None => text.parse().ok().map(Number::Int),
        Some(frac) if all_digits(frac) => text.parse().ok().map(Number::Float),
        Some(_) => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Noob => f.write_str("NOOB"),
            Value::Troof(true) => f.write_str("WIN"),
            Value::Troof(false) => f.write_str("FAIL"),
            Value::Numbr(n) => write!(f, "{n}"),
            Value::Numbar(x) => write!(f, "{x}"),
            Value::Yarn(s) => f.write_str(s),
        }
    }
}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::Noob => Value::Noob,
            Literal::Troof(b) => Value::Troof(*b),
            Literal::Numbr(n) => Value::Numbr(*n),
            Literal::Numbar(f) => Value::Numbar(*f),
            Literal::Yarn(s) => Value::Yarn(s.clone()),
        }
    }
}
