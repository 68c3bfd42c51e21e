//! Literal projection and primitive coercions.
//!
//! Literal-kind operators work in primitive space: operands are projected
//! down to [`Literal`] first, and the arithmetic, comparison, and bitwise
//! rules below reproduce the host language's coercion behavior on those
//! primitives. Containers and references have no projection and surface a
//! hard error instead.

use crate::errors::{not_a_literal, ResolutionError};
use crate::value::{Heap, ResolvedValue};

/// A resolved value projected down to primitive space.
///
/// `Dynamic` has no projection either; [`literal_operand`] reports it as
/// `None` so operators can return `Dynamic` without running any coercion.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Literal {
    Number(f64),
    Str(Heap<String>),
    Bool(bool),
    Null,
    Undefined,
}

impl Literal {
    /// Truthiness of a primitive, matching [`ResolvedValue::is_truthy`].
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            Literal::Bool(b) => *b,
            Literal::Number(n) => *n != 0.0 && !n.is_nan(),
            Literal::Str(s) => !s.is_empty(),
            Literal::Null | Literal::Undefined => false,
        }
    }
}

/// Project an operand of `operator` into primitive space.
///
/// Returns `Ok(None)` for `Dynamic` and a hard error for containers and
/// references, which no literal operator accepts.
pub(crate) fn literal_operand(
    value: &ResolvedValue,
    operator: &'static str,
) -> Result<Option<Literal>, ResolutionError> {
    match value {
        ResolvedValue::Number(n) => Ok(Some(Literal::Number(*n))),
        ResolvedValue::Str(s) => Ok(Some(Literal::Str(s.clone()))),
        ResolvedValue::Bool(b) => Ok(Some(Literal::Bool(*b))),
        ResolvedValue::Null => Ok(Some(Literal::Null)),
        ResolvedValue::Undefined => Ok(Some(Literal::Undefined)),
        ResolvedValue::Dynamic => Ok(None),
        ResolvedValue::Array(_) | ResolvedValue::Map(_) | ResolvedValue::Ref(_) => {
            Err(not_a_literal(operator, value.type_name()))
        }
    }
}

/// Numeric coercion of a primitive.
pub(crate) fn to_number(literal: &Literal) -> f64 {
    match literal {
        Literal::Number(n) => *n,
        Literal::Str(s) => string_to_number(s),
        Literal::Bool(true) => 1.0,
        Literal::Bool(false) | Literal::Null => 0.0,
        Literal::Undefined => f64::NAN,
    }
}

/// String coercion of a primitive.
pub(crate) fn to_string(literal: &Literal) -> String {
    match literal {
        Literal::Number(n) => number_to_string(*n),
        Literal::Str(s) => s.as_ref().clone(),
        Literal::Bool(true) => "true".to_string(),
        Literal::Bool(false) => "false".to_string(),
        Literal::Null => "null".to_string(),
        Literal::Undefined => "undefined".to_string(),
    }
}

/// Numeric coercion of string contents.
///
/// Follows the host language's `Number(string)` rules: surrounding
/// whitespace is ignored, the empty string is zero, `Infinity` spellings
/// and `0x`/`0o`/`0b` prefixes are recognized, and anything else must be a
/// plain decimal literal or the result is `NaN`.
pub(crate) fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(digits) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return u64::from_str_radix(digits, 16).map_or(f64::NAN, int_as_f64);
    }
    if let Some(digits) = trimmed.strip_prefix("0o").or_else(|| trimmed.strip_prefix("0O")) {
        return u64::from_str_radix(digits, 8).map_or(f64::NAN, int_as_f64);
    }
    if let Some(digits) = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")) {
        return u64::from_str_radix(digits, 2).map_or(f64::NAN, int_as_f64);
    }
    // Rust's f64 parser accepts spellings like "inf" and "NaN" that the
    // host language rejects; letters other than the exponent marker mean
    // the string is not a plain decimal literal.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Widen an integer to a double.
#[expect(
    clippy::cast_precision_loss,
    reason = "values above 2^53 round to the nearest double, matching the host language"
)]
pub(crate) fn int_as_f64(value: u64) -> f64 {
    value as f64
}

/// String form of a number.
///
/// `NaN`, infinities, and negative zero get their special spellings; all
/// other values use shortest round-trip formatting. Extreme magnitudes keep
/// plain notation rather than switching to exponent form.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{n}")
}

/// Signed 32-bit projection used by bitwise operators.
///
/// Truncates toward zero, wraps modulo 2^32, and reinterprets the result as
/// two's complement.
#[expect(
    clippy::cast_possible_wrap,
    reason = "the wrap is the two's complement reinterpretation"
)]
pub(crate) fn to_int32(n: f64) -> i32 {
    to_uint32(n) as i32
}

/// Unsigned 32-bit projection used by shift counts and `>>>`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the truncated value is wrapped into [0, 2^32) first"
)]
pub(crate) fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}
