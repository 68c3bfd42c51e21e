//! Binary operator implementations for the static evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. Operators come
//! in two kinds: literal-kind operators project both operands into primitive
//! space and compute there, while reference-kind operators (`&&` and `||`)
//! select one of the two already-evaluated operands by truthiness without
//! inspecting its representation. The split lets `&&`/`||` pass containers
//! and references through untouched.

use std::cmp::Ordering;

use weft_ir::{BinaryOp, OpKind};

use crate::coerce::{self, literal_operand, Literal};
use crate::errors::ResolveResult;
use crate::value::ResolvedValue;

// Direct Dispatch Function

/// Evaluate a binary operation using direct pattern matching.
///
/// Both operands are already evaluated. Reference-kind operators never
/// shortcut evaluation; they only choose which operand to keep. A `Dynamic`
/// operand makes the result `Dynamic`, but a container or reference operand
/// of a literal-kind operator is a hard error even when the other side is
/// `Dynamic`.
pub fn evaluate_binary(left: ResolvedValue, right: ResolvedValue, op: BinaryOp) -> ResolveResult {
    if op.kind() == OpKind::Reference {
        return Ok(select_operand(left, right, op));
    }
    let l = literal_operand(&left, op.as_symbol())?;
    let r = literal_operand(&right, op.as_symbol())?;
    let (Some(l), Some(r)) = (l, r) else {
        return Ok(ResolvedValue::Dynamic);
    };
    Ok(eval_literal_binary(&l, &r, op))
}

// Reference-Kind Operators

/// Pick one operand of `&&`/`||` by the left operand's truthiness.
fn select_operand(left: ResolvedValue, right: ResolvedValue, op: BinaryOp) -> ResolvedValue {
    if left.is_dynamic() || right.is_dynamic() {
        return ResolvedValue::Dynamic;
    }
    let keep_right = if op == BinaryOp::And {
        left.is_truthy()
    } else {
        !left.is_truthy()
    };
    if keep_right {
        right
    } else {
        left
    }
}

// Literal-Kind Operators

/// Dispatch a literal-kind operator over projected primitives.
fn eval_literal_binary(l: &Literal, r: &Literal, op: BinaryOp) -> ResolvedValue {
    match op {
        BinaryOp::Add => eval_add(l, r),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod | BinaryOp::Exp => {
            eval_arithmetic(coerce::to_number(l), coerce::to_number(r), op)
        }
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            eval_relational(l, r, op)
        }
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => eval_bitwise(
            coerce::to_int32(coerce::to_number(l)),
            coerce::to_int32(coerce::to_number(r)),
            op,
        ),
        BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => eval_shift(l, r, op),
        // Reference-kind operators are dispatched before projection.
        BinaryOp::And | BinaryOp::Or => unreachable!(),
    }
}

/// `+` concatenates when either side is a string, adds numerically otherwise.
fn eval_add(l: &Literal, r: &Literal) -> ResolvedValue {
    if matches!(l, Literal::Str(_)) || matches!(r, Literal::Str(_)) {
        let mut joined = coerce::to_string(l);
        joined.push_str(&coerce::to_string(r));
        ResolvedValue::string(joined)
    } else {
        ResolvedValue::Number(coerce::to_number(l) + coerce::to_number(r))
    }
}

/// Arithmetic in double space.
///
/// Division by zero and overflow follow IEEE 754 (`Infinity`, `NaN`); no
/// arithmetic operator produces a hard error.
fn eval_arithmetic(a: f64, b: f64, op: BinaryOp) -> ResolvedValue {
    let n = match op {
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        BinaryOp::Exp => a.powf(b),
        _ => unreachable!(),
    };
    ResolvedValue::Number(n)
}

/// Relational comparison.
///
/// Lexicographic when both sides are strings, numeric otherwise. A numeric
/// comparison involving `NaN` is always false.
fn eval_relational(l: &Literal, r: &Literal, op: BinaryOp) -> ResolvedValue {
    if let (Literal::Str(a), Literal::Str(b)) = (l, r) {
        return ResolvedValue::Bool(ordering_matches(a.as_ref().cmp(b.as_ref()), op));
    }
    let a = coerce::to_number(l);
    let b = coerce::to_number(r);
    let Some(ordering) = a.partial_cmp(&b) else {
        return ResolvedValue::Bool(false);
    };
    ResolvedValue::Bool(ordering_matches(ordering, op))
}

fn ordering_matches(ordering: Ordering, op: BinaryOp) -> bool {
    match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => unreachable!(),
    }
}

/// Bitwise logic on signed 32-bit projections.
fn eval_bitwise(a: i32, b: i32, op: BinaryOp) -> ResolvedValue {
    let n = match op {
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitOr => a | b,
        BinaryOp::BitXor => a ^ b,
        _ => unreachable!(),
    };
    ResolvedValue::Number(f64::from(n))
}

/// Shifts.
///
/// The count is the low five bits of the right operand's unsigned 32-bit
/// projection. `<<` and `>>` work in signed space, `>>>` in unsigned.
fn eval_shift(l: &Literal, r: &Literal, op: BinaryOp) -> ResolvedValue {
    let count = coerce::to_uint32(coerce::to_number(r)) & 31;
    let n = match op {
        BinaryOp::Shl => f64::from(coerce::to_int32(coerce::to_number(l)).wrapping_shl(count)),
        BinaryOp::Shr => f64::from(coerce::to_int32(coerce::to_number(l)).wrapping_shr(count)),
        BinaryOp::UShr => f64::from(coerce::to_uint32(coerce::to_number(l)).wrapping_shr(count)),
        _ => unreachable!(),
    };
    ResolvedValue::Number(n)
}
