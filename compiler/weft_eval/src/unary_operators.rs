//! Unary operator implementations for the static evaluator.
//!
//! Provides direct enum-based dispatch for unary operations. All four
//! operators are literal-kind: the operand is projected into primitive space
//! first, so a container or reference operand is a hard error and a
//! `Dynamic` operand makes the result `Dynamic`.

use weft_ir::UnaryOp;

use crate::coerce::{self, literal_operand, Literal};
use crate::errors::ResolveResult;
use crate::value::ResolvedValue;

/// Evaluate a unary operation using direct pattern matching.
///
/// The operand is already evaluated. `-` and `+` coerce numerically, `!`
/// negates truthiness, and `~` complements the signed 32-bit projection.
pub fn evaluate_unary(value: ResolvedValue, op: UnaryOp) -> ResolveResult {
    let Some(operand) = literal_operand(&value, op.as_symbol())? else {
        return Ok(ResolvedValue::Dynamic);
    };
    Ok(apply(&operand, op))
}

fn apply(operand: &Literal, op: UnaryOp) -> ResolvedValue {
    match op {
        UnaryOp::Neg => ResolvedValue::Number(-coerce::to_number(operand)),
        UnaryOp::Pos => ResolvedValue::Number(coerce::to_number(operand)),
        UnaryOp::Not => ResolvedValue::Bool(!operand.is_truthy()),
        UnaryOp::BitNot => {
            ResolvedValue::Number(f64::from(!coerce::to_int32(coerce::to_number(operand))))
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    mod numeric_negation {
        use super::*;

        #[test]
        fn number() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(5.0), UnaryOp::Neg).unwrap(),
                ResolvedValue::Number(-5.0)
            );
        }

        #[test]
        fn numeric_string_coerces() {
            assert_eq!(
                evaluate_unary(ResolvedValue::string("5"), UnaryOp::Neg).unwrap(),
                ResolvedValue::Number(-5.0)
            );
        }

        #[test]
        fn boolean_coerces() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Bool(true), UnaryOp::Neg).unwrap(),
                ResolvedValue::Number(-1.0)
            );
        }

        #[test]
        fn undefined_is_nan() {
            let result = evaluate_unary(ResolvedValue::Undefined, UnaryOp::Neg).unwrap();
            match result {
                ResolvedValue::Number(n) => assert!(n.is_nan()),
                other => panic!("expected number, got {other:?}"),
            }
        }

        #[test]
        fn null_is_negative_zero() {
            let result = evaluate_unary(ResolvedValue::Null, UnaryOp::Neg).unwrap();
            match result {
                ResolvedValue::Number(n) => {
                    assert!(n == 0.0);
                    assert!(n.is_sign_negative());
                }
                other => panic!("expected number, got {other:?}"),
            }
        }
    }

    mod unary_plus {
        use super::*;

        #[test]
        fn numeric_string() {
            assert_eq!(
                evaluate_unary(ResolvedValue::string("42"), UnaryOp::Pos).unwrap(),
                ResolvedValue::Number(42.0)
            );
        }

        #[test]
        fn non_numeric_string_is_nan() {
            let result = evaluate_unary(ResolvedValue::string("abc"), UnaryOp::Pos).unwrap();
            match result {
                ResolvedValue::Number(n) => assert!(n.is_nan()),
                other => panic!("expected number, got {other:?}"),
            }
        }

        #[test]
        fn null_is_zero() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Null, UnaryOp::Pos).unwrap(),
                ResolvedValue::Number(0.0)
            );
        }
    }

    mod logical_not {
        use super::*;

        #[test]
        fn true_becomes_false() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Bool(true), UnaryOp::Not).unwrap(),
                ResolvedValue::Bool(false)
            );
        }

        #[test]
        fn zero_is_falsy() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(0.0), UnaryOp::Not).unwrap(),
                ResolvedValue::Bool(true)
            );
        }

        #[test]
        fn empty_string_is_falsy() {
            assert_eq!(
                evaluate_unary(ResolvedValue::string(""), UnaryOp::Not).unwrap(),
                ResolvedValue::Bool(true)
            );
        }

        #[test]
        fn nonempty_string_is_truthy() {
            assert_eq!(
                evaluate_unary(ResolvedValue::string("x"), UnaryOp::Not).unwrap(),
                ResolvedValue::Bool(false)
            );
        }

        #[test]
        fn null_and_undefined_are_falsy() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Null, UnaryOp::Not).unwrap(),
                ResolvedValue::Bool(true)
            );
            assert_eq!(
                evaluate_unary(ResolvedValue::Undefined, UnaryOp::Not).unwrap(),
                ResolvedValue::Bool(true)
            );
        }
    }

    mod bitwise_not {
        use super::*;

        #[test]
        fn zero_becomes_minus_one() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(0.0), UnaryOp::BitNot).unwrap(),
                ResolvedValue::Number(-1.0)
            );
        }

        #[test]
        fn minus_one_becomes_zero() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(-1.0), UnaryOp::BitNot).unwrap(),
                ResolvedValue::Number(0.0)
            );
        }

        #[test]
        fn positive_value() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(5.0), UnaryOp::BitNot).unwrap(),
                ResolvedValue::Number(-6.0)
            );
        }

        #[test]
        fn numeric_string_coerces() {
            assert_eq!(
                evaluate_unary(ResolvedValue::string("5"), UnaryOp::BitNot).unwrap(),
                ResolvedValue::Number(-6.0)
            );
        }

        #[test]
        fn nan_projects_to_zero() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(f64::NAN), UnaryOp::BitNot).unwrap(),
                ResolvedValue::Number(-1.0)
            );
        }

        #[test]
        fn wraps_past_int32_range() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Number(2_147_483_648.0), UnaryOp::BitNot).unwrap(),
                ResolvedValue::Number(2_147_483_647.0)
            );
        }
    }

    mod poisoning_and_errors {
        use super::*;
        use crate::errors::ResolutionErrorKind;

        #[test]
        fn dynamic_operand_poisons() {
            assert_eq!(
                evaluate_unary(ResolvedValue::Dynamic, UnaryOp::Not).unwrap(),
                ResolvedValue::Dynamic
            );
            assert_eq!(
                evaluate_unary(ResolvedValue::Dynamic, UnaryOp::Neg).unwrap(),
                ResolvedValue::Dynamic
            );
        }

        #[test]
        fn array_operand_is_hard_error() {
            let err = evaluate_unary(ResolvedValue::array(vec![]), UnaryOp::Neg).unwrap_err();
            assert_eq!(
                err.kind,
                ResolutionErrorKind::NotALiteral {
                    operator: "-",
                    operand: "array".to_string()
                }
            );
        }

        #[test]
        fn map_operand_is_hard_error() {
            let err = evaluate_unary(
                ResolvedValue::map(crate::value::OrderedMap::new()),
                UnaryOp::Not,
            )
            .unwrap_err();
            assert_eq!(
                err.kind,
                ResolutionErrorKind::NotALiteral {
                    operator: "!",
                    operand: "map".to_string()
                }
            );
        }
    }
}
