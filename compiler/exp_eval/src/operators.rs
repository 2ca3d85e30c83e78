//! Binary operator implementations.
//!
//! The operator set is closed, so evaluation is a single exhaustive match.
//! Comparisons and logical operators produce `1` or `0`; logical operators
//! see both operands (no short-circuiting) and treat any non-zero value as
//! true. Arithmetic wraps on overflow.

use exp_ir::{BinaryOp, Int};

use crate::errors::{division_by_zero, modulo_by_zero, EvalResult};

#[inline]
fn truth(b: bool) -> Int {
    Int::from(b)
}

/// Apply `op` to two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: Int, right: Int) -> EvalResult<Int> {
    let value = match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                return Err(division_by_zero());
            }
            left.wrapping_div(right)
        }
        BinaryOp::Mod => {
            if right == 0 {
                return Err(modulo_by_zero());
            }
            left.wrapping_rem(right)
        }
        BinaryOp::Gt => truth(left > right),
        BinaryOp::Lt => truth(left < right),
        BinaryOp::GtEq => truth(left >= right),
        BinaryOp::LtEq => truth(left <= right),
        BinaryOp::Eq => truth(left == right),
        BinaryOp::NotEq => truth(left != right),
        BinaryOp::Or => truth(left != 0 || right != 0),
        BinaryOp::And => truth(left != 0 && right != 0),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::EvalErrorKind;
    use proptest::prelude::*;

    fn eval(op: BinaryOp, l: Int, r: Int) -> Int {
        evaluate_binary(op, l, r).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval(BinaryOp::Add, 2, 3), 5);
        assert_eq!(eval(BinaryOp::Sub, 2, 3), -1);
        assert_eq!(eval(BinaryOp::Mul, 4, 5), 20);
        assert_eq!(eval(BinaryOp::Div, 7, 2), 3);
        assert_eq!(eval(BinaryOp::Mod, 100, 3), 1);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval(BinaryOp::Div, -7, 2), -3);
        assert_eq!(eval(BinaryOp::Div, 7, -2), -3);
        assert_eq!(eval(BinaryOp::Mod, -7, 2), -1);
        assert_eq!(eval(BinaryOp::Mod, 7, -2), 1);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(eval(BinaryOp::Add, Int::MAX, 1), Int::MIN);
        assert_eq!(eval(BinaryOp::Sub, Int::MIN, 1), Int::MAX);
        assert_eq!(eval(BinaryOp::Div, Int::MIN, -1), Int::MIN);
        assert_eq!(eval(BinaryOp::Mod, Int::MIN, -1), 0);
        assert_eq!(eval(BinaryOp::Add, 2_147_483_647, 1), -2_147_483_648);
        assert_eq!(eval(BinaryOp::Mul, 65_536, 65_536), 0);
        assert_eq!(eval(BinaryOp::Mul, 46_341, 46_341), -2_147_479_015);
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(
            evaluate_binary(BinaryOp::Div, 1, 0).unwrap_err().kind,
            EvalErrorKind::DivisionByZero
        );
        assert_eq!(
            evaluate_binary(BinaryOp::Mod, 1, 0).unwrap_err().kind,
            EvalErrorKind::ModuloByZero
        );
    }

    #[test]
    fn comparisons_yield_one_or_zero() {
        assert_eq!(eval(BinaryOp::Gt, 2, 1), 1);
        assert_eq!(eval(BinaryOp::Gt, 1, 1), 0);
        assert_eq!(eval(BinaryOp::GtEq, 1, 1), 1);
        assert_eq!(eval(BinaryOp::Lt, 1, 2), 1);
        assert_eq!(eval(BinaryOp::LtEq, 3, 2), 0);
        assert_eq!(eval(BinaryOp::Eq, 5, 5), 1);
        assert_eq!(eval(BinaryOp::NotEq, 5, 5), 0);
    }

    #[test]
    fn logical_operators_treat_nonzero_as_true() {
        assert_eq!(eval(BinaryOp::And, 7, -3), 1);
        assert_eq!(eval(BinaryOp::And, 7, 0), 0);
        assert_eq!(eval(BinaryOp::Or, 0, 0), 0);
        assert_eq!(eval(BinaryOp::Or, 0, 42), 1);
    }

    proptest! {
        #[test]
        fn every_operator_is_total_off_zero(l in any::<Int>(), r in any::<Int>()) {
            prop_assume!(r != 0);
            for op in BinaryOp::ALL {
                prop_assert!(evaluate_binary(op, l, r).is_ok());
            }
        }

        #[test]
        fn predicates_are_boolean(l in any::<Int>(), r in any::<Int>()) {
            for op in BinaryOp::ALL {
                if op.precedence() >= 3 {
                    let v = evaluate_binary(op, l, r).unwrap();
                    prop_assert!(v == 0 || v == 1, "{op} gave {v}");
                }
            }
        }

        #[test]
        fn div_mod_identity(l in any::<Int>(), r in any::<Int>()) {
            prop_assume!(r != 0);
            let q = eval(BinaryOp::Div, l, r);
            let m = eval(BinaryOp::Mod, l, r);
            prop_assert_eq!(q.wrapping_mul(r).wrapping_add(m), l);
        }
    }
}
