//! Binary operator dispatch for the evaluator.
//!
//! Direct enum-based dispatch: the operator set is closed (only
//! constant-foldable operators survive elaboration), so pattern
//! matching gives exhaustiveness checking and a new operator variant is
//! a compile error here rather than a missed case.
//!
//! Every operation is total over four-state values - unknowns
//! propagate, division by zero goes to X - so dispatch never fails.

use slate_ir::BinaryOp;
use slate_logic::LogicVec;

/// Evaluate a binary operation on two four-state integers.
///
/// Operand width alignment and signedness rules live on [`LogicVec`];
/// this function only selects the operation. Note the two equality
/// families stay distinct: `Eq`/`NotEq` are four-state and return X
/// when either operand carries unknown bits, while `CaseEq`/`CaseNotEq`
/// match bit patterns exactly and always return a definite bit.
pub fn evaluate_binary(left: LogicVec, right: LogicVec, op: BinaryOp) -> LogicVec {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
        BinaryOp::Mod => left % right,
        BinaryOp::BitAnd => left & right,
        BinaryOp::BitOr => left | right,
        BinaryOp::BitXor => left ^ right,
        BinaryOp::BitXnor => left.xnor(right),
        BinaryOp::Eq => LogicVec::from_logic(left.logical_eq(right)),
        BinaryOp::NotEq => LogicVec::from_logic(left.logical_ne(right)),
        BinaryOp::CaseEq => LogicVec::from_bool(left.case_eq(right)),
        BinaryOp::CaseNotEq => LogicVec::from_bool(!left.case_eq(right)),
        BinaryOp::Lt => LogicVec::from_logic(left.less_than(right)),
        BinaryOp::LtEq => LogicVec::from_logic(left.less_equal(right)),
        BinaryOp::Gt => LogicVec::from_logic(left.greater_than(right)),
        BinaryOp::GtEq => LogicVec::from_logic(left.greater_equal(right)),
        // Arithmetic left shift is the logical form; only the right
        // shift distinguishes sign fill.
        BinaryOp::Shl | BinaryOp::ArithShl => left.shift_left(right),
        BinaryOp::Shr => left.logical_shift_right(right),
        BinaryOp::ArithShr => left.arith_shift_right(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slate_logic::Logic;

    #[test]
    fn arithmetic_dispatch() {
        let a = LogicVec::new(32, false, 7);
        let b = LogicVec::new(32, false, 2);
        assert_eq!(evaluate_binary(a, b, BinaryOp::Add).as_u64(), Some(9));
        assert_eq!(evaluate_binary(a, b, BinaryOp::Sub).as_u64(), Some(5));
        assert_eq!(evaluate_binary(a, b, BinaryOp::Mul).as_u64(), Some(14));
        assert_eq!(evaluate_binary(a, b, BinaryOp::Div).as_u64(), Some(3));
        assert_eq!(evaluate_binary(a, b, BinaryOp::Mod).as_u64(), Some(1));
    }

    #[test]
    fn equality_families_stay_distinct() {
        let u = LogicVec::from_bits(&[Logic::One, Logic::X]);
        assert_eq!(
            evaluate_binary(u, u, BinaryOp::Eq),
            LogicVec::from_logic(Logic::X)
        );
        assert_eq!(
            evaluate_binary(u, u, BinaryOp::CaseEq),
            LogicVec::from_bool(true)
        );
        assert_eq!(
            evaluate_binary(u, u, BinaryOp::CaseNotEq),
            LogicVec::from_bool(false)
        );
    }

    #[test]
    fn shift_dispatch() {
        let v = LogicVec::new(8, false, 0b0110);
        let two = LogicVec::new(8, false, 2);
        assert_eq!(evaluate_binary(v, two, BinaryOp::Shl).as_u64(), Some(0b011000));
        assert_eq!(
            evaluate_binary(v, two, BinaryOp::ArithShl).as_u64(),
            Some(0b011000)
        );
        assert_eq!(evaluate_binary(v, two, BinaryOp::Shr).as_u64(), Some(0b01));

        let neg = LogicVec::new(8, true, 0xF0);
        assert_eq!(
            evaluate_binary(neg, LogicVec::new(8, true, 2), BinaryOp::ArithShr).as_i64(),
            Some(-4)
        );
    }
}
