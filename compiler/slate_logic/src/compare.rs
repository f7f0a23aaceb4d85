//! Tri-state comparisons, case equality, and reduction operators.
//!
//! Two equality families exist and they are not variants of one another:
//!
//! - *Logical* equality (`==`/`!=` in source) is four-state: if either
//!   operand contains an X or Z bit the answer is [`Logic::X`].
//! - *Case* equality (`===`/`!==`) is an exact structural match of bit
//!   patterns including X/Z positions and always yields a definite
//!   boolean.

use crate::bit::Logic;
use crate::vec::LogicVec;

impl LogicVec {
    /// Four-state equality: `X` if either operand has unknown bits.
    pub fn logical_eq(self, rhs: Self) -> Logic {
        let (a, b) = Self::align(self, rhs);
        if a.has_unknown() || b.has_unknown() {
            return Logic::X;
        }
        Logic::from_bool(a.planes().0 == b.planes().0)
    }

    /// Four-state inequality: the complement of [`LogicVec::logical_eq`].
    pub fn logical_ne(self, rhs: Self) -> Logic {
        !self.logical_eq(rhs)
    }

    /// Exact structural equality including X/Z positions. Always definite.
    pub fn case_eq(self, rhs: Self) -> bool {
        let (a, b) = Self::align(self, rhs);
        a.planes() == b.planes()
    }

    /// Four-state `<`.
    pub fn less_than(self, rhs: Self) -> Logic {
        self.ordered(rhs, |ord| ord.is_lt())
    }

    /// Four-state `<=`.
    pub fn less_equal(self, rhs: Self) -> Logic {
        self.ordered(rhs, |ord| ord.is_le())
    }

    /// Four-state `>`.
    pub fn greater_than(self, rhs: Self) -> Logic {
        self.ordered(rhs, |ord| ord.is_gt())
    }

    /// Four-state `>=`.
    pub fn greater_equal(self, rhs: Self) -> Logic {
        self.ordered(rhs, |ord| ord.is_ge())
    }

    /// Relational core: unknown operands compare as `X`; otherwise the
    /// ordering is signed only when both operands are signed.
    fn ordered(self, rhs: Self, accept: fn(std::cmp::Ordering) -> bool) -> Logic {
        let (a, b) = Self::align(self, rhs);
        if a.has_unknown() || b.has_unknown() {
            return Logic::X;
        }
        let ordering = if a.is_signed() {
            a.signed_value().cmp(&b.signed_value())
        } else {
            a.planes().0.cmp(&b.planes().0)
        };
        Logic::from_bool(accept(ordering))
    }

    /// Reduction AND: `0` if any bit is a definite zero, `X` if any bit
    /// is unknown, `1` otherwise.
    pub fn reduction_and(self) -> Logic {
        let (val, xz) = self.planes();
        let mask = Self::plane_mask(self.width());
        if !val & !xz & mask != 0 {
            Logic::Zero
        } else if xz != 0 {
            Logic::X
        } else {
            Logic::One
        }
    }

    /// Reduction OR: `1` if any bit is a definite one, `X` if any bit is
    /// unknown, `0` otherwise.
    pub fn reduction_or(self) -> Logic {
        let (val, xz) = self.planes();
        if val & !xz != 0 {
            Logic::One
        } else if xz != 0 {
            Logic::X
        } else {
            Logic::Zero
        }
    }

    /// Reduction XOR: parity of the bits, `X` if any bit is unknown.
    pub fn reduction_xor(self) -> Logic {
        let (val, xz) = self.planes();
        if xz != 0 {
            Logic::X
        } else {
            Logic::from_bool(val.count_ones() % 2 == 1)
        }
    }

    /// Logical NOT of the whole vector: `X` when any bit is unknown,
    /// otherwise true exactly for the zero value.
    pub fn logical_not(self) -> Logic {
        if self.has_unknown() {
            Logic::X
        } else {
            Logic::from_bool(self.planes().0 == 0)
        }
    }

    /// Collapse to a definite branch decision: `true` only for a fully
    /// known, nonzero value. Ambiguous (X/Z-containing) values are false.
    pub fn truth(self) -> bool {
        !self.has_unknown() && self.planes().0 != 0
    }
}

#[cfg(test)]
mod tests {
    use crate::{Logic, LogicVec};
    use pretty_assertions::assert_eq;

    fn undef() -> LogicVec {
        LogicVec::from_bits(&[Logic::One, Logic::X, Logic::Zero, Logic::One])
    }

    #[test]
    fn logical_equality_is_ambiguous_on_unknowns() {
        let u = undef();
        assert_eq!(u.logical_eq(u), Logic::X);
        assert_eq!(u.logical_ne(u), Logic::X);
    }

    #[test]
    fn case_equality_is_exact_and_definite() {
        let u = undef();
        assert!(u.case_eq(u));
        let flipped = LogicVec::from_bits(&[Logic::One, Logic::Z, Logic::Zero, Logic::One]);
        assert!(!u.case_eq(flipped));
    }

    #[test]
    fn equality_families_agree_on_definite_values() {
        let a = LogicVec::new(8, false, 42);
        let b = LogicVec::new(8, false, 42);
        let c = LogicVec::new(8, false, 7);
        assert_eq!(a.logical_eq(b), Logic::One);
        assert!(a.case_eq(b));
        assert_eq!(a.logical_eq(c), Logic::Zero);
        assert!(!a.case_eq(c));
    }

    #[test]
    fn ordering_respects_signedness() {
        let neg = LogicVec::new(8, true, 0xFE); // -2
        let pos = LogicVec::new(8, true, 1);
        assert_eq!(neg.less_than(pos), Logic::One);
        // Same bit patterns, unsigned: 0xFE > 1.
        let raw = LogicVec::new(8, false, 0xFE);
        let one = LogicVec::new(8, false, 1);
        assert_eq!(raw.greater_than(one), Logic::One);
        assert_eq!(raw.less_equal(one), Logic::Zero);
        assert_eq!(one.greater_equal(one), Logic::One);
    }

    #[test]
    fn ordering_with_unknowns_is_x() {
        assert_eq!(undef().less_than(LogicVec::new(4, false, 9)), Logic::X);
    }

    #[test]
    fn reductions() {
        let ones = LogicVec::new(4, false, 0b1111);
        assert_eq!(ones.reduction_and(), Logic::One);
        assert_eq!(ones.reduction_or(), Logic::One);
        assert_eq!(ones.reduction_xor(), Logic::Zero);

        let mixed = LogicVec::new(4, false, 0b1010);
        assert_eq!(mixed.reduction_and(), Logic::Zero);
        assert_eq!(mixed.reduction_or(), Logic::One);
        assert_eq!(mixed.reduction_xor(), Logic::Zero);

        let odd = LogicVec::new(4, false, 0b0111);
        assert_eq!(odd.reduction_xor(), Logic::One);
    }

    #[test]
    fn reductions_with_unknowns() {
        // A definite 0 dominates reduction AND even next to an X.
        let with_zero = LogicVec::from_bits(&[Logic::Zero, Logic::X]);
        assert_eq!(with_zero.reduction_and(), Logic::Zero);
        // A definite 1 dominates reduction OR.
        let with_one = LogicVec::from_bits(&[Logic::One, Logic::X]);
        assert_eq!(with_one.reduction_or(), Logic::One);
        // No dominating bit: the unknown wins.
        let all_ones_and_x = LogicVec::from_bits(&[Logic::One, Logic::X]);
        assert_eq!(all_ones_and_x.reduction_and(), Logic::X);
        let all_zeros_and_z = LogicVec::from_bits(&[Logic::Zero, Logic::Z]);
        assert_eq!(all_zeros_and_z.reduction_or(), Logic::X);
        assert_eq!(undef().reduction_xor(), Logic::X);
    }

    #[test]
    fn truth_collapse() {
        assert!(LogicVec::new(8, false, 3).truth());
        assert!(!LogicVec::new(8, false, 0).truth());
        assert!(!undef().truth());
        assert!(!LogicVec::all_x(8).truth());
    }

    #[test]
    fn logical_not_table() {
        assert_eq!(LogicVec::new(8, false, 0).logical_not(), Logic::One);
        assert_eq!(LogicVec::new(8, false, 5).logical_not(), Logic::Zero);
        assert_eq!(undef().logical_not(), Logic::X);
    }

    // === Property tests ===

    #[allow(
        clippy::ignored_unit_patterns,
        reason = "proptest macro expansion"
    )]
    mod properties {
        use super::super::LogicVec;
        use crate::Logic;
        use proptest::prelude::*;

        fn arb_logic() -> impl Strategy<Value = Logic> {
            prop_oneof![
                Just(Logic::Zero),
                Just(Logic::One),
                Just(Logic::X),
                Just(Logic::Z),
            ]
        }

        fn arb_vec() -> impl Strategy<Value = LogicVec> {
            proptest::collection::vec(arb_logic(), 1..=64).prop_map(|bits| LogicVec::from_bits(&bits))
        }

        proptest! {
            #[test]
            fn reduction_de_morgan(v in arb_vec()) {
                // OR over the bits is the complement of AND over the
                // complemented bits, in four-state as in boolean.
                prop_assert_eq!(v.reduction_or(), !(!v).reduction_and());
                prop_assert_eq!(v.reduction_and(), !(!v).reduction_or());
            }

            #[test]
            fn case_equality_is_reflexive(v in arb_vec()) {
                prop_assert!(v.case_eq(v));
            }

            #[test]
            fn logical_eq_matches_case_eq_when_definite(a in any::<u32>(), b in any::<u32>()) {
                let av = LogicVec::new(32, false, u64::from(a));
                let bv = LogicVec::new(32, false, u64::from(b));
                prop_assert_eq!(av.logical_eq(bv).truth(), av.case_eq(bv));
            }

            #[test]
            fn logical_eq_diverges_from_case_eq_on_unknowns(bits in proptest::collection::vec(arb_logic(), 1..=16)) {
                let v = LogicVec::from_bits(&bits);
                prop_assume!(v.has_unknown());
                prop_assert_eq!(v.logical_eq(v), Logic::X);
                prop_assert!(v.case_eq(v));
            }

            #[test]
            fn addition_matches_wrapping_u64(a in any::<u64>(), b in any::<u64>()) {
                let sum = LogicVec::from_u64(a) + LogicVec::from_u64(b);
                prop_assert_eq!(sum.as_u64(), Some(a.wrapping_add(b)));
            }
        }

    }
}
