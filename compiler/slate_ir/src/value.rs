//! Result values of constant evaluation.

use std::fmt;

use slate_logic::LogicVec;

/// The value of a compile-time constant expression.
///
/// `Empty` is the propagation sentinel: it means "not a valid constant"
/// and flows through every evaluation path without faulting. Whether an
/// `Empty` result becomes a user-visible diagnostic is the caller's
/// decision; nothing in the evaluator reports it.
///
/// This is an explicit two-variant type rather than a nullable value so
/// that propagation is enforced by exhaustive matching, not convention.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ConstantValue {
    /// Evaluation failed or an invalid node was reached.
    #[default]
    Empty,
    /// A four-state integer value.
    Integer(LogicVec),
}

impl ConstantValue {
    /// Returns `true` for the propagation sentinel.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, ConstantValue::Empty)
    }

    /// The integer payload, or `None` for `Empty`.
    #[inline]
    pub const fn integer(self) -> Option<LogicVec> {
        match self {
            ConstantValue::Empty => None,
            ConstantValue::Integer(value) => Some(value),
        }
    }

    /// Collapse to a branch decision. `Empty` and any X/Z-containing
    /// value are `false`; only a fully known, nonzero integer is `true`.
    ///
    /// Condition contexts deliberately favor a silent `false` over a
    /// cascading failure; generate-condition handling elsewhere in the
    /// compiler depends on this exact collapse.
    #[inline]
    pub fn truth(self) -> bool {
        match self {
            ConstantValue::Empty => false,
            ConstantValue::Integer(value) => value.truth(),
        }
    }
}

impl From<LogicVec> for ConstantValue {
    #[inline]
    fn from(value: LogicVec) -> Self {
        ConstantValue::Integer(value)
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Empty => write!(f, "(empty)"),
            ConstantValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantValue({self})")
    }
}
