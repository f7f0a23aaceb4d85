//! Slate Eval - Compile-time constant expression evaluation.
//!
//! Given an elaborated (symbol-resolved, type-checked) expression tree,
//! this crate computes the value the expression would have at compile
//! time: parameter defaults, generate-block conditions, array bounds.
//!
//! # Architecture
//!
//! - [`Evaluator`]: the recursive dispatcher over node kinds, owning
//!   the active frame chain
//! - [`FrameStack`]: explicit owned call frames with parent links
//! - [`LValue`]: resolved write targets for assignment expressions
//! - [`evaluate_binary`] / [`evaluate_unary`]: direct enum-based
//!   operator dispatch
//!
//! Evaluation of one expression runs to completion before another may
//! begin on the same evaluator; for parallel constant evaluation, use
//! one evaluator per expression.
//!
//! # Re-exports
//!
//! Value and tree types are re-exported from `slate_ir` and
//! `slate_logic` for convenience: [`ConstantValue`], [`Logic`],
//! [`LogicVec`].

mod evaluator;
mod frame;
mod limits;
mod lvalue;
mod operators;
mod stack;
mod unary_operators;

#[cfg(test)]
mod tests;

pub use evaluator::Evaluator;
pub use frame::{FrameId, FrameStack};
pub use limits::{EvalLimits, DEFAULT_MAX_CALL_DEPTH};
pub use lvalue::LValue;
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;

// Re-export the value types evaluation produces.
pub use slate_ir::ConstantValue;
pub use slate_logic::{Logic, LogicVec};
