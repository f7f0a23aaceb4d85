//! Cross-cutting evaluator tests.
//!
//! Fixtures build small elaborated trees by hand: a `SymbolTable` plus
//! an `ExprArena`, evaluated by a fresh `Evaluator`. The 32-bit
//! unsigned shapes below match what elaboration produces for plain
//! integer contexts.


use slate_ir::{ConstantValue, ExprArena, ExprId};
use slate_logic::LogicVec;

/// A 32-bit unsigned literal node.
fn lit(arena: &mut ExprArena, value: u64) -> ExprId {
    arena.literal(LogicVec::new(32, false, value))
}

/// A 32-bit unsigned constant value.
fn int(value: u64) -> ConstantValue {
    ConstantValue::from(LogicVec::new(32, false, value))
}
