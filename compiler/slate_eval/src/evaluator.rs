//! The recursive constant expression evaluator.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use slate_ir::{
    AssignOp, BinaryOp, ConstantValue, ExprArena, ExprId, ExprKind, ExprRange, SymbolTable,
    SymbolId, UnaryOp,
};
use slate_logic::LogicVec;

use crate::frame::FrameStack;
use crate::limits::EvalLimits;
use crate::lvalue::LValue;
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;

/// Compile-time constant expression evaluator.
///
/// One evaluator owns one frame chain and runs one evaluation at a time
/// to completion; for concurrent constant evaluation, create one
/// evaluator per evaluation - frames are never shared.
///
/// The evaluator is pure with respect to the tree (nodes are never
/// mutated) and impure with respect to its frames: variable reads,
/// assignments, and call entry/exit all go through the active frame.
///
/// # Failure channels
///
/// Expected failures - invalid input nodes, unresolvable assignment
/// targets, any operand that is itself not a constant - propagate as
/// [`ConstantValue::Empty`]. Operator/node combinations that elaboration
/// guarantees cannot reach this code panic instead: those are compiler
/// bugs, and mapping them to `Empty` would bury the defect.
pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
    arena: &'a ExprArena,
    frames: FrameStack,
    limits: EvalLimits,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over one elaborated design.
    pub fn new(symbols: &'a SymbolTable, arena: &'a ExprArena) -> Self {
        Evaluator {
            symbols,
            arena,
            frames: FrameStack::new(),
            limits: EvalLimits::default(),
        }
    }

    /// Replace the default resource limits.
    #[must_use]
    pub fn with_limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Seed a binding in the current frame, the way call evaluation
    /// binds formal arguments. Drivers use this to prepare locals before
    /// evaluating assignments that target them.
    pub fn bind(&mut self, symbol: SymbolId, value: ConstantValue) {
        self.frames.bind(symbol, value);
    }

    /// The frame stack, exposed for inspection.
    pub fn frames(&self) -> &FrameStack {
        &self.frames
    }

    /// Evaluate a node to a constant value.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn evaluate(&mut self, expr: ExprId) -> ConstantValue {
        ensure_sufficient_stack(|| match self.arena.get(expr).kind {
            ExprKind::Literal(value) => value,
            ExprKind::Parameter(symbol) => self.eval_parameter(symbol),
            ExprKind::Variable(symbol) => self.eval_variable(symbol),
            ExprKind::Unary { op, operand } => self.eval_unary(op, operand),
            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right),
            ExprKind::Assignment { op, lhs, rhs } => self.eval_assignment(op, lhs, rhs),
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => self.eval_conditional(cond, then_expr, else_expr),
            ExprKind::Call { subroutine, args } => self.eval_call(subroutine, args),
            ExprKind::StatementList(stmts) => self.eval_statement_list(stmts),
            ExprKind::Return(expr) => self.evaluate(expr),
            ExprKind::Invalid => ConstantValue::Empty,
        })
    }

    /// Evaluate a node as a branch condition.
    ///
    /// Four-state truth collapses to a definite boolean: `Empty` and any
    /// X/Z-containing value are `false`. Condition contexts prefer a
    /// silent `false` over a cascading failure, and generate-condition
    /// handling depends on this exact collapse.
    pub fn evaluate_bool(&mut self, expr: ExprId) -> bool {
        self.evaluate(expr).truth()
    }

    /// Evaluate to an integer, or `None` if the operand is not a
    /// constant. The `?`-friendly spelling every operand check uses.
    fn eval_integer(&mut self, expr: ExprId) -> Option<LogicVec> {
        self.evaluate(expr).integer()
    }

    fn eval_parameter(&mut self, symbol: SymbolId) -> ConstantValue {
        // Parameters are bound once at elaboration time, on the symbol
        // itself; they never live in a frame.
        match self.symbols.parameter_value(symbol) {
            Some(value) => value,
            None => unreachable!(
                "`{}` resolved as a parameter reference but is not a parameter",
                self.symbols.get(symbol).name()
            ),
        }
    }

    fn eval_variable(&mut self, symbol: SymbolId) -> ConstantValue {
        match self.frames.lookup(self.frames.current(), symbol) {
            Some(value) => value,
            None => panic!(
                "variable `{}` read before being bound; elaboration guarantees \
                 arguments and locals are bound before first read",
                self.symbols.get(symbol).name()
            ),
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: ExprId) -> ConstantValue {
        let Some(operand) = self.eval_integer(operand) else {
            return ConstantValue::Empty;
        };
        evaluate_unary(operand, op).into()
    }

    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ConstantValue {
        // Operand order is observable through assignment side effects:
        // left evaluates fully before right.
        let Some(left) = self.eval_integer(left) else {
            return ConstantValue::Empty;
        };
        let Some(right) = self.eval_integer(right) else {
            return ConstantValue::Empty;
        };
        evaluate_binary(left, right, op).into()
    }

    fn eval_assignment(&mut self, op: AssignOp, lhs: ExprId, rhs: ExprId) -> ConstantValue {
        let Some(lvalue) = self.resolve_lvalue(lhs) else {
            return ConstantValue::Empty;
        };
        let rvalue = self.evaluate(rhs);
        match op.binary_op() {
            // Simple assignment stores the right-hand value as-is, Empty
            // included: assigning a non-constant makes the slot
            // non-constant.
            None => lvalue.store(&mut self.frames, rvalue),
            Some(combine) => {
                // Compound forms re-read the target through a fresh
                // evaluation of the left-hand expression, not through
                // the resolved handle's snapshot.
                let Some(current) = self.eval_integer(lhs) else {
                    return ConstantValue::Empty;
                };
                let Some(rvalue) = rvalue.integer() else {
                    return ConstantValue::Empty;
                };
                lvalue.store(
                    &mut self.frames,
                    evaluate_binary(current, rvalue, combine).into(),
                );
            }
        }
        // Assignment is itself an expression: it yields whatever the
        // lvalue holds after the store.
        lvalue.load(&self.frames)
    }

    fn eval_conditional(
        &mut self,
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    ) -> ConstantValue {
        // Branch-condition truth collapse: an ambiguous or non-constant
        // condition selects the else branch.
        if self.evaluate_bool(cond) {
            self.evaluate(then_expr)
        } else {
            self.evaluate(else_expr)
        }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn eval_call(&mut self, subroutine: SymbolId, args: ExprRange) -> ConstantValue {
        let symbols = self.symbols;
        let Some((formals, body)) = symbols.subroutine(subroutine) else {
            unreachable!(
                "call target `{}` is not a subroutine",
                symbols.get(subroutine).name()
            )
        };
        assert!(
            body.is_valid(),
            "subroutine `{}` has no elaborated body",
            symbols.get(subroutine).name()
        );
        let arena = self.arena;
        let args = arena.list(args);
        debug_assert_eq!(
            formals.len(),
            args.len(),
            "elaboration matches arguments to formals"
        );

        if self.frames.depth() > self.limits.max_call_depth {
            tracing::warn!(
                subroutine = symbols.get(subroutine).name(),
                depth = self.frames.depth(),
                "call depth limit exceeded; treating the call as non-constant"
            );
            return ConstantValue::Empty;
        }

        // Evaluate every argument in the caller's frame before the
        // callee frame exists: the callee's bindings must not be visible
        // while its own arguments are still being computed.
        let mut bindings: SmallVec<[(SymbolId, ConstantValue); 8]> = SmallVec::new();
        for (&formal, &arg) in formals.iter().zip(args) {
            bindings.push((formal, self.evaluate(arg)));
        }

        // Only now does the callee frame become current. The guard pops
        // it on every exit path, early returns and panics included.
        let mut callee = self.enter_frame();
        for (formal, value) in bindings {
            callee.frames.bind(formal, value);
        }
        callee.evaluate(body)
    }

    fn eval_statement_list(&mut self, stmts: ExprRange) -> ConstantValue {
        // Only the first statement is threaded through this path; bodies
        // with multiple effectful statements before their return are not
        // yet sequenced.
        match self.arena.list(stmts).first() {
            Some(&stmt) => self.evaluate(stmt),
            None => ConstantValue::Empty,
        }
    }

    /// Resolve an expression to a writable location in the current frame.
    ///
    /// Only a variable reference can produce an lvalue at this stage.
    /// A variable with no existing binding yields `None` - writing to an
    /// unbound variable is not a declare-on-first-write path - and so
    /// does an invalid node. Anything else reaching here is an
    /// elaboration bug.
    fn resolve_lvalue(&mut self, expr: ExprId) -> Option<LValue> {
        match self.arena.get(expr).kind {
            ExprKind::Variable(symbol) => {
                let frame = self.frames.current();
                self.frames.lookup(frame, symbol)?;
                Some(LValue::new(frame, symbol))
            }
            ExprKind::Invalid => None,
            kind => unreachable!("expression kind {kind:?} cannot be an assignment target"),
        }
    }

    /// Push a frame and return a guard that pops it on drop.
    fn enter_frame(&mut self) -> FrameGuard<'_, 'a> {
        self.frames.push();
        FrameGuard { evaluator: self }
    }
}

/// RAII guard for one call frame.
///
/// Derefs to the evaluator so call evaluation reads naturally; dropping
/// the guard pops the frame, so the caller's frame is restored on every
/// exit path, including unwinding.
struct FrameGuard<'guard, 'a> {
    evaluator: &'guard mut Evaluator<'a>,
}

impl Drop for FrameGuard<'_, '_> {
    fn drop(&mut self) {
        self.evaluator.frames.pop();
    }
}

impl<'a> Deref for FrameGuard<'_, 'a> {
    type Target = Evaluator<'a>;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for FrameGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}
