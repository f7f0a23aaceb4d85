//! Call frames for constant evaluation.
//!
//! Every subroutine invocation owns one [`Frame`]: the bindings of its
//! formal arguments and locals. Frames live in an explicit owned stack
//! ([`FrameStack`]) with parent-index links rather than being tied to
//! the native call stack, so the current frame is plain data and
//! failure paths restore it deterministically.
//!
//! Lookups consult a single frame only - a callee never sees its
//! caller's locals. The parent link exists to restore the current frame
//! on pop.

use rustc_hash::FxHashMap;

use slate_ir::{ConstantValue, SymbolId};

/// Index into the frame stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct FrameId(u32);

impl FrameId {
    /// The root frame of every evaluator.
    pub const ROOT: FrameId = FrameId(0);

    #[inline]
    const fn new(index: u32) -> Self {
        FrameId(index)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bindings for one invocation (or the top-level context).
#[derive(Debug, Default)]
struct Frame {
    /// Values bound to declaration symbols in this invocation.
    bindings: FxHashMap<SymbolId, ConstantValue>,
    /// The invoking frame; `None` only for the root.
    parent: Option<FrameId>,
}

/// An owned stack of call frames with an explicit current-frame pointer.
///
/// `push` activates a fresh frame linked to the current one; `pop`
/// drops the active frame's bindings and reverts to its parent. The
/// stack is strictly LIFO, mirroring the call chain of the expression
/// being evaluated.
#[derive(Debug)]
pub struct FrameStack {
    frames: Vec<Frame>,
    current: FrameId,
}

impl FrameStack {
    /// A stack holding only the root frame.
    pub fn new() -> Self {
        FrameStack {
            frames: vec![Frame::default()],
            current: FrameId::ROOT,
        }
    }

    /// The active frame.
    #[inline]
    pub fn current(&self) -> FrameId {
        self.current
    }

    /// Number of live frames, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Activate a fresh frame whose parent is the current frame.
    pub fn push(&mut self) -> FrameId {
        let index = u32::try_from(self.frames.len()).unwrap_or_else(|_| {
            panic!("frame stack overflow");
        });
        self.frames.push(Frame {
            bindings: FxHashMap::default(),
            parent: Some(self.current),
        });
        self.current = FrameId::new(index);
        self.current
    }

    /// Drop the active frame and its bindings, reverting to the parent.
    ///
    /// # Panics
    /// If the active frame is the root; the root lives as long as the
    /// evaluator.
    pub fn pop(&mut self) {
        let parent = match self.frames[self.current.index()].parent {
            Some(parent) => parent,
            None => panic!("cannot pop the root frame"),
        };
        self.frames.truncate(self.current.index());
        self.current = parent;
    }

    /// Bind a symbol in the current frame.
    ///
    /// A symbol may be bound at most once per frame; rebinding is a
    /// programmer error in the caller, not a runtime condition.
    pub fn bind(&mut self, symbol: SymbolId, value: ConstantValue) {
        let frame = &mut self.frames[self.current.index()];
        let previous = frame.bindings.insert(symbol, value);
        debug_assert!(
            previous.is_none(),
            "symbol {symbol:?} bound twice in one frame"
        );
    }

    /// Read a binding from one specific frame. No parent chaining.
    pub fn lookup(&self, frame: FrameId, symbol: SymbolId) -> Option<ConstantValue> {
        self.frames[frame.index()].bindings.get(&symbol).copied()
    }

    /// Overwrite an existing binding in one specific frame.
    pub(crate) fn store(&mut self, frame: FrameId, symbol: SymbolId, value: ConstantValue) {
        match self.frames[frame.index()].bindings.get_mut(&symbol) {
            Some(slot) => *slot = value,
            None => unreachable!("store through an lvalue whose binding disappeared"),
        }
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slate_logic::LogicVec;

    fn value(n: u64) -> ConstantValue {
        ConstantValue::from(LogicVec::from_u64(n))
    }

    #[test]
    fn bind_then_lookup_in_current_frame() {
        let mut stack = FrameStack::new();
        let x = SymbolId::new(0);
        stack.bind(x, value(42));
        assert_eq!(stack.lookup(stack.current(), x), Some(value(42)));
    }

    #[test]
    fn frames_do_not_chain_lookups() {
        let mut stack = FrameStack::new();
        let x = SymbolId::new(0);
        stack.bind(x, value(1));

        stack.push();
        // The callee frame does not see the caller's binding.
        assert_eq!(stack.lookup(stack.current(), x), None);

        stack.bind(x, value(2));
        assert_eq!(stack.lookup(stack.current(), x), Some(value(2)));

        stack.pop();
        assert_eq!(stack.lookup(stack.current(), x), Some(value(1)));
    }

    #[test]
    fn pop_drops_bindings_with_the_frame() {
        let mut stack = FrameStack::new();
        let x = SymbolId::new(7);

        let callee = stack.push();
        stack.bind(x, value(9));
        stack.pop();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), FrameId::ROOT);
        // The callee's storage is gone, not merely shadowed.
        assert_eq!(callee.index(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot pop the root frame")]
    fn root_frame_cannot_pop() {
        FrameStack::new().pop();
    }

    #[test]
    fn store_overwrites_in_place() {
        let mut stack = FrameStack::new();
        let x = SymbolId::new(3);
        stack.bind(x, value(1));
        stack.store(FrameId::ROOT, x, value(5));
        assert_eq!(stack.lookup(FrameId::ROOT, x), Some(value(5)));
    }
}
