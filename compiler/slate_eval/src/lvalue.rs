//! Writable references to frame storage.

use slate_ir::{ConstantValue, SymbolId};

use crate::frame::{FrameId, FrameStack};

/// A resolved, writable reference to one binding slot: the owning frame
/// plus the symbol key, never a raw address.
///
/// An `LValue` is transient. It does not own the slot; its validity is
/// bounded by the frame it points into and it must not be retained past
/// the evaluation step that produced it. Both accessors go through the
/// [`FrameStack`], so a handle can never outlive the storage it names
/// without tripping the internal-consistency check.
#[derive(Copy, Clone, Debug)]
pub struct LValue {
    frame: FrameId,
    symbol: SymbolId,
}

impl LValue {
    pub(crate) fn new(frame: FrameId, symbol: SymbolId) -> Self {
        LValue { frame, symbol }
    }

    /// Read the current value of the slot.
    pub fn load(self, frames: &FrameStack) -> ConstantValue {
        match frames.lookup(self.frame, self.symbol) {
            Some(value) => value,
            None => unreachable!("load through an lvalue whose binding disappeared"),
        }
    }

    /// Overwrite the slot.
    pub fn store(self, frames: &mut FrameStack, value: ConstantValue) {
        frames.store(self.frame, self.symbol, value);
    }
}
