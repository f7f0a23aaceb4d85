//! Declaration symbols and the symbol table.
//!
//! Symbols are the pre-resolved identities elaboration hands to the
//! evaluator: a parameter carries the constant value computed for it at
//! elaboration time, a variable is a stable binding key, and a
//! subroutine exposes its ordered formals and body.

use std::fmt;

use crate::{ConstantValue, ExprId};

/// Index into the symbol table.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create a new `SymbolId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    /// Get the index into the table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// What a declaration is, and what the evaluator may ask of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// A parameter, bound once at elaboration time. References read the
    /// value stored here, never a per-frame binding.
    Parameter { value: ConstantValue },

    /// A local variable or formal argument. Its value lives in the frame
    /// of the invocation that bound it.
    Variable,

    /// A subroutine: ordered formal parameters plus a body node.
    /// The body starts out [`ExprId::INVALID`] and is patched in once
    /// elaboration finishes binding it (the body may refer back to this
    /// symbol for recursion).
    Subroutine {
        formals: Vec<SymbolId>,
        body: ExprId,
    },
}

/// A named declaration.
///
/// The name is carried for trace and test output only; identity is the
/// [`SymbolId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    name: Box<str>,
    kind: SymbolKind,
}

impl Symbol {
    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration kind.
    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }
}

/// Arena of declaration symbols for one elaborated design.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Add a parameter with its elaborated value.
    pub fn add_parameter(&mut self, name: &str, value: ConstantValue) -> SymbolId {
        self.add(name, SymbolKind::Parameter { value })
    }

    /// Add a variable (a local or formal argument).
    pub fn add_variable(&mut self, name: &str) -> SymbolId {
        self.add(name, SymbolKind::Variable)
    }

    /// Add a subroutine. The body is patched in later via
    /// [`SymbolTable::set_subroutine_body`] because it may refer back to
    /// this symbol.
    pub fn add_subroutine(&mut self, name: &str, formals: Vec<SymbolId>) -> SymbolId {
        self.add(
            name,
            SymbolKind::Subroutine {
                formals,
                body: ExprId::INVALID,
            },
        )
    }

    /// Attach the elaborated body to a subroutine symbol.
    ///
    /// # Panics
    /// If `id` does not name a subroutine.
    pub fn set_subroutine_body(&mut self, id: SymbolId, body: ExprId) {
        match self.symbols.get_mut(id.index()).map(|s| &mut s.kind) {
            Some(SymbolKind::Subroutine { body: slot, .. }) => *slot = body,
            _ => panic!("set_subroutine_body on a non-subroutine symbol {id:?}"),
        }
    }

    /// Look up a symbol.
    ///
    /// # Panics
    /// On an out-of-range id; ids are only minted by this table, so that
    /// is an internal-consistency violation.
    pub fn get(&self, id: SymbolId) -> &Symbol {
        match self.symbols.get(id.index()) {
            Some(symbol) => symbol,
            None => panic!("symbol id {id:?} does not belong to this table"),
        }
    }

    /// The parameter value recorded on a symbol, or `None` if the symbol
    /// is not a parameter.
    pub fn parameter_value(&self, id: SymbolId) -> Option<ConstantValue> {
        match self.get(id).kind() {
            SymbolKind::Parameter { value } => Some(*value),
            _ => None,
        }
    }

    /// A subroutine's formals and body, or `None` if the symbol is not a
    /// subroutine.
    pub fn subroutine(&self, id: SymbolId) -> Option<(&[SymbolId], ExprId)> {
        match self.get(id).kind() {
            SymbolKind::Subroutine { formals, body } => Some((formals.as_slice(), *body)),
            _ => None,
        }
    }

    fn add(&mut self, name: &str, kind: SymbolKind) -> SymbolId {
        let index = u32::try_from(self.symbols.len()).unwrap_or_else(|_| {
            panic!("symbol table overflow");
        });
        self.symbols.push(Symbol {
            name: name.into(),
            kind,
        });
        SymbolId::new(index)
    }
}
