//! Operator kinds for elaborated expressions.
//!
//! Only operators that can appear in a constant context survive
//! elaboration, so these enums are the closed dispatch sets of the
//! evaluator: adding a variant is a compile error at every match site.

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic identity: `+a`
    Plus,
    /// Arithmetic negation: `-a`
    Minus,
    /// Bitwise complement: `~a`
    BitNot,
    /// Reduction AND: `&a` (collapses the vector to one bit)
    ReductionAnd,
    /// Reduction OR: `|a`
    ReductionOr,
    /// Reduction XOR: `^a`
    ReductionXor,
    /// Reduction NAND: `~&a`
    ReductionNand,
    /// Reduction NOR: `~|a`
    ReductionNor,
    /// Reduction XNOR: `~^a`
    ReductionXnor,
    /// Logical NOT: `!a`
    LogicalNot,
}

impl UnaryOp {
    /// The source-level operator token, for trace and test output.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitNot => "~",
            Self::ReductionAnd => "&",
            Self::ReductionOr => "|",
            Self::ReductionXor => "^",
            Self::ReductionNand => "~&",
            Self::ReductionNor => "~|",
            Self::ReductionXnor => "~^",
            Self::LogicalNot => "!",
        }
    }
}

/// Binary operators.
///
/// The two equality families are distinct operators with different
/// semantics, not flavors of one comparison: logical equality is
/// four-state (X-propagating), case equality matches bit patterns
/// exactly and is always definite.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitXnor,

    // Equality
    Eq,
    NotEq,
    CaseEq,
    CaseNotEq,

    // Relational
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Shifts
    Shl,
    Shr,
    ArithShl,
    ArithShr,
}

impl BinaryOp {
    /// The source-level operator token, for trace and test output.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitXnor => "~^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::CaseEq => "===",
            Self::CaseNotEq => "!==",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::ArithShl => "<<<",
            Self::ArithShr => ">>>",
        }
    }
}

/// Assignment operators, simple and compound.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    ArithShlAssign,
    ArithShrAssign,
}

impl AssignOp {
    /// The binary operator a compound assignment applies before storing,
    /// or `None` for simple assignment.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOp::Add),
            Self::SubAssign => Some(BinaryOp::Sub),
            Self::MulAssign => Some(BinaryOp::Mul),
            Self::DivAssign => Some(BinaryOp::Div),
            Self::ModAssign => Some(BinaryOp::Mod),
            Self::AndAssign => Some(BinaryOp::BitAnd),
            Self::OrAssign => Some(BinaryOp::BitOr),
            Self::XorAssign => Some(BinaryOp::BitXor),
            Self::ShlAssign => Some(BinaryOp::Shl),
            Self::ShrAssign => Some(BinaryOp::Shr),
            Self::ArithShlAssign => Some(BinaryOp::ArithShl),
            Self::ArithShrAssign => Some(BinaryOp::ArithShr),
        }
    }

    /// The source-level operator token, for trace and test output.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::ArithShlAssign => "<<<=",
            Self::ArithShrAssign => ">>>=",
        }
    }
}
