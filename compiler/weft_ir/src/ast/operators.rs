//! Binary and unary operators.
//!
//! Operators split into two kinds for evaluation: *literal* operators coerce
//! their operands down to primitives before combining them, *reference*
//! operators pass operands through untouched and select one by truthiness.

/// Operand policy of a binary operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpKind {
    /// Operands are projected to literal primitives; containers and
    /// references are rejected.
    Literal,
    /// Operands pass through as whole resolved values.
    Reference,
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "**",
            // Comparison
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            // Bitwise
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            // Logical
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Operand policy: everything except `&&`/`||` is literal-kind.
    pub const fn kind(self) -> OpKind {
        match self {
            Self::And | Self::Or => OpKind::Reference,
            _ => OpKind::Literal,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Numeric negation: `-x`
    Neg,
    /// Numeric coercion: `+x`
    Pos,
    /// Logical not: `!x`
    Not,
    /// Bitwise not: `~x`
    BitNot,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }
}
