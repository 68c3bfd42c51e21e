//! Expression nodes.
//!
//! All children are indices into the arena, not boxes. Nodes are `Copy` and
//! hashable; float literals store their bit pattern so `Eq`/`Hash` hold.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{DeclId, ElementRange, ExprId, ExprRange, Name, PropRange, Span, Spanned};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
///
/// The evaluator has one rule per variant; shapes it does not recognize
/// (`Template`, `New`, `Error`) degrade to the dynamic sentinel rather than
/// erroring.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// Numeric literal: `42`, `2.5e-8` (f64 stored as bits for Hash)
    Number(u64),

    /// String literal (interned)
    String(Name),

    /// Identifier reference
    Ident(Name),

    /// Object literal: `{a: 1, ...rest}`
    Object(PropRange),

    /// Array literal: `[1, ...rest]`
    Array(ElementRange),

    /// Property access: `target.name`
    PropertyAccess { target: ExprId, name: Name },

    /// Indexed access: `target[index]`
    IndexAccess { target: ExprId, index: ExprId },

    /// Call: `callee(args...)`
    Call { callee: ExprId, args: ExprRange },

    /// Conditional: `cond ? when_true : when_false`
    Conditional {
        cond: ExprId,
        when_true: ExprId,
        when_false: ExprId,
    },

    /// Prefix unary operation: `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Parenthesized expression: `(inner)`
    Paren(ExprId),

    /// Type assertion wrapper: `inner as T`
    TypeAssertion(ExprId),

    /// Non-null assertion wrapper: `inner!`
    NonNullAssertion(ExprId),

    /// Class declaration in expression position
    ClassExpr(DeclId),

    /// Template literal with interpolations (not statically evaluated)
    Template(ExprRange),

    /// Construction: `new callee(args...)` (not statically evaluated)
    New { callee: ExprId, args: ExprRange },

    /// Placeholder for malformed input (not statically evaluated)
    Error,
}

/// Object literal property key.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropKey {
    /// Identifier key: `{a: ...}`
    Ident(Name),
    /// String literal key: `{"a": ...}`
    String(Name),
    /// Numeric literal key: `{1: ...}` (f64 stored as bits)
    Number(u64),
    /// Computed key: `{[expr]: ...}`
    Computed(ExprId),
}

/// Object literal property.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Prop {
    /// `key: value`
    KeyValue { key: PropKey, value: ExprId },
    /// Shorthand `{name}`; carries the identifier expression so the host
    /// can serve its value symbol.
    Shorthand { ident: ExprId },
    /// `...expr`
    Spread { expr: ExprId },
}

/// Array literal element.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Element {
    /// Plain element.
    Item(ExprId),
    /// `...expr`
    Spread(ExprId),
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Expr, ExprKind};
    crate::static_assert_size!(ExprKind, 16);
    crate::static_assert_size!(Expr, 24);
}
