//! Statement nodes.
//!
//! The evaluator only ever inlines single-return function bodies, so the
//! statement model is deliberately thin: a return, or anything else.

use std::fmt;

use crate::{ExprId, Span, Spanned};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Return statement. `ExprId::INVALID` = bare `return;`.
    Return(ExprId),

    /// Any statement the evaluator does not model (assignments, loops,
    /// conditionals, nested declarations). Its presence in a function body
    /// makes that body uninlinable.
    Other,
}
