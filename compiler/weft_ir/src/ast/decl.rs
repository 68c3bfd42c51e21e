//! Declaration nodes.
//!
//! Declarations are what symbols resolve to: variables, parameters,
//! callables, classes, import specifiers, export assignments, and whole
//! source units standing in for their module symbol. Each records its
//! enclosing unit, which reference lowering needs for path computation.

use std::fmt;

use crate::{DeclId, DeclRange, ExprId, MemberRange, Name, Span, Spanned, StmtRange, UnitId};

/// Declaration node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Decl {
    pub kind: DeclKind,
    /// `Name::EMPTY` = unnamed (default export forms, class expressions).
    pub name: Name,
    /// Enclosing compilation unit.
    pub unit: UnitId,
    pub span: Span,
}

impl Decl {
    pub fn new(kind: DeclKind, name: Name, unit: UnitId, span: Span) -> Self {
        Decl {
            kind,
            name,
            unit,
            span,
        }
    }

    /// Whether this declaration has a usable name identifier.
    #[inline]
    pub fn has_name(&self) -> bool {
        self.name != Name::EMPTY
    }
}

impl fmt::Debug for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.name, self.span)
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

/// Declaration variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// Variable declaration. `ExprId::INVALID` = no initializer.
    Var { init: ExprId },

    /// Formal parameter. `ExprId::INVALID` = no default.
    Param { default: ExprId },

    /// Function or method. `has_body = false` for overload signatures and
    /// ambient declares; `body` is meaningless then.
    Func {
        params: DeclRange,
        body: StmtRange,
        has_body: bool,
    },

    /// Class-like declaration with its member list.
    Class { members: MemberRange },

    /// Class property. `ExprId::INVALID` = no initializer.
    Prop { init: ExprId },

    /// Export assignment (`export = expr` / `export default expr`).
    ExportAssign { expr: ExprId },

    /// Import specifier; `module` is the interned module specifier text
    /// exactly as written (`"./util"`, `"pkg/sub"`).
    ImportSpec { module: Name },

    /// A source unit acting as its module symbol's declaration
    /// (namespace-style import target).
    Unit { unit: UnitId },

    /// Ambient declaration with no initializer or body.
    Ambient,
}

impl DeclKind {
    /// Short English description for error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Var { .. } => "a variable",
            Self::Param { .. } => "a parameter",
            Self::Func { .. } => "a function",
            Self::Class { .. } => "a class",
            Self::Prop { .. } => "a property",
            Self::ExportAssign { .. } => "an export assignment",
            Self::ImportSpec { .. } => "an import",
            Self::Unit { .. } => "a module",
            Self::Ambient => "an ambient declaration",
        }
    }
}

/// Class member: a declaration plus its placement modifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Member {
    pub decl: DeclId,
    pub is_static: bool,
}

impl Member {
    pub fn new(decl: DeclId, is_static: bool) -> Self {
        Member { decl, is_static }
    }
}
