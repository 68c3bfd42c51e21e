//! Weft IR - syntax substrate for static resolution.
//!
//! This crate contains the data structures the static resolver operates
//! over:
//! - Spans for source locations
//! - Names for interned identifiers, literals, and unit paths
//! - AST nodes (Expr, Decl, Stmt) with arena allocation
//! - Symbols as served by a host symbol table
//!
//! # Design Philosophy
//!
//! - **Intern everything**: strings become `Name(u32)`
//! - **Flatten everything**: no `Box<Expr>`, children are `ExprId(u32)`
//!   indices and `{start, len}` ranges into side tables
//! - **Host builds, resolver reads**: the arena is write-once input; the
//!   resolver never mutates it
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
mod span;
mod symbol;
mod traits;
mod unit;

pub use arena::SyntaxArena;
pub use ast::{
    BinaryOp, Decl, DeclKind, Element, Expr, ExprKind, Member, OpKind, Prop, PropKey, Stmt,
    StmtKind, UnaryOp,
};
pub use ids::{
    DeclId, DeclRange, ElementRange, ExprId, ExprRange, MemberRange, PropRange, StmtRange,
    SymbolId, UnitId,
};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use symbol::{Symbol, SymbolFlags};
pub use traits::{Named, Spanned};
pub use unit::SourceUnit;
