//! Flat AST types using arena allocation.
//!
//! - No `Box<Expr>`, use `ExprId(u32)` indices
//! - Contiguous arrays for cache locality
//! - All node types are `Copy` with `Eq` + `Hash`
//!
//! # Module Structure
//!
//! - `expr`: Expression nodes and object/array literal parts
//! - `decl`: Declarations and class members
//! - `stmt`: Statements (return / other)
//! - `operators`: Binary and unary operators

mod decl;
mod expr;
mod operators;
mod stmt;

pub use decl::{Decl, DeclKind, Member};
pub use expr::{Element, Expr, ExprKind, Prop, PropKey};
pub use operators::{BinaryOp, OpKind, UnaryOp};
pub use stmt::{Stmt, StmtKind};
