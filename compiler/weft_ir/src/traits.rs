//! Focused traits for interface segregation.
//!
//! Each trait provides one capability so consumers do not depend on
//! methods they never call.

use crate::{Name, Span};

/// Trait for types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Trait for types that have a name.
pub trait Named {
    /// Get the name.
    fn name(&self) -> Name;
}
