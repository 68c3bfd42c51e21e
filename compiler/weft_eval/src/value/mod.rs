//! Resolved values produced by static evaluation.
//!
//! # Heap Enforcement Architecture
//!
//! This module enforces that all heap allocations go through factory methods
//! on `ResolvedValue`. The `Heap<T>` wrapper type has a private constructor,
//! so external code cannot create heap values directly.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = ResolvedValue::string("hello");      // OK
//! let a = ResolvedValue::array(vec![]);        // OK
//! let m = ResolvedValue::map(OrderedMap::new()); // OK
//! ```
//!
//! ## Prevented (Won't Compile)
//!
//! ```text
//! let s = ResolvedValue::Str(Heap::new(...));  // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Sharing
//!
//! Heap values use `Rc` internally. Resolution is single-threaded, and once
//! constructed a value is never mutated, so spreads and repeated symbol
//! resolutions share containers instead of deep-copying them.

mod heap;
mod map;
#[cfg(test)]
mod tests;

pub use heap::Heap;
pub use map::OrderedMap;

use crate::reference::Reference;

/// A value an expression statically resolves to.
///
/// `Dynamic` is the escape hatch: it means "not statically knowable" and is
/// an ordinary `Ok` outcome, not an error. Every operation that consumes a
/// `Dynamic` operand produces `Dynamic` in turn, so dynamism poisons exactly
/// the results that depend on it.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedValue {
    // Primitives (inline, no heap allocation)
    /// Floating-point number. Integer results are represented exactly.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// The null literal.
    Null,
    /// The undefined value.
    Undefined,

    // Containers (use Heap<T> for enforced factory construction)
    /// String value.
    Str(Heap<String>),
    /// Array of values.
    Array(Heap<Vec<ResolvedValue>>),
    /// String-keyed map preserving insertion order.
    Map(Heap<OrderedMap>),

    /// A named declaration that evaluation stopped at.
    ///
    /// Functions, classes, and unbound parameters resolve to references
    /// rather than values; callers can lower them back into expressions.
    Ref(Reference),

    /// Not statically knowable.
    Dynamic,
}

// Factory Methods (ONLY way to construct heap values)

impl ResolvedValue {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        ResolvedValue::Str(Heap::new(s.into()))
    }

    /// Create an array value.
    #[inline]
    pub fn array(items: Vec<ResolvedValue>) -> Self {
        ResolvedValue::Array(Heap::new(items))
    }

    /// Create a map value.
    #[inline]
    pub fn map(entries: OrderedMap) -> Self {
        ResolvedValue::Map(Heap::new(entries))
    }
}

// Value Methods

impl ResolvedValue {
    /// Check if this value is the `Dynamic` sentinel.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, ResolvedValue::Dynamic)
    }

    /// Check if this value is truthy.
    ///
    /// Containers and references are always truthy. Callers are expected to
    /// test [`is_dynamic`](Self::is_dynamic) before asking; `Dynamic` reports
    /// truthy here only so the catch-all stays total.
    pub fn is_truthy(&self) -> bool {
        match self {
            ResolvedValue::Bool(b) => *b,
            ResolvedValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ResolvedValue::Str(s) => !s.is_empty(),
            ResolvedValue::Null | ResolvedValue::Undefined => false,
            _ => true,
        }
    }

    /// Try to view as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResolvedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to view as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ResolvedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to view as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResolvedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResolvedValue::Number(_) => "number",
            ResolvedValue::Bool(_) => "boolean",
            ResolvedValue::Null => "null",
            ResolvedValue::Undefined => "undefined",
            ResolvedValue::Str(_) => "string",
            ResolvedValue::Array(_) => "array",
            ResolvedValue::Map(_) => "map",
            ResolvedValue::Ref(_) => "reference",
            ResolvedValue::Dynamic => "dynamic",
        }
    }
}
