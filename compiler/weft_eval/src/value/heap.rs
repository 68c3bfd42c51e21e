//! Heap wrapper for enforced shared allocation.
//!
//! The `Heap<T>` type wraps `Rc<T>` and provides the ONLY way to allocate
//! heap values in the resolved-value system. External code cannot call
//! `Heap::new()` directly since the constructor is `pub(super)` (visible
//! only within the value module).
//!
//! This ensures that all heap allocations go through the factory methods on
//! `ResolvedValue`, providing a single point of control for allocation.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A heap-allocated value wrapper.
///
/// This type enforces that all heap allocations in the value system go
/// through factory methods on `ResolvedValue`. The `new` constructor is
/// private to the value module, so external code must use
/// `ResolvedValue::string()`, `ResolvedValue::array()`, etc.
///
/// # Sharing
/// Uses `Rc` internally. Resolution is single-threaded and recursive, so
/// resolved values never cross threads; sharing a container between a spread
/// source and its copy is a reference-count bump, not a deep clone.
///
/// # Zero-Cost Abstraction
/// The `#[repr(transparent)]` attribute ensures this has the same memory
/// layout as `Rc<T>`, so there's no overhead from the wrapper.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated value.
    ///
    /// This is `pub(super)` - only visible within the value module.
    /// External code must use the factory methods on `ResolvedValue`.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles share the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
