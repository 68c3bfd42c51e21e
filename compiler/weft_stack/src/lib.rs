//! Stack safety utilities for deep recursion.
//!
//! Static resolution recurses over expression trees whose depth is controlled
//! by user input, so a pathological tree can exhaust the thread stack. This
//! crate grows the stack on demand instead of imposing a depth limit.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Usage
//!
//! Wrap recursive calls that could overflow with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval(&self, expr: ExprId, ctx: &Context) -> ResolveResult {
//!     ensure_sufficient_stack(|| {
//!         // ... recursive evaluation logic ...
//!     })
//! }
//! ```
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (100KB red zone).
///
/// If less than this amount remains, we'll grow the stack.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
///
/// Each growth allocates this much additional stack space.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, this will
/// allocate additional stack space before calling `f`. This prevents
/// stack overflow in deeply recursive code paths.
///
/// # Platform Behavior
///
/// - **Native**: Uses `stacker::maybe_grow` to dynamically grow the stack
/// - **WASM**: Simply calls `f()` directly (WASM manages its own stack)
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_recursion() {
        fn sum(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { sum(n - 1) + n })
        }

        assert_eq!(sum(10), 55);
    }

    #[test]
    fn deep_recursion() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        // Deep enough to overflow a default 8MB thread stack without growth.
        assert_eq!(depth(100_000), 100_000);
    }

    #[test]
    fn returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| "grown"), "grown");
    }

    #[test]
    fn propagates_result_values() {
        let ok: Result<u32, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(ok, Ok(7));
    }
}
