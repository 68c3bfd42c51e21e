//! Diagnostic types for the weft static resolver.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//!
//! Rendering is a host concern; this crate only models diagnostics as
//! values.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
