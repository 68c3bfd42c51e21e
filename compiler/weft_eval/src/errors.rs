//! Error types for static resolution.
//!
//! Static resolution has two failure channels. Most of the time an expression
//! that cannot be resolved simply evaluates to [`ResolvedValue::Dynamic`] and
//! the caller falls back to runtime behavior. A small set of conditions are
//! instead *hard* errors: the expression is within the supported subset but
//! names something that provably does not exist (a missing map key, an
//! out-of-range index) or misuses a value in a way no runtime could repair.
//! Those produce a [`ResolutionError`].
//!
//! Factory functions (e.g. [`missing_key`]) are the only way errors are
//! constructed inside the resolver; they populate the structured `kind` so
//! hosts can match on error categories without string parsing.
//!
//! [`ResolvedValue::Dynamic`]: crate::ResolvedValue::Dynamic

use std::fmt;

use weft_diagnostic::{Diagnostic, ErrorCode};
use weft_ir::Span;

use crate::value::ResolvedValue;

/// Result of statically resolving an expression.
///
/// `Ok` covers both fully resolved values and `Dynamic`; `Err` is reserved
/// for hard resolution errors.
pub type ResolveResult = Result<ResolvedValue, ResolutionError>;

/// Typed error category for structured diagnostics.
///
/// Each variant carries the data a host needs to report the error without
/// re-deriving it from the expression tree. The `Display` impl produces the
/// message strings used in diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionErrorKind {
    // Access
    MissingKey {
        key: String,
    },
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },
    InvalidAccess {
        target: String,
    },

    // Calls
    NotCallable {
        target: String,
    },
    UnsupportedBody {
        reason: &'static str,
    },

    // Containers
    InvalidSpread {
        expected: &'static str,
        found: String,
    },

    // Operators
    NotALiteral {
        operator: &'static str,
        operand: String,
    },
}

impl fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Access
            Self::MissingKey { key } => write!(f, "key not found: {key}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (length {len})")
            }
            Self::InvalidAccess { target } => {
                write!(f, "cannot access members of {target}")
            }

            // Calls
            Self::NotCallable { target } => write!(f, "{target} is not callable"),
            Self::UnsupportedBody { reason } => {
                write!(f, "cannot inline call: {reason}")
            }

            // Containers
            Self::InvalidSpread { expected, found } => {
                write!(f, "spread expects {expected}, got {found}")
            }

            // Operators
            Self::NotALiteral { operator, operand } => {
                write!(f, "operator `{operator}` cannot be applied to {operand}")
            }
        }
    }
}

/// Hard resolution error.
///
/// Distinct from `Dynamic`: a `ResolutionError` means the expression is in
/// the supported subset but statically wrong, so the host should surface a
/// diagnostic rather than defer to runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionError {
    /// Structured error category for matching and diagnostic conversion.
    pub kind: ResolutionErrorKind,
    /// Source location where the error occurred.
    ///
    /// Factory functions leave this unset; the interpreter attaches the
    /// nearest enclosing expression span as the error propagates.
    pub span: Option<Span>,
}

impl ResolutionError {
    /// Create an error from a structured kind.
    ///
    /// Used internally by factory functions.
    fn from_kind(kind: ResolutionErrorKind) -> Self {
        Self { kind, span: None }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The diagnostic code for this error's kind.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ResolutionErrorKind::MissingKey { .. } => ErrorCode::E4001,
            ResolutionErrorKind::IndexOutOfBounds { .. } => ErrorCode::E4002,
            ResolutionErrorKind::InvalidAccess { .. } => ErrorCode::E4003,
            ResolutionErrorKind::NotCallable { .. } => ErrorCode::E4004,
            ResolutionErrorKind::UnsupportedBody { .. } => ErrorCode::E4005,
            ResolutionErrorKind::InvalidSpread { .. } => ErrorCode::E4006,
            ResolutionErrorKind::NotALiteral { .. } => ErrorCode::E4007,
        }
    }

    /// Convert this error into a diagnostic for host-side reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, label_for(&self.kind));
        }
        if let ResolutionErrorKind::UnsupportedBody { .. } = self.kind {
            diag = diag.with_note("only function bodies consisting of a single return statement can be inlined");
        }
        diag
    }
}

/// Short primary-label text for each error kind.
fn label_for(kind: &ResolutionErrorKind) -> &'static str {
    match kind {
        ResolutionErrorKind::MissingKey { .. } => "key not found",
        ResolutionErrorKind::IndexOutOfBounds { .. } => "index out of bounds",
        ResolutionErrorKind::InvalidAccess { .. } => "invalid access",
        ResolutionErrorKind::NotCallable { .. } => "not callable",
        ResolutionErrorKind::UnsupportedBody { .. } => "cannot be inlined",
        ResolutionErrorKind::InvalidSpread { .. } => "invalid spread operand",
        ResolutionErrorKind::NotALiteral { .. } => "not a literal operand",
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ResolutionError {}

// Access Errors

/// Map access with a key the map does not contain.
#[cold]
pub fn missing_key(key: &str) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::MissingKey {
        key: key.to_string(),
    })
}

/// Array access with an integer key outside the array's bounds.
#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::IndexOutOfBounds { index, len })
}

/// Member access on a value that has no members.
#[cold]
pub fn invalid_access(target: &str) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::InvalidAccess {
        target: target.to_string(),
    })
}

// Call Errors

/// Call whose callee is not a function declaration.
#[cold]
pub fn not_callable(target: &str) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::NotCallable {
        target: target.to_string(),
    })
}

/// Call whose target function body cannot be inlined.
#[cold]
pub fn unsupported_body(reason: &'static str) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::UnsupportedBody { reason })
}

// Container Errors

/// Spread operand of the wrong container kind.
#[cold]
pub fn invalid_spread(expected: &'static str, found: &str) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::InvalidSpread {
        expected,
        found: found.to_string(),
    })
}

// Operator Errors

/// Container or reference operand where a literal operator needs a primitive.
#[cold]
pub fn not_a_literal(operator: &'static str, operand: &str) -> ResolutionError {
    ResolutionError::from_kind(ResolutionErrorKind::NotALiteral {
        operator,
        operand: operand.to_string(),
    })
}
