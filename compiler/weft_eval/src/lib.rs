//! Weft Eval - static partial evaluation of weft expression trees.
//!
//! The evaluator reduces expressions to [`ResolvedValue`]s at analysis
//! time: literals and operators compute directly, identifiers resolve
//! through the host's symbol table, single-return function calls inline,
//! and whatever is not statically knowable becomes the
//! [`Dynamic`](ResolvedValue::Dynamic) sentinel rather than an error.
//! Evaluation that stops at a named declaration yields a [`Reference`],
//! which [`Reference::to_expression`] can lower back into host syntax.
//!
//! The host supplies the program: a [`SyntaxArena`](weft_ir::SyntaxArena)
//! with its interner, and a [`SymbolResolver`] serving symbol queries. The
//! usual entry point is [`statically_resolve`].

#![deny(clippy::arithmetic_side_effects)]

mod coerce;
mod context;
pub mod errors;
mod interpreter;
mod operators;
mod reference;
mod resolver;
#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
mod unary_operators;
mod value;

pub use context::{Context, ModuleProvenance, Scope};
pub use interpreter::{statically_resolve, StaticInterpreter};
pub use operators::evaluate_binary;
pub use reference::{ExpressionEmitter, Reference};
pub use resolver::SymbolResolver;
pub use unary_operators::evaluate_unary;
pub use value::{Heap, OrderedMap, ResolvedValue};

// Error types re-exported at the root for convenience; the canonical path
// is `weft_eval::errors`.
pub use errors::{ResolutionError, ResolutionErrorKind, ResolveResult};
