//! Evaluator test suites.
//!
//! Leaf modules (coercions, values, unary operators) keep inline tests;
//! the suites here exercise whole-expression behavior end to end through
//! the [`fixture`] program builder, which plays the host: it owns the
//! arena and interner and serves a hand-built symbol table.

mod call_tests;
mod reference_tests;
