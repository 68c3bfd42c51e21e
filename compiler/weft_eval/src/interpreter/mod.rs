//! Recursive expression evaluation.
//!
//! [`StaticInterpreter`] maps each expression shape to a concrete
//! [`ResolvedValue`], the `Dynamic` sentinel, or a hard
//! [`ResolutionError`]. This module owns the entry points and the dispatch;
//! identifier resolution, call inlining, and container/access rules live in
//! the sibling modules.

mod access;
mod call;
mod resolve;

use weft_ir::{ExprId, ExprKind, Span, StringInterner, SyntaxArena};
use weft_stack::ensure_sufficient_stack;

use crate::context::Context;
use crate::errors::{ResolutionError, ResolveResult};
use crate::operators::evaluate_binary;
use crate::resolver::SymbolResolver;
use crate::unary_operators::evaluate_unary;
use crate::value::ResolvedValue;

/// Statically resolve a single expression against a host program.
///
/// Evaluation starts from an empty context: no module provenance and no
/// parameter bindings. `Ok(ResolvedValue::Dynamic)` means the expression is
/// not statically knowable and the caller should defer to runtime behavior;
/// `Err` means the expression is statically wrong.
pub fn statically_resolve<R: SymbolResolver>(
    arena: &SyntaxArena,
    interner: &StringInterner,
    resolver: &R,
    expr: ExprId,
) -> ResolveResult {
    StaticInterpreter::new(arena, interner, resolver).eval(expr, &Context::root())
}

/// Expression evaluator over a host-built program.
///
/// Holds no mutable state: the arena and interner are read-only input, the
/// resolver is the host's symbol capability, and everything evaluation
/// tracks flows through [`Context`] values. One interpreter can resolve any
/// number of expressions over the same program.
pub struct StaticInterpreter<'a, R> {
    /// Expression, declaration, statement, and unit storage.
    pub(crate) arena: &'a SyntaxArena,
    /// Identifier, literal, and unit path text.
    pub(crate) interner: &'a StringInterner,
    /// Host capability answering symbol queries.
    pub(crate) resolver: &'a R,
}

impl<'a, R: SymbolResolver> StaticInterpreter<'a, R> {
    /// Create an interpreter over a host program.
    pub fn new(arena: &'a SyntaxArena, interner: &'a StringInterner, resolver: &'a R) -> Self {
        StaticInterpreter {
            arena,
            interner,
            resolver,
        }
    }

    /// Evaluate an expression under `ctx`.
    ///
    /// This is the recursive entry. It grows the stack ahead of deep
    /// expression chains, and attaches the expression's span to hard errors
    /// that don't already carry one, so the innermost failing expression
    /// wins.
    #[tracing::instrument(level = "trace", skip(self, ctx))]
    pub fn eval(&self, expr: ExprId, ctx: &Context) -> ResolveResult {
        ensure_sufficient_stack(|| {
            let span = self.arena.get_expr(expr).span;
            self.eval_inner(expr, ctx)
                .map_err(|err| attach_span(err, span))
        })
    }

    fn eval_inner(&self, expr: ExprId, ctx: &Context) -> ResolveResult {
        let kind = self.arena.get_expr(expr).kind;
        match kind {
            ExprKind::Bool(value) => Ok(ResolvedValue::Bool(value)),
            ExprKind::Number(bits) => Ok(ResolvedValue::Number(f64::from_bits(bits))),
            ExprKind::String(text) => Ok(ResolvedValue::string(self.interner.lookup(text))),

            ExprKind::Ident(_) => self.eval_ident(expr, ctx),

            ExprKind::Object(props) => self.eval_object(props, ctx),
            ExprKind::Array(elements) => self.eval_array(elements, ctx),

            ExprKind::PropertyAccess { target, name } => {
                self.eval_property_access(target, name, ctx)
            }
            ExprKind::IndexAccess { target, index } => self.eval_index_access(target, index, ctx),

            ExprKind::Call { callee, args } => self.eval_call(callee, args, ctx),

            ExprKind::Conditional {
                cond,
                when_true,
                when_false,
            } => {
                let test = self.eval(cond, ctx)?;
                if test.is_dynamic() {
                    return Ok(ResolvedValue::Dynamic);
                }
                // Only the chosen branch is evaluated; unsupported shapes
                // in the untaken branch never surface.
                if test.is_truthy() {
                    self.eval(when_true, ctx)
                } else {
                    self.eval(when_false, ctx)
                }
            }

            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand, ctx)?;
                evaluate_unary(value, op)
            }
            ExprKind::Binary { op, left, right } => {
                // Both operands are always evaluated; `&&`/`||` select one
                // of the results rather than skipping evaluation.
                let l = self.eval(left, ctx)?;
                let r = self.eval(right, ctx)?;
                evaluate_binary(l, r, op)
            }

            ExprKind::Paren(inner)
            | ExprKind::TypeAssertion(inner)
            | ExprKind::NonNullAssertion(inner) => self.eval(inner, ctx),

            ExprKind::ClassExpr(decl) => Ok(ResolvedValue::Ref(self.make_reference(decl, ctx))),

            // Shapes outside the supported subset degrade to Dynamic.
            ExprKind::Template(_) | ExprKind::New { .. } | ExprKind::Error => {
                Ok(ResolvedValue::Dynamic)
            }
        }
    }
}

/// Attach `span` to an error that doesn't already carry a location.
#[inline]
fn attach_span(err: ResolutionError, span: Span) -> ResolutionError {
    if err.span.is_none() {
        err.with_span(span)
    } else {
        err
    }
}
