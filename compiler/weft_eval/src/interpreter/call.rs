//! Function call inlining.
//!
//! Only calls to function declarations whose body is a single return
//! statement are reduced. Arguments are evaluated left to right under the
//! caller's context, parameters bind into a fresh scope (calls never nest
//! lexically), and the return expression is evaluated under that scope with
//! the caller's module provenance intact.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use weft_ir::{DeclId, DeclKind, DeclRange, ExprId, ExprRange, Stmt, StmtKind};

use crate::context::{Context, Scope};
use crate::errors::{not_callable, unsupported_body, ResolutionError, ResolveResult};
use crate::interpreter::StaticInterpreter;
use crate::resolver::SymbolResolver;
use crate::value::ResolvedValue;

impl<R: SymbolResolver> StaticInterpreter<'_, R> {
    /// Evaluate a call expression by inlining its target's body.
    pub(super) fn eval_call(
        &self,
        callee: ExprId,
        args: ExprRange,
        ctx: &Context,
    ) -> ResolveResult {
        let reference = match self.eval(callee, ctx)? {
            ResolvedValue::Dynamic => return Ok(ResolvedValue::Dynamic),
            ResolvedValue::Ref(reference) => reference,
            other => return Err(not_callable(other.type_name())),
        };
        let func = *self.arena.get_decl(reference.decl());
        let DeclKind::Func {
            params,
            body,
            has_body,
        } = func.kind
        else {
            return Err(not_callable(func.kind.describe()));
        };
        if !has_body {
            return Err(unsupported_body("function has no body"));
        }
        let return_expr = single_return(self.arena.get_stmts(body))?;

        // Arguments first, left to right, before any parameter is bound.
        let arguments: SmallVec<[ResolvedValue; 8]> = self
            .arena
            .get_expr_list(args)
            .iter()
            .map(|&arg| self.eval(arg, ctx))
            .collect::<Result<_, _>>()?;

        let bindings = self.bind_parameters(params, &arguments, ctx)?;
        let call_ctx = ctx.with_scope(Scope::from_bindings(bindings));
        match return_expr {
            Some(expr) => self.eval(expr, &call_ctx),
            // A bare `return;` reduces to undefined.
            None => Ok(ResolvedValue::Undefined),
        }
    }

    /// Bind formal parameters to evaluated arguments.
    ///
    /// A supplied argument wins even when it is `Dynamic`; otherwise the
    /// parameter's default is evaluated under the caller's context, and a
    /// parameter with neither binds to `undefined`.
    fn bind_parameters(
        &self,
        params: DeclRange,
        arguments: &[ResolvedValue],
        ctx: &Context,
    ) -> Result<FxHashMap<DeclId, ResolvedValue>, ResolutionError> {
        let mut bindings = FxHashMap::default();
        for (position, &param) in self.arena.get_decl_list(params).iter().enumerate() {
            let value = match arguments.get(position) {
                Some(argument) => argument.clone(),
                None => self.eval_default(param, ctx)?,
            };
            bindings.insert(param, value);
        }
        Ok(bindings)
    }

    fn eval_default(&self, param: DeclId, ctx: &Context) -> ResolveResult {
        let DeclKind::Param { default } = self.arena.get_decl(param).kind else {
            return Ok(ResolvedValue::Undefined);
        };
        if default.is_valid() {
            self.eval(default, ctx)
        } else {
            Ok(ResolvedValue::Undefined)
        }
    }
}

/// The return expression of a single-return body.
///
/// `Ok(None)` is a bare `return;`. Every other body shape is a hard error:
/// bodies with control flow are beyond what inlining supports.
fn single_return(body: &[Stmt]) -> Result<Option<ExprId>, ResolutionError> {
    match body {
        [stmt] => match stmt.kind {
            StmtKind::Return(expr) => Ok(expr.is_valid().then_some(expr)),
            StmtKind::Other => Err(unsupported_body("body statement is not a return")),
        },
        [] => Err(unsupported_body("function body is empty")),
        _ => Err(unsupported_body("function body has more than one statement")),
    }
}
