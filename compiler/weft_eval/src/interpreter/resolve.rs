//! Identifier and symbol resolution.
//!
//! Identifiers resolve through the host's symbol table: alias chains are
//! chased to the original symbol, import hops along the way record module
//! provenance, and the final symbol's declarations are evaluated by kind.
//! Declarations that cannot reduce to a value (functions, classes, unbound
//! parameters) produce a [`Reference`] recording how to name them again.

use weft_ir::{DeclId, DeclKind, ExprId, Symbol, SymbolId};

use crate::context::{Context, ModuleProvenance};
use crate::errors::ResolveResult;
use crate::interpreter::StaticInterpreter;
use crate::reference::Reference;
use crate::resolver::SymbolResolver;
use crate::value::{OrderedMap, ResolvedValue};

impl<R: SymbolResolver> StaticInterpreter<'_, R> {
    /// Resolve an identifier expression through its symbol.
    ///
    /// Identifiers the host serves no symbol for are not statically
    /// knowable.
    pub(super) fn eval_ident(&self, expr: ExprId, ctx: &Context) -> ResolveResult {
        match self.resolver.symbol_at(expr) {
            Some(symbol) => self.resolve_symbol(symbol, ctx),
            None => Ok(ResolvedValue::Dynamic),
        }
    }

    /// Resolve a symbol to its static value.
    ///
    /// Provenance is recorded at every hop of the alias chain before the
    /// hop is followed, most recent hop winning. The chase is deliberately
    /// unguarded: a cyclic alias graph is a host-side defect, not input the
    /// evaluator recovers from.
    pub(super) fn resolve_symbol(&self, id: SymbolId, ctx: &Context) -> ResolveResult {
        let mut ctx = ctx.clone();
        let mut current = id;
        loop {
            let symbol = self.resolver.symbol(current);
            self.record_provenance(symbol, &mut ctx);
            if !symbol.is_alias() {
                break;
            }
            current = self.resolver.aliased_symbol(current);
        }

        let symbol = self.resolver.symbol(current);
        if symbol.value_decl.is_valid() {
            return self.eval_decl(current, symbol.value_decl, &ctx);
        }
        // No canonical value declaration: probe the candidates in source
        // order and keep the first conclusive result.
        for &decl in &symbol.decls {
            let value = self.eval_decl(current, decl, &ctx)?;
            if !value.is_dynamic() && !matches!(value, ResolvedValue::Ref(_)) {
                return Ok(value);
            }
        }
        Ok(ResolvedValue::Dynamic)
    }

    /// Record non-relative import provenance from a symbol's declarations.
    fn record_provenance(&self, symbol: &Symbol, ctx: &mut Context) {
        for &decl_id in &symbol.decls {
            let decl = self.arena.get_decl(decl_id);
            let DeclKind::ImportSpec { module } = decl.kind else {
                continue;
            };
            if self.interner.lookup(module).starts_with('.') {
                // Relative specifiers stay local; only package imports
                // establish absolute provenance.
                continue;
            }
            let symbol_name = if decl.has_name() { decl.name } else { symbol.name };
            ctx.absolute_module = Some(ModuleProvenance {
                module,
                symbol: symbol_name,
            });
            tracing::trace!(
                module = self.interner.lookup(module),
                symbol = self.interner.lookup(symbol_name),
                "recorded absolute module provenance"
            );
        }
    }

    /// Evaluate one declaration of a symbol.
    ///
    /// `owner` is the symbol being resolved; it matters only when the
    /// declaration is a whole source unit, whose exports are enumerated
    /// through the module symbol.
    fn eval_decl(&self, owner: SymbolId, decl_id: DeclId, ctx: &Context) -> ResolveResult {
        let decl = *self.arena.get_decl(decl_id);
        match decl.kind {
            DeclKind::Var { init } if init.is_valid() => self.eval(init, ctx),
            DeclKind::Var { .. } => Ok(ResolvedValue::Undefined),

            DeclKind::Param { .. } => match ctx.scope.lookup(decl_id) {
                Some(value) => Ok(value.clone()),
                // A parameter outside any inlined call keeps its identity.
                None => Ok(ResolvedValue::Ref(self.make_reference(decl_id, ctx))),
            },

            DeclKind::ExportAssign { expr } => self.eval(expr, ctx),

            DeclKind::Unit { .. } => self.eval_namespace(owner, ctx),

            DeclKind::Func { .. }
            | DeclKind::Class { .. }
            | DeclKind::Prop { .. }
            | DeclKind::ImportSpec { .. }
            | DeclKind::Ambient => Ok(ResolvedValue::Ref(self.make_reference(decl_id, ctx))),
        }
    }

    /// Build the namespace map for a module symbol: every exported name,
    /// in export order, to its resolved value.
    fn eval_namespace(&self, module: SymbolId, ctx: &Context) -> ResolveResult {
        let mut entries = OrderedMap::new();
        for export in self.resolver.exports_of(module) {
            let name = self.resolver.symbol(export).name;
            let value = self.resolve_symbol(export, ctx)?;
            entries.insert(self.interner.lookup(name), value);
        }
        Ok(ResolvedValue::map(entries))
    }

    /// Mint a reference for a declaration evaluation stopped at.
    ///
    /// Nameless declarations are opaque. Named ones become absolute when
    /// the context carries module provenance (the declaration was reached
    /// through a package import) and local otherwise.
    pub(super) fn make_reference(&self, decl_id: DeclId, ctx: &Context) -> Reference {
        let decl = self.arena.get_decl(decl_id);
        if !decl.has_name() {
            return Reference::Opaque { decl: decl_id };
        }
        match ctx.absolute_module {
            Some(ModuleProvenance { module, symbol }) => Reference::Absolute {
                decl: decl_id,
                name: decl.name,
                module,
                symbol,
            },
            None => Reference::Local {
                decl: decl_id,
                name: decl.name,
            },
        }
    }
}
