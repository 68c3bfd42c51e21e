//! The symbol resolution capability served by the host.

use weft_ir::{ExprId, Symbol, SymbolId};

/// Symbol queries the host compiler answers during resolution.
///
/// The evaluator owns no symbol table. The host's checker binds identifier
/// expressions to symbols, knows what each alias stands for, and can
/// enumerate a module's exports; this trait is how the evaluator asks.
/// Implementations hand out [`SymbolId`] handles and serve the records
/// behind them on demand.
pub trait SymbolResolver {
    /// The symbol record behind a handle.
    fn symbol(&self, id: SymbolId) -> &Symbol;

    /// The symbol an identifier expression is bound to, if the host knows
    /// one. `None` means the identifier is not statically resolvable.
    fn symbol_at(&self, expr: ExprId) -> Option<SymbolId>;

    /// The symbol an alias stands for.
    ///
    /// Queried one hop at a time, only for symbols whose flags contain
    /// [`SymbolFlags::ALIAS`](weft_ir::SymbolFlags::ALIAS); the evaluator
    /// chases the chain itself.
    fn aliased_symbol(&self, id: SymbolId) -> SymbolId;

    /// The exported symbols of a module symbol, in export order.
    fn exports_of(&self, module: SymbolId) -> Vec<SymbolId>;

    /// The value symbol behind a shorthand object property's identifier
    /// expression.
    fn shorthand_value_symbol(&self, ident: ExprId) -> Option<SymbolId>;
}
