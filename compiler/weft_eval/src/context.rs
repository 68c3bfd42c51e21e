//! Evaluation context threaded through static resolution.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use weft_ir::{DeclId, Name};

use crate::value::ResolvedValue;

/// Import provenance recorded while chasing aliases.
///
/// Set when an alias chain crosses an import specifier whose module name is
/// non-relative; the most recent hop wins. Any reference minted under this
/// provenance becomes absolute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModuleProvenance {
    /// The import specifier, e.g. `some-package`.
    pub module: Name,
    /// The name imported from the module at that hop.
    pub symbol: Name,
}

/// Context for evaluating one expression.
///
/// Contexts are cheap to clone; resolution clones one whenever a branch of
/// the walk needs different provenance or bindings, so updates never leak
/// back into the caller.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Non-relative import provenance, if any alias hop established one.
    pub absolute_module: Option<ModuleProvenance>,
    /// Parameter bindings of the enclosing inlined call.
    pub scope: Scope,
}

impl Context {
    /// The root context: no provenance, no bindings.
    pub fn root() -> Self {
        Self::default()
    }

    /// This context with `scope` swapped in.
    pub fn with_scope(&self, scope: Scope) -> Self {
        Context {
            absolute_module: self.absolute_module,
            scope,
        }
    }
}

/// Parameter bindings introduced by call inlining.
///
/// Keyed by declaration, not by name: an identifier inside an inlined body
/// resolves to its parameter declaration first, and only then does the scope
/// answer whether that declaration currently has a bound value.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: Rc<FxHashMap<DeclId, ResolvedValue>>,
}

impl Scope {
    /// An empty scope.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A scope holding the given bindings.
    pub fn from_bindings(bindings: FxHashMap<DeclId, ResolvedValue>) -> Self {
        Scope {
            bindings: Rc::new(bindings),
        }
    }

    /// Look up the bound value for a parameter declaration.
    pub fn lookup(&self, decl: DeclId) -> Option<&ResolvedValue> {
        self.bindings.get(&decl)
    }

    /// Whether the scope binds nothing.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
