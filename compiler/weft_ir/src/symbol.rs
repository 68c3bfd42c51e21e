//! Symbols served by the host's symbol table.
//!
//! The evaluator never builds symbols; it receives them through the
//! resolver capability by [`SymbolId`](crate::SymbolId). A symbol records
//! its declarations in source order plus an optional canonical value
//! declaration, and classification flags set by the host.

use bitflags::bitflags;

use crate::{DeclId, Name, Named};

bitflags! {
    /// Host-assigned symbol classification.
    ///
    /// The evaluator itself consults only `ALIAS` (to chase alias chains);
    /// the remaining flags classify what the symbol declares for host-side
    /// dispatch and debugging.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SymbolFlags: u32 {
        // What the symbol declares
        const VARIABLE = 1 << 0;
        const FUNCTION = 1 << 1;
        const CLASS = 1 << 2;
        const PROPERTY = 1 << 3;
        const MODULE = 1 << 4;

        // How the symbol resolves
        const ALIAS = 1 << 5;
    }
}

/// One entry of the host's symbol table.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
    pub name: Name,
    pub flags: SymbolFlags,
    /// All declarations, in source order.
    pub decls: Vec<DeclId>,
    /// Canonical value declaration. `DeclId::INVALID` = none; the
    /// evaluator then probes `decls` in order.
    pub value_decl: DeclId,
}

impl Symbol {
    /// Create a symbol with no declarations yet.
    pub fn new(name: Name, flags: SymbolFlags) -> Self {
        Symbol {
            name,
            flags,
            decls: Vec::new(),
            value_decl: DeclId::INVALID,
        }
    }

    /// Record a declaration of this symbol.
    pub fn add_decl(&mut self, decl: DeclId) {
        self.decls.push(decl);
    }

    /// Whether this symbol is an alias for another symbol.
    #[inline]
    pub fn is_alias(&self) -> bool {
        self.flags.contains(SymbolFlags::ALIAS)
    }
}

impl Named for Symbol {
    fn name(&self) -> Name {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_symbol_alias_flag() {
        let plain = Symbol::new(Name::from_raw(1), SymbolFlags::VARIABLE);
        assert!(!plain.is_alias());

        let alias = Symbol::new(Name::from_raw(2), SymbolFlags::ALIAS | SymbolFlags::VARIABLE);
        assert!(alias.is_alias());
    }

    #[test]
    fn test_symbol_decl_recording() {
        let mut sym = Symbol::new(Name::from_raw(3), SymbolFlags::FUNCTION);
        assert!(!sym.value_decl.is_valid());

        sym.add_decl(DeclId::new(0));
        sym.add_decl(DeclId::new(4));
        assert_eq!(sym.decls, vec![DeclId::new(0), DeclId::new(4)]);

        sym.value_decl = DeclId::new(4);
        assert!(sym.value_decl.is_valid());
    }
}
