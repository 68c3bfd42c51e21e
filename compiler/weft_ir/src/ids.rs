//! Node ids and ranges for the flat AST.
//!
//! Children are `u32` indices into [`SyntaxArena`](crate::SyntaxArena)
//! storage instead of boxes; child lists are `{start, len}` ranges into
//! flattened side tables.

use std::fmt;

/// Index into the expression arena.
///
/// # Design
/// - Memory: 4 bytes (vs 8 bytes for `Box<Expr>`)
/// - Equality: O(1) integer compare
/// - Cache locality: indices into a contiguous array
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    ///
    /// Used for optional children: a variable without an initializer, a
    /// parameter without a default, a bare `return;`.
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index into the declaration arena.
///
/// Declaration identity doubles as the evaluator's scope key: formal
/// parameters are bound per `DeclId`, which is unique per declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    pub const INVALID: DeclId = DeclId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        DeclId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "DeclId({})", self.0)
        } else {
            write!(f, "DeclId::INVALID")
        }
    }
}

impl Default for DeclId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index into the source unit table.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct UnitId(u32);

impl UnitId {
    pub const INVALID: UnitId = UnitId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        UnitId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "UnitId({})", self.0)
        } else {
            write!(f, "UnitId::INVALID")
        }
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Handle to a symbol served by the host's symbol table.
///
/// The symbol table itself is host-owned; the resolver trait serves
/// [`Symbol`](crate::Symbol) records by id.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    pub const INVALID: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "SymbolId({})", self.0)
        } else {
            write!(f, "SymbolId::INVALID")
        }
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Macro to define range types for arena-allocated data.
///
/// Each generated type has:
/// - `start: u32` and `len: u16` fields
/// - `EMPTY` constant
/// - `new()`, `is_empty()`, `len()`, `indices()` methods
/// - `Debug` implementation showing the range as `TypeName(start..end)`
macro_rules! define_range {
    ($($name:ident),* $(,)?) => { $(
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Iterator over indices in this range.
            #[inline]
            pub fn indices(&self) -> impl Iterator<Item = u32> {
                self.start..(self.start + u32::from(self.len))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "{}({}..{})",
                    stringify!($name),
                    self.start,
                    self.start + u32::from(self.len)
                )
            }
        }
    )* };
}

define_range!(
    ExprRange,
    DeclRange,
    StmtRange,
    PropRange,
    ElementRange,
    MemberRange,
);
