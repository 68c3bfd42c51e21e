//! Interned string identifier.
//!
//! A `Name` is a 32-bit index into the [`StringInterner`](crate::StringInterner).
//! Identifiers, string literals, module specifiers, and unit paths are all
//! interned so node types stay `Copy` and comparison is O(1).

use std::fmt;

/// Interned string identifier.
///
/// Plain index into the interner's string table. `Name` equality is string
/// equality because interning deduplicates.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_raw_roundtrip() {
        let name = Name::from_raw(17);
        assert_eq!(name.raw(), 17);
        assert_eq!(name.index(), 17);
    }

    #[test]
    fn test_name_empty_is_default() {
        assert_eq!(Name::default(), Name::EMPTY);
        assert_eq!(Name::EMPTY.raw(), 0);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::from_raw(1) < Name::from_raw(2));
    }

    #[test]
    fn test_name_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Name::from_raw(1));
        set.insert(Name::from_raw(1));
        set.insert(Name::from_raw(2));
        assert_eq!(set.len(), 2);
    }
}
