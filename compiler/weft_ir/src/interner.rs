//! String interner for identifiers, literals, and unit paths.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked and live
//! for the program's lifetime, so lookups can hand out `'static` references.
//! Resolution is single-threaded, so a single locked table is enough; the
//! lock only makes the interner shareable with host threads that build
//! arenas concurrently with other work.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Table exceeded capacity (over 4 billion strings).
    TableOverflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::TableOverflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Interner storage.
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn new() -> Self {
        let mut table = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Pre-intern the empty string at index 0 so Name::EMPTY resolves.
        let empty: &'static str = "";
        table.map.insert(empty, 0);
        table.strings.push(empty);
        table
    }
}

/// String interner backing [`Name`].
///
/// Provides O(1) lookup and equality comparison for interned strings.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(InternTable::new()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned.
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::from_raw(index));
            }
        }

        let mut guard = self.table.write();

        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        // Leak the string to get a 'static lifetime.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::TableOverflow {
            count: guard.strings.len(),
        })?;
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Intern an owned String, avoiding the copy `intern` would make for a
    /// string that is not yet in the table.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity.
    pub fn intern_owned(&self, s: String) -> Name {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s.as_str()) {
                return Name::from_raw(index);
            }
        }

        let mut guard = self.table.write();

        if let Some(&index) = guard.map.get(s.as_str()) {
            return Name::from_raw(index);
        }

        let leaked: &'static str = Box::leak(s.into_boxed_str());

        let count = guard.strings.len();
        let index = u32::try_from(count)
            .unwrap_or_else(|_| panic!("{}", InternError::TableOverflow { count }));
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Name::from_raw(index)
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        let guard = self.table.read();
        guard.strings[name.index()]
    }

    /// Look up the string for a Name, returning a `'static` reference.
    ///
    /// Safe because interned strings are leaked, never deallocated. Use this
    /// when the string must outlive the borrow of the interner, such as when
    /// building owned values from interned literals.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        let guard = self.table.read();
        guard.strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner holds only the pre-interned empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Higher-level crates accept any `StringLookup` implementor instead of
/// depending on `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_intern_and_lookup() {
        let interner = StringInterner::new();

        let length = interner.intern("length");
        let value = interner.intern("value");
        let length2 = interner.intern("length");

        assert_eq!(length, length2);
        assert_ne!(length, value);

        assert_eq!(interner.lookup(length), "length");
        assert_eq!(interner.lookup(value), "value");
    }

    #[test]
    fn test_empty_string_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(interner.is_empty());
    }

    #[test]
    fn test_intern_owned_deduplicates() {
        let interner = StringInterner::new();

        let name1 = interner.intern("shared/unit.ts");
        let name2 = interner.intern_owned(String::from("shared/unit.ts"));
        assert_eq!(name1, name2);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_lookup_static_outlives_borrow() {
        let interner = StringInterner::new();
        let name = interner.intern("pkg");
        let s: &'static str = interner.lookup_static(name);
        assert_eq!(s, "pkg");
    }

    #[test]
    fn test_string_lookup_trait() {
        fn through_trait<I: StringLookup>(interner: &I, name: Name) -> String {
            interner.lookup(name).to_owned()
        }

        let interner = StringInterner::new();
        let name = interner.intern("exports");
        assert_eq!(through_trait(&interner, name), "exports");
    }
}
