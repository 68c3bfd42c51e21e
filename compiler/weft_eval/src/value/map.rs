//! Insertion-ordered string-keyed map.

use rustc_hash::FxHashMap;

use crate::value::ResolvedValue;

/// A string-keyed map that preserves insertion order.
///
/// Matches host object semantics: iteration follows first-insertion order,
/// and re-inserting an existing key overwrites its value in place without
/// moving the key to the end. Spread merges rely on both properties.
#[derive(Clone, Debug, Default)]
pub struct OrderedMap {
    entries: Vec<(String, ResolvedValue)>,
    /// Key position lookup. Derived from `entries`; excluded from equality.
    index: FxHashMap<String, usize>,
}

impl OrderedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair.
    ///
    /// If the key is already present its value is overwritten and the key
    /// keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: ResolvedValue) {
        let key = key.into();
        if let Some(&at) = self.index.get(&key) {
            self.entries[at].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.index.get(key).map(|&at| &self.entries[at].1)
    }

    /// Whether the map contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(String, ResolvedValue)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (String, ResolvedValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
