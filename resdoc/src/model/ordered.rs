//! Insertion-ordered key/value storage for metadata and front matter.

use std::collections::BTreeMap;

/// Key/value map that remembers the order in which keys first appeared.
///
/// Re-inserting an existing key replaces its value in place, so the key
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap {
    entries: Vec<(String, String)>,
}

impl OrderedMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let owned_key = key.into();
        let owned_value = value.into();
        if let Some((_, slot)) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == owned_key)
        {
            return Some(std::mem::replace(slot, owned_value));
        }
        self.entries.push((owned_key, owned_value));
        None
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterates over keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Front matter grouped into numbered blocks.
///
/// Block indices start at one. Blocks only exist once a key has been written
/// to them, so an empty `FrontMatter` renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    blocks: BTreeMap<u32, OrderedMap>,
}

impl FrontMatter {
    /// Lowest valid block index.
    pub const FIRST_BLOCK: u32 = 1;

    /// Creates empty front matter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blocks: BTreeMap::new(),
        }
    }

    /// Normalises a declared block index, clamping anything below one.
    #[must_use]
    pub fn normalise_block(declared: i64) -> u32 {
        u32::try_from(declared.max(i64::from(Self::FIRST_BLOCK))).unwrap_or(u32::MAX)
    }

    /// Writes `key` into `block`, overwriting any earlier value for the key.
    pub fn insert(
        &mut self,
        block: u32,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.blocks
            .entry(block.max(Self::FIRST_BLOCK))
            .or_default()
            .insert(key, value)
    }

    /// Returns the entries written to `block`.
    #[must_use]
    pub fn block(&self, block: u32) -> Option<&OrderedMap> {
        self.blocks.get(&block)
    }

    /// Returns the value of `key` within `block`.
    #[must_use]
    pub fn get(&self, block: u32, key: &str) -> Option<&str> {
        self.block(block).and_then(|entries| entries.get(key))
    }

    /// Iterates over every key of every block, lowest block first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blocks.values().flat_map(OrderedMap::keys)
    }

    /// Returns `true` when no block holds any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.values().all(OrderedMap::is_empty)
    }

    /// Flattens all blocks into one map.
    ///
    /// Blocks are applied in ascending index order, so a higher block
    /// overrides a lower block's value while the key keeps the position of
    /// its first appearance.
    #[must_use]
    pub fn merged(&self) -> OrderedMap {
        self.blocks
            .values()
            .flat_map(OrderedMap::iter)
            .collect()
    }
}
