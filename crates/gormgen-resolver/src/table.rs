use std::collections::HashMap;
use std::collections::hash_map;

/// Override entries keyed like the table they apply to.
///
/// `Some(value)` sets or overwrites the key, `None` deletes it.
pub type Overrides<V> = HashMap<String, Option<V>>;

/// Case-sensitive string-keyed lookup table shared by the type and tag resolvers.
///
/// Built once at configuration time and only read while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for MappingTable<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> MappingTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order, so callers get a stable listing.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, V> {
        self.entries.iter()
    }

    /// Merge overrides key by key: `None` deletes, `Some` sets, the rest is untouched.
    ///
    /// Deleting a key that is not present is a no-op.
    pub fn merge<K, I>(&mut self, overrides: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<V>)>,
    {
        for (key, value) in overrides {
            let key = key.into();
            match value {
                Some(value) => {
                    self.entries.insert(key, value);
                }
                None => {
                    self.entries.remove(&key);
                }
            }
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for MappingTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V> IntoIterator for MappingTable<V> {
    type Item = (String, V);
    type IntoIter = hash_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Apply an optional override table to an optional table.
///
/// A missing override table clears the target entirely; merging into a
/// cleared target starts from an empty table.
pub fn apply_overrides<V>(target: &mut Option<MappingTable<V>>, overrides: Option<Overrides<V>>) {
    let Some(overrides) = overrides else {
        *target = None;
        return;
    };
    target
        .get_or_insert_with(MappingTable::new)
        .merge(overrides);
}
