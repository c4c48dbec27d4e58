use rustc_hash::FxBuildHasher;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Insertion-ordered key→value store.
///
/// Entries live in a `Vec`, so `keys` / `values` / `iter` follow insertion
/// order and the order is stable for the life of the instance. A hash index
/// maps keys to entry slots, giving O(1) expected lookup, insert, and
/// removal.
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> Dictionary<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts `value` under `key`. When the key is already present its
    /// value is replaced and the previous value returned; the entry keeps
    /// its original position.
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        let slot = self.entries.len();
        self.entries.push((key.clone(), value));
        self.index.insert(key, slot);
        None
    }

    /// Removes the entry for `key` and returns its value, or `None` when
    /// the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        // Entries after the removed slot shifted down by one.
        for i in slot..self.entries.len() {
            if let Some(s) = self.index.get_mut(&self.entries[i].0) {
                *s = i;
            }
        }
        Some(value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index
            .get(key)
            .copied()
            .map(move |slot| &mut self.entries[slot].1)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
