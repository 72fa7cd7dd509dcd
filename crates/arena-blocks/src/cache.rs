use hashbrown::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Maps a raw legacy code (or code plus context) to the index of the voxel
/// definition built for it. Lookups are exact-match; a miss builds and
/// records the definition once.
#[derive(Debug)]
pub struct DefCache<K> {
    entries: HashMap<K, u16>,
    hits: u64,
    misses: u64,
}

impl<K> Default for DefCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: Eq + Hash> DefCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<u16> {
        self.entries.get(key).copied()
    }

    pub fn get_or_insert_with<F>(&mut self, key: K, build: F) -> u16
    where
        F: FnOnce() -> u16,
    {
        if let Some(&index) = self.entries.get(&key) {
            self.hits += 1;
            return index;
        }
        self.misses += 1;
        let index = build();
        self.entries.insert(key, index);
        index
    }

    /// Fallible form of [`get_or_insert_with`](Self::get_or_insert_with).
    /// A builder returning `None` records nothing, so the key stays a miss.
    pub fn try_get_or_insert_with<F>(&mut self, key: K, build: F) -> Option<u16>
    where
        F: FnOnce() -> Option<u16>,
    {
        if let Some(&index) = self.entries.get(&key) {
            self.hits += 1;
            return Some(index);
        }
        self.misses += 1;
        let index = build()?;
        self.entries.insert(key, index);
        Some(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> DefCacheStats {
        DefCacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
