//! EntryMap: insertion-ordered keyed mapping with a hash index over ordered storage.
//!
//! Entries live in a `Vec` in insertion order; a `HashTable` of positions
//! provides O(1) average lookup. Each entry stores its precomputed `u64`
//! hash and indexing always uses the stored hash, so `K: Hash` is never
//! invoked again after insertion. Entries are never removed: overwriting a
//! key replaces the value in place and keeps the key's original position,
//! which is what keeps conversions to sequences deterministic.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;

#[derive(Debug, Clone)]
struct Slot<K, V> {
    key: K,
    value: V,
    hash: u64,
}

pub struct EntryMap<K, V, S = RandomState> {
    hasher: S,
    index: HashTable<usize>,
    slots: Vec<Slot<K, V>>, // storage in insertion order
}

impl<K, V> EntryMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for EntryMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over entries in insertion order.
pub struct Iter<'a, K, V> {
    it: core::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|s| (&s.key, &s.value))
    }
}

/// Owning iterator over entries in insertion order.
pub struct IntoIter<K, V> {
    it: std::vec::IntoIter<Slot<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|s| (s.key, s.value))
    }
}

impl<K, V, S> EntryMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            index: HashTable::new(),
            hasher,
            slots: Vec::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert a key -> value association. A repeated key replaces the value
    /// and returns the displaced one; the key keeps the position of its
    /// first insertion.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        match self.index.entry(
            hash,
            |&i| self.slots[i].key == key,
            |&i| self.slots[i].hash,
        ) {
            hashbrown::hash_table::Entry::Occupied(o) => {
                let i = *o.get();
                Some(core::mem::replace(&mut self.slots[i].value, value))
            }
            hashbrown::hash_table::Entry::Vacant(v) => {
                let i = self.slots.len();
                self.slots.push(Slot { key, value, hash });
                let _ = v.insert(i);
                None
            }
        }
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&i| self.slots[i].key.borrow() == q)
            .map(|&i| &self.slots[i].value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(q).is_some()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

impl<K, V, S> IntoIterator for EntryMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            it: self.slots.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a EntryMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for EntryMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for EntryMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = EntryMap::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

/// Order-insensitive deep equality: same key set, equal values per key.
/// Insertion order matters for enumeration, not for equality, matching the
/// usual map semantics.
impl<K, V, S> PartialEq for EntryMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for EntryMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Clone for EntryMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            hasher: self.hasher.clone(),
            index: self.index.clone(),
            slots: self.slots.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for EntryMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|s| (&s.key, &s.value)))
            .finish()
    }
}
