//! Conversions between ordered sequences and keyed mappings, and a uniform
//! map/reduce view over either.
//!
//! `IntoIterator` is the uniform entries view: a sequence yields its
//! elements in order, an [`EntryMap`] yields `(key, value)` pairs in
//! insertion order. A container that is neither is rejected by the trait
//! bound at compile time. None of these functions fail on their own;
//! panics from caller-supplied closures propagate unmodified.

use crate::entry_map::EntryMap;
use core::hash::Hash;

/// Apply `f` to each element or entry, in enumeration order, collecting
/// the results. Pass a reference to keep the container intact.
pub fn map_entries<C, B, F>(container: C, f: F) -> Vec<B>
where
    C: IntoIterator,
    F: FnMut(C::Item) -> B,
{
    container.into_iter().map(f).collect()
}

/// [`map_entries`] with the identity transform: the container's entries as
/// an ordered sequence.
pub fn entries<C>(container: C) -> Vec<C::Item>
where
    C: IntoIterator,
{
    map_entries(container, |item| item)
}

/// Left-fold `reducer` over the container's entries in [`map_entries`]
/// order, starting from `init`. The accumulator can be any type, including
/// an empty default.
pub fn reduce_entries<C, A, F>(container: C, reducer: F, init: A) -> A
where
    C: IntoIterator,
    F: FnMut(A, C::Item) -> A,
{
    container.into_iter().fold(init, reducer)
}

/// Build a keyed mapping from a sequence, keying each element by
/// `get_key` and storing the element itself. Later elements overwrite
/// earlier ones on key collision.
pub fn sequence_to_mapping<I, K, GK>(sequence: I, get_key: GK) -> EntryMap<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    GK: FnMut(&I::Item) -> K,
{
    sequence_to_mapping_with(sequence, get_key, |item| item)
}

/// Like [`sequence_to_mapping`], with an explicit value projection.
pub fn sequence_to_mapping_with<I, K, V, GK, GV>(
    sequence: I,
    mut get_key: GK,
    mut get_value: GV,
) -> EntryMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    GK: FnMut(&I::Item) -> K,
    GV: FnMut(I::Item) -> V,
{
    let mut mapping = EntryMap::new();
    for item in sequence {
        let key = get_key(&item);
        mapping.insert(key, get_value(item));
    }
    mapping
}

/// Flatten a mapping to the ordered sequence of its entries. A
/// semantically named alias of [`entries`] for the mapping-to-sequence
/// direction.
pub fn mapping_to_sequence<C>(container: C) -> Vec<C::Item>
where
    C: IntoIterator,
{
    entries(container)
}

/// [`mapping_to_sequence`] with a transform per entry; an alias of
/// [`map_entries`].
pub fn mapping_to_sequence_with<C, B, F>(container: C, transform: F) -> Vec<B>
where
    C: IntoIterator,
    F: FnMut(C::Item) -> B,
{
    map_entries(container, transform)
}
