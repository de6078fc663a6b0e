//! Opt-in method adapter over the free-function core.
//!
//! Importing [`EntryOps`] is the explicit opt-in: nothing is attached to
//! any type until the trait is in scope, and every method delegates to the
//! free functions in `entries` with no behavior of its own.

use crate::entries;
use crate::entry_map::EntryMap;
use core::hash::Hash;

/// Entry operations as methods on any ordered container.
pub trait EntryOps: IntoIterator + Sized {
    /// Method form of [`map_entries`](crate::map_entries).
    fn map_entries<B, F>(self, f: F) -> Vec<B>
    where
        F: FnMut(Self::Item) -> B,
    {
        entries::map_entries(self, f)
    }

    /// Method form of [`entries`](crate::entries).
    fn entries(self) -> Vec<Self::Item> {
        entries::entries(self)
    }

    /// Method form of [`reduce_entries`](crate::reduce_entries).
    fn reduce_entries<A, F>(self, reducer: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        entries::reduce_entries(self, reducer, init)
    }

    /// Method form of [`sequence_to_mapping`](crate::sequence_to_mapping).
    fn to_mapping<K, GK>(self, get_key: GK) -> EntryMap<K, Self::Item>
    where
        K: Eq + Hash,
        GK: FnMut(&Self::Item) -> K,
    {
        entries::sequence_to_mapping(self, get_key)
    }

    /// Method form of
    /// [`sequence_to_mapping_with`](crate::sequence_to_mapping_with).
    fn to_mapping_with<K, V, GK, GV>(self, get_key: GK, get_value: GV) -> EntryMap<K, V>
    where
        K: Eq + Hash,
        GK: FnMut(&Self::Item) -> K,
        GV: FnMut(Self::Item) -> V,
    {
        entries::sequence_to_mapping_with(self, get_key, get_value)
    }
}

impl<C: IntoIterator + Sized> EntryOps for C {}
