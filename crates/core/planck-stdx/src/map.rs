//! Fixed-capacity associative container with insertion-order iteration.
//!
//! [`Map`] stores `(K, V)` entries in a [`RingBuffer`] in the order they were
//! inserted and finds keys by linear scan. That is the right trade-off for
//! the small `N` it is meant for: no hashing, no ordering requirement on `K`
//! beyond equality, and iteration order is predictable.
//!
//! A new key inserted into a full map evicts the oldest entry.
//!
//! # Examples
//!
//! ```
//! use planck_stdx::map::Map;
//!
//! let mut irq_names = Map::<u8, &str, 4>::new();
//! irq_names.insert(1, "keyboard");
//! irq_names.insert(12, "mouse");
//!
//! let (_, inserted) = irq_names.insert(1, "ignored");
//! assert!(!inserted);
//! assert_eq!(irq_names.get(&1), Some(&"keyboard"));
//!
//! *irq_names.get_or_insert_default(4) = "serial";
//! assert_eq!(irq_names.keys().copied().collect::<Vec<_>>(), [1, 12, 4]);
//! ```

use core::borrow::Borrow;
use core::fmt;

use crate::DEFAULT_CAPACITY;
use crate::cursor::Cursor;
use crate::ring::RingBuffer;

/// A map of at most `N` entries, kept in insertion order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Map<K, V, const N: usize = DEFAULT_CAPACITY> {
    ring: RingBuffer<(K, V), N>,
}

impl<K, V, const N: usize> Map<K, V, N> {
    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Iterates over `(key, value)` pairs, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.ring.iter().map(|(k, v)| (k, v))
    }

    /// Iterates over `(key, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&K, &mut V)> + ExactSizeIterator {
        self.ring.iter_mut().map(|(k, v)| (&*k, v))
    }

    /// Iterates over the keys, oldest first.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.ring.iter().map(|(k, _)| k)
    }

    /// Iterates over the values, oldest first.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.ring.iter().map(|(_, v)| v)
    }

    /// Iterates mutably over the values, oldest first.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.ring.iter_mut().map(|(_, v)| v)
    }

    /// Returns a cursor at the oldest entry, or the sentinel if empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<(K, V)> {
        self.ring.begin()
    }

    /// Returns the one-past-the-end cursor. [`find`](Self::find) returns it
    /// for a missing key.
    #[must_use]
    pub fn end(&self) -> Cursor<(K, V)> {
        self.ring.end()
    }

    /// Returns the entry `cursor` points at, if it is valid.
    #[must_use]
    pub fn entry(&self, cursor: Cursor<(K, V)>) -> Option<(&K, &V)> {
        self.ring.at(cursor).map(|(k, v)| (k, v))
    }

    /// Returns the entry `cursor` points at with a mutable value.
    #[must_use]
    pub fn entry_mut(&mut self, cursor: Cursor<(K, V)>) -> Option<(&K, &mut V)> {
        self.ring.at_mut(cursor).map(|(k, v)| (&*k, v))
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.ring.iter().position(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
    }

    /// Returns a cursor at the entry for `key`, or [`end`](Self::end).
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Cursor<(K, V)>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.position(key) {
            Some(index) => self.ring.cursor_at(index),
            None => self.ring.end(),
        }
    }

    /// Returns true if the map has an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        self.ring.get(index).map(|(_, v)| v)
    }

    /// Returns the value for `key` mutably.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        self.ring.get_mut(index).map(|(_, v)| v)
    }
}

impl<K: PartialEq, V, const N: usize> Map<K, V, N>
where
    K: Default,
    V: Default,
{
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::new(),
        }
    }

    /// Inserts `value` under `key` if the key is not present.
    ///
    /// Returns a cursor at the entry for `key` and whether an insertion took
    /// place. An existing entry is left untouched. If the map is full, the
    /// oldest entry is evicted to make room.
    pub fn insert(&mut self, key: K, value: V) -> (Cursor<(K, V)>, bool) {
        if let Some(index) = self.position(&key) {
            return (self.ring.cursor_at(index), false);
        }
        self.ring.push_back((key, value));
        (self.ring.cursor_at(self.len() - 1), true)
    }

    /// Returns the value for `key`, inserting `V::default()` first if the key
    /// is not present.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V {
        let index = match self.position(&key) {
            Some(index) => index,
            None => {
                self.ring.push_back((key, V::default()));
                self.len() - 1
            }
        };
        &mut self.ring[index].1
    }

    /// Removes the entry for `key`. Returns true if there was one.
    pub fn erase_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        self.ring.remove(index).map(|(_, v)| v)
    }

    /// Removes the entry at `cursor` and returns a cursor to the next entry.
    pub fn erase(&mut self, cursor: Cursor<(K, V)>) -> Cursor<(K, V)> {
        self.ring.erase(cursor)
    }

    /// Removes the entry at insertion-order `index`.
    pub fn erase_at(&mut self, index: usize) -> Cursor<(K, V)> {
        let cursor = self.ring.cursor_at(index);
        self.ring.erase(cursor)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain<F: FnMut(&K, &V) -> bool>(&mut self, mut keep: F) {
        self.ring.retain(|(k, v)| keep(k, v));
    }
}

impl<K: PartialEq + Default, V: Default, const N: usize> Default for Map<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for Map<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq + Default, V: Default, const N: usize> Extend<(K, V)> for Map<K, V, N> {
    /// Inserts each pair; pairs whose key is already present are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: PartialEq + Default, V: Default, const N: usize> FromIterator<(K, V)> for Map<K, V, N> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
