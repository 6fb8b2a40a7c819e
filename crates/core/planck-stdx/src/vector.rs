//! Fixed-capacity vector.
//!
//! [`Vector`] exposes the back-end operations of a
//! [`RingBuffer`]: it grows at the back, supports positional insert and
//! erase, and never allocates. Pushing onto a full vector evicts the oldest
//! (front) element; use [`Vector::try_push_back`] to refuse instead.
//!
//! # Examples
//!
//! ```
//! use planck_stdx::vector::Vector;
//!
//! let mut v = Vector::<i32, 4>::new();
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(v.cursor_at(1), 2);
//! assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! assert_eq!(v.pop_back(), Some(3));
//! assert_eq!(v.len(), 2);
//! ```

use crate::DEFAULT_CAPACITY;
use crate::cursor::Cursor;
use crate::error::CapacityError;
use crate::ring::RingBuffer;

/// A vector backed by inline storage for exactly `N` elements.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize = DEFAULT_CAPACITY> {
    ring: RingBuffer<T, N>,
}

crate::adapter::ring_adapter!(Vector);

impl<T, const N: usize> Vector<T, N> {
    /// The fixed capacity.
    pub const CAPACITY: usize = N;

    /// Returns the fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns true if the next push will evict.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.ring.is_full()
    }
}

impl<T: Default, const N: usize> Vector<T, N> {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::new(),
        }
    }

    /// Appends an element. If the vector is full, the first element is
    /// evicted to make room.
    pub fn push_back(&mut self, value: T) {
        self.ring.push_back(value);
    }

    /// Appends an element unless the vector is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_stdx::vector::Vector;
    ///
    /// let mut v = Vector::<u8, 1>::new();
    /// assert!(v.try_push_back(1).is_ok());
    /// let err = v.try_push_back(2).unwrap_err();
    /// assert_eq!(err.into_inner(), 2);
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.ring.try_push_back(value)
    }

    /// Removes and returns the last element, or `None` if empty.
    #[must_use]
    pub fn pop_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    /// Inserts `value` before `cursor`. If the vector is full, the last
    /// element is dropped (or the first, when inserting at `end()`).
    ///
    /// Returns a cursor to the inserted element.
    pub fn insert(&mut self, cursor: Cursor<T>, value: T) -> Cursor<T> {
        self.ring.insert(cursor, value)
    }

    /// Inserts every element of `values` before `cursor`.
    pub fn insert_iter<I>(&mut self, cursor: Cursor<T>, values: I) -> Cursor<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.ring.insert_iter(cursor, values)
    }

    /// Inserts `value` at `index`, shifting later elements back.
    pub fn insert_at(&mut self, index: usize, value: T) -> Cursor<T> {
        self.ring.insert_at(index, value)
    }

    /// Inserts `value` before `cursor` unless the vector is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the vector is full.
    pub fn try_insert(&mut self, cursor: Cursor<T>, value: T) -> Result<Cursor<T>, CapacityError<T>> {
        self.ring.try_insert(cursor, value)
    }

    /// Removes the element at `cursor` and returns a cursor to its successor.
    pub fn erase(&mut self, cursor: Cursor<T>) -> Cursor<T> {
        self.ring.erase(cursor)
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.ring.remove(index)
    }

    /// Replaces the contents with `values`; only the last `N` are kept.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.ring.assign(values);
    }

    /// Resizes to `len` (at most `N`) elements, filling with defaults.
    pub fn resize(&mut self, len: usize) {
        self.ring.resize(len);
    }

    /// Shortens the vector to `len` elements.
    pub fn truncate(&mut self, len: usize) {
        self.ring.truncate(len);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.ring.retain(keep);
    }
}

impl<T: Clone + Default, const N: usize> Vector<T, N> {
    /// Creates a vector holding clones of `values` (the last `N` if longer).
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        let mut v = Self::new();
        v.assign_slice(values);
        v
    }

    /// Clones `values` in before `cursor`.
    pub fn insert_slice(&mut self, cursor: Cursor<T>, values: &[T]) -> Cursor<T> {
        self.ring.insert_slice(cursor, values)
    }

    /// Replaces the contents with clones of `values`.
    pub fn assign_slice(&mut self, values: &[T]) {
        self.ring.assign_slice(values);
    }
}

impl<T: Default, const N: usize> FromIterator<T> for Vector<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: iter.into_iter().collect(),
        }
    }
}

impl<T: Default, const N: usize> Extend<T> for Vector<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

impl<T: Default, const N: usize, const M: usize> From<[T; M]> for Vector<T, N> {
    fn from(values: [T; M]) -> Self {
        Self { ring: values.into() }
    }
}
