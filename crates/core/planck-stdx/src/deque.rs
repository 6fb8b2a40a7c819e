//! Fixed-capacity double-ended queue.
//!
//! [`Deque`] exposes both ends of a [`RingBuffer`]. A push at one end of a
//! full deque evicts from the other end, which makes it a natural bounded
//! history: `push_back` everything and the oldest entries fall off the front.

use crate::DEFAULT_CAPACITY;
use crate::cursor::Cursor;
use crate::error::CapacityError;
use crate::ring::RingBuffer;

/// A double-ended queue backed by inline storage for `N` elements.
///
/// # Examples
///
/// ```
/// use planck_stdx::deque::Deque;
///
/// let mut history = Deque::<&str, 2>::new();
/// history.push_back("a");
/// history.push_back("b");
/// history.push_back("c");
/// assert_eq!(history.front(), Some(&"b"));
///
/// history.push_front("z");
/// assert_eq!(history.back(), Some(&"b"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Deque<T, const N: usize = DEFAULT_CAPACITY> {
    ring: RingBuffer<T, N>,
}

crate::adapter::ring_adapter!(Deque);

impl<T, const N: usize> Deque<T, N> {
    /// Returns true if the next push will evict.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.ring.is_full()
    }
}

impl<T: Default, const N: usize> Deque<T, N> {
    /// Creates an empty deque.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::new(),
        }
    }

    /// Appends an element, evicting the front element if full.
    pub fn push_back(&mut self, value: T) {
        self.ring.push_back(value);
    }

    /// Prepends an element, evicting the back element if full.
    pub fn push_front(&mut self, value: T) {
        self.ring.push_front(value);
    }

    /// Appends an element unless the deque is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the deque is full.
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.ring.try_push_back(value)
    }

    /// Prepends an element unless the deque is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the deque is full.
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.ring.try_push_front(value)
    }

    /// Removes and returns the first element.
    #[must_use]
    pub fn pop_front(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    /// Removes and returns the last element.
    #[must_use]
    pub fn pop_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    /// Inserts `value` before `cursor`.
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

    /// Inserts `value` at `index`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Cursor<T> {
        self.ring.insert_at(index, value)
    }

    /// Inserts `value` before `cursor` unless the deque is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the deque is full.
    pub fn try_insert(&mut self, cursor: Cursor<T>, value: T) -> Result<Cursor<T>, CapacityError<T>> {
        self.ring.try_insert(cursor, value)
    }

    /// Removes the element at `cursor`.
    pub fn erase(&mut self, cursor: Cursor<T>) -> Cursor<T> {
        self.ring.erase(cursor)
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.ring.remove(index)
    }

    /// Replaces the contents with `values`.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.ring.assign(values);
    }

    /// Resizes to `len` (at most `N`) elements.
    pub fn resize(&mut self, len: usize) {
        self.ring.resize(len);
    }

    /// Shortens the deque to `len` elements, dropping from the back.
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

impl<T: Clone + Default, const N: usize> Deque<T, N> {
    /// Clones `values` in before `cursor`.
    pub fn insert_slice(&mut self, cursor: Cursor<T>, values: &[T]) -> Cursor<T> {
        self.ring.insert_slice(cursor, values)
    }

    /// Replaces the contents with clones of `values`.
    pub fn assign_slice(&mut self, values: &[T]) {
        self.ring.assign_slice(values);
    }
}

impl<T: Default, const N: usize> FromIterator<T> for Deque<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: iter.into_iter().collect(),
        }
    }
}

impl<T: Default, const N: usize> Extend<T> for Deque<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

impl<T: Default, const N: usize, const M: usize> From<[T; M]> for Deque<T, N> {
    fn from(values: [T; M]) -> Self {
        Self { ring: values.into() }
    }
}
