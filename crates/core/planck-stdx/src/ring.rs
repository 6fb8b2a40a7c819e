//! Fixed-capacity circular buffer addressed through logical cursors.
//!
//! [`RingBuffer`] is the engine behind [`Vector`](crate::vector::Vector),
//! [`Deque`](crate::deque::Deque), [`Array`](crate::array::Array) and
//! [`Map`](crate::map::Map). It owns an inline `[T; N]` and two signed
//! logical cursors, `head` and `tail`, bounding the live range
//! `[head, tail)`. Cursors are not indices: they advance freely in both
//! directions (a `push_front` on a fresh buffer moves `head` to `-1`) and are
//! folded onto a slot by [`physical_slot`](crate::pos::physical_slot) only
//! when an element is touched.
//!
//! # Capacity and eviction
//!
//! The buffer never holds more than `N` elements and never reallocates. A
//! push into a full buffer silently evicts from the opposite end:
//! `push_back` drops the front element, `push_front` drops the back element.
//! Use [`RingBuffer::try_push_back`] and friends to be told instead.
//!
//! # Overflow of the cursors
//!
//! Cursors are [`Position`]s. Before either comes within `N` of the end of
//! the integer range, both are shifted by the same amount so that `head`
//! lands back in `[0, N)`. Every live element keeps its physical slot and the
//! observable contents do not change.
//!
//! # Examples
//!
//! ```
//! use planck_stdx::ring::RingBuffer;
//!
//! let mut ring = RingBuffer::<i32, 4>::new();
//! for v in 0..6 {
//!     ring.push_back(v);
//! }
//! // 0 and 1 were evicted.
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
//!
//! ring.push_front(-1);
//! // 5 was evicted from the back.
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [-1, 2, 3, 4]);
//!
//! let at = ring.cursor_at(1);
//! let next = ring.erase(at);
//! assert_eq!(ring[next], 3);
//! ```

mod iter;

pub use iter::{IntoIter, Iter, IterMut};

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Index, IndexMut};

use crate::cursor::Cursor;
use crate::error::CapacityError;
use crate::pos::{self, Position};

/// A fixed-capacity double-ended circular buffer.
///
/// All `N` slots are default-constructed up front; pushes assign into them
/// and removals reset them to `T::default()`.
///
/// # Type Parameters
///
/// - `T`: The element type
/// - `N`: The capacity, between 1 and [`CAPACITY_LIMIT`](crate::pos::CAPACITY_LIMIT)
pub struct RingBuffer<T, const N: usize> {
    buf: [T; N],
    head: Position,
    tail: Position,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// The fixed capacity.
    pub const CAPACITY: usize = N;

    const CAPACITY_CHECK: () = assert!(
        N > 0 && N <= pos::CAPACITY_LIMIT,
        "ring capacity must be between 1 and CAPACITY_LIMIT"
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    const CAP: Position = N as Position;

    /// Creates a full buffer whose contents are `buf`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_stdx::ring::RingBuffer;
    ///
    /// let ring = RingBuffer::from_array([1, 2, 3]);
    /// assert!(ring.is_full());
    /// assert_eq!(ring[2], 3);
    /// ```
    #[must_use]
    pub const fn from_array(buf: [T; N]) -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf,
            head: 0,
            tail: Self::CAP,
        }
    }

    /// Returns the fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of live elements.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn len(&self) -> usize {
        (self.tail - self.head) as usize
    }

    /// Returns true if the buffer holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true if the next push will evict.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len() == N
    }

    const fn slot(pos: Position) -> usize {
        pos::physical_slot(pos, N)
    }

    fn storage(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Logical position of the element `index` places behind head.
    /// `index` must not exceed `N`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn pos_of(&self, index: usize) -> Position {
        debug_assert!(index <= N);
        self.head + index as Position
    }

    fn slot_of(&self, index: usize) -> usize {
        Self::slot(self.pos_of(index))
    }

    /// Returns a reference to the element at logical `index`, if live.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(&self.buf[self.slot_of(index)])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at logical `index`, if live.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let slot = self.slot_of(index);
            Some(&mut self.buf[slot])
        } else {
            None
        }
    }

    /// Returns the first element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the first element mutably, or `None` if empty.
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the last element mutably, or `None` if empty.
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len().checked_sub(1) {
            Some(i) => self.get_mut(i),
            None => None,
        }
    }

    /// Returns the live range as two slices, front part first.
    ///
    /// The second slice is non-empty only when the live range wraps past the
    /// end of the backing array.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_stdx::ring::RingBuffer;
    ///
    /// let mut ring = RingBuffer::<u8, 4>::new();
    /// ring.push_back(2);
    /// ring.push_back(3);
    /// ring.push_front(1);
    /// assert_eq!(ring.as_slices(), (&[1][..], &[2, 3][..]));
    /// ```
    #[must_use]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let start = Self::slot(self.head);
        let len = self.len();
        if start + len <= N {
            (&self.buf[start..start + len], &[])
        } else {
            let (wrapped, front) = self.buf.split_at(start);
            (front, &wrapped[..start + len - N])
        }
    }

    /// Returns the live range as two mutable slices, front part first.
    #[must_use]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let start = Self::slot(self.head);
        let len = self.len();
        if start + len <= N {
            (&mut self.buf[start..start + len], &mut [])
        } else {
            let (wrapped, front) = self.buf.split_at_mut(start);
            (front, &mut wrapped[..start + len - N])
        }
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    /// Returns a front-to-back iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }

    /// Swaps the elements at logical indices `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(a < len && b < len, "index out of bounds");
        let (a, b) = (self.slot_of(a), self.slot_of(b));
        self.buf.swap(a, b);
    }

    // -----------------------------------------------------------------------
    // Cursors
    // -----------------------------------------------------------------------

    /// Returns a cursor at the first element, or the sentinel if empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<T> {
        if self.is_empty() {
            Cursor::sentinel()
        } else {
            Cursor::new(self.storage(), self.head)
        }
    }

    /// Returns the one-past-the-end cursor, or the sentinel if empty.
    #[must_use]
    pub fn end(&self) -> Cursor<T> {
        if self.is_empty() {
            Cursor::sentinel()
        } else {
            Cursor::new(self.storage(), self.tail)
        }
    }

    /// Returns a cursor at logical `index`, or [`end`](Self::end) if `index`
    /// is not a live element.
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Cursor<T> {
        if index < self.len() {
            Cursor::new(self.storage(), self.pos_of(index))
        } else {
            self.end()
        }
    }

    /// Returns true if `cursor` was taken from this buffer and points at a
    /// live element.
    #[must_use]
    pub fn is_valid(&self, cursor: &Cursor<T>) -> bool {
        cursor.belongs_to(self.storage()) && (self.head..self.tail).contains(&cursor.position())
    }

    /// Returns the logical index `cursor` points at, if it is valid.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn index_of(&self, cursor: &Cursor<T>) -> Option<usize> {
        if self.is_valid(cursor) {
            Some((cursor.position() - self.head) as usize)
        } else {
            None
        }
    }

    /// Dereferences `cursor` if it is valid for this buffer.
    #[must_use]
    pub fn at(&self, cursor: Cursor<T>) -> Option<&T> {
        if self.is_valid(&cursor) {
            Some(&self.buf[cursor.slot(N)])
        } else {
            None
        }
    }

    /// Mutably dereferences `cursor` if it is valid for this buffer.
    #[must_use]
    pub fn at_mut(&mut self, cursor: Cursor<T>) -> Option<&mut T> {
        if self.is_valid(&cursor) {
            Some(&mut self.buf[cursor.slot(N)])
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Cursor bookkeeping
    // -----------------------------------------------------------------------

    fn reset_cursors(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Restores the overflow-safety invariant after a cursor moved.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn resolve_overflow(&mut self) {
        if self.is_empty() {
            self.reset_cursors();
        } else if pos::is_near_overflow(self.head, self.tail, N) {
            let len = self.tail - self.head;
            let old_head = self.head;
            self.head = Self::slot(self.head) as Position;
            self.tail = self.head + len;
            crate::stdx_debug!(
                "ring<{}>: re-centered cursors from {} to {} ({} live)",
                N,
                old_head,
                self.head,
                len
            );
        }
    }
}

impl<T: Default, const N: usize> RingBuffer<T, N> {
    /// Creates an empty buffer with every slot default-constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_stdx::ring::RingBuffer;
    ///
    /// let ring = RingBuffer::<u8, 8>::new();
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.capacity(), 8);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf: core::array::from_fn(|_| T::default()),
            head: 0,
            tail: 0,
        }
    }

    /// Creates a full buffer of `N` default values.
    #[must_use]
    pub fn filled_with_default() -> Self {
        Self::from_array(core::array::from_fn(|_| T::default()))
    }

    /// Appends an element, evicting the front element if the buffer is full.
    pub fn push_back(&mut self, value: T) {
        // When full, tail and head share a slot: this overwrites the front.
        let slot = Self::slot(self.tail);
        self.buf[slot] = value;
        self.tail += 1;
        if self.len() > N {
            self.head += 1;
            crate::stdx_trace!("ring<{}>: full, evicted front element", N);
        }
        self.resolve_overflow();
    }

    /// Prepends an element, evicting the back element if the buffer is full.
    pub fn push_front(&mut self, value: T) {
        self.head -= 1;
        if self.len() > N {
            self.tail -= 1;
            crate::stdx_trace!("ring<{}>: full, evicted back element", N);
        }
        // When full, the new head slot is the slot the evicted back element held.
        let slot = Self::slot(self.head);
        self.buf[slot] = value;
        self.resolve_overflow();
    }

    /// Alias for [`push_back`](Self::push_back).
    pub fn push(&mut self, value: T) {
        self.push_back(value);
    }

    /// Appends an element unless the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the buffer is full.
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        self.push_back(value);
        Ok(())
    }

    /// Prepends an element unless the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the buffer is full.
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        self.push_front(value);
        Ok(())
    }

    /// Removes and returns the first element, or `None` if empty.
    #[must_use]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let slot = Self::slot(self.head);
        let value = mem::take(&mut self.buf[slot]);
        self.head += 1;
        self.resolve_overflow();
        Some(value)
    }

    /// Removes and returns the last element, or `None` if empty.
    #[must_use]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail -= 1;
        let slot = Self::slot(self.tail);
        let value = mem::take(&mut self.buf[slot]);
        self.resolve_overflow();
        Some(value)
    }

    /// Alias for [`pop_front`](Self::pop_front).
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    /// Removes every element and resets the cursors.
    pub fn clear(&mut self) {
        for value in self.iter_mut() {
            *value = T::default();
        }
        self.reset_cursors();
    }

    /// Shortens the buffer to `len` elements, dropping from the back.
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            let _ = self.pop_back();
        }
    }

    /// Resizes to `len` elements (at most `N`), appending defaults or dropping
    /// from the back.
    pub fn resize(&mut self, len: usize) {
        let target = len.min(N);
        while self.len() < target {
            self.push_back(T::default());
        }
        self.truncate(target);
    }

    /// Replaces the contents with `values`. If there are more than `N`, only
    /// the last `N` remain.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.clear();
        for value in values {
            self.push_back(value);
        }
    }

    /// Shifts the live element at `pos` to the back, then takes it.
    fn unlink(&mut self, pos: Position) -> T {
        let last = self.tail - 1;
        let mut at = pos;
        while at != last {
            self.buf.swap(Self::slot(at), Self::slot(at + 1));
            at += 1;
        }
        let value = mem::take(&mut self.buf[Self::slot(last)]);
        self.tail = last;
        self.resolve_overflow();
        value
    }

    /// Removes the element at `cursor`, shifting every later element one step
    /// toward the front. O(len).
    ///
    /// Returns a cursor to the element that now occupies the erased position,
    /// or [`end`](Self::end) if the erased element was the last one. An
    /// invalid or foreign cursor leaves the buffer untouched and returns
    /// `end()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_stdx::ring::RingBuffer;
    ///
    /// let mut ring = RingBuffer::from_array([1, 2, 3, 4, 5]);
    /// let next = ring.erase(ring.cursor_at(2));
    /// assert_eq!(ring[next], 4);
    /// assert_eq!(ring.len(), 4);
    /// ```
    pub fn erase(&mut self, cursor: Cursor<T>) -> Cursor<T> {
        let Some(index) = self.index_of(&cursor) else {
            return self.end();
        };
        let _ = self.unlink(cursor.position());
        self.cursor_at(index)
    }

    /// Removes and returns the element at logical `index`, shifting every
    /// later element toward the front. Returns `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        let pos = self.pos_of(index);
        Some(self.unlink(pos))
    }

    /// Keeps only the elements for which `keep` returns true, preserving
    /// their order. O(len).
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let len = self.len();
        let mut kept = 0;
        for index in 0..len {
            let slot = self.slot_of(index);
            if keep(&self.buf[slot]) {
                if kept != index {
                    let dest = self.slot_of(kept);
                    self.buf.swap(dest, slot);
                }
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// Inserts `value` before `cursor`. See [`insert_iter`](Self::insert_iter).
    pub fn insert(&mut self, cursor: Cursor<T>, value: T) -> Cursor<T> {
        self.insert_iter(cursor, core::iter::once(value))
    }

    /// Inserts `value` before `cursor` unless the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the buffer is full.
    pub fn try_insert(&mut self, cursor: Cursor<T>, value: T) -> Result<Cursor<T>, CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        Ok(self.insert(cursor, value))
    }

    /// Inserts `value` at logical `index` (`index == len()` appends).
    /// Returns `end()` without inserting if `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Cursor<T> {
        if index > self.len() {
            return self.end();
        }
        let cursor = self.cursor_at(index);
        self.insert(cursor, value)
    }

    /// Inserts `values` before `cursor`, which must be a live cursor of this
    /// buffer or its [`end`](Self::end). O(len + count).
    ///
    /// Returns a cursor to the first inserted element that survived, or
    /// `end()` if nothing was inserted. A foreign cursor is rejected and the
    /// buffer is left untouched.
    ///
    /// When the result would exceed `N`:
    /// - inserting before a live element keeps the inserted elements at the
    ///   requested index and drops elements from the back, so the elements
    ///   nearest the front survive;
    /// - inserting at `end()` behaves exactly like repeated
    ///   [`push_back`](Self::push_back), evicting from the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_stdx::ring::RingBuffer;
    ///
    /// let mut ring = RingBuffer::from_array([1, 2, 3, 4]);
    /// let at = ring.cursor_at(1);
    /// ring.insert_iter(at, [8, 9]);
    /// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 8, 9, 2]);
    /// ```
    pub fn insert_iter<I>(&mut self, cursor: Cursor<T>, values: I) -> Cursor<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        if cursor == self.end() {
            return self.append(values);
        }
        let Some(index) = self.index_of(&cursor) else {
            return self.end();
        };
        let count = values.len();
        if count == 0 {
            return cursor;
        }

        let len = self.len();
        let inserted = count.min(N - index);
        let new_len = (len + count).min(N);
        let shifted = new_len - index - inserted;
        let dropped = len - index - shifted;
        if dropped > 0 {
            crate::stdx_trace!(
                "ring<{}>: insert of {} overflowed, dropped {} from the back",
                N,
                count,
                dropped
            );
        }

        self.tail = self.pos_of(new_len);
        for offset in (0..shifted).rev() {
            let from = self.slot_of(index + offset);
            let to = self.slot_of(index + count + offset);
            let value = mem::take(&mut self.buf[from]);
            self.buf[to] = value;
        }
        for (offset, value) in values.take(inserted).enumerate() {
            let slot = self.slot_of(index + offset);
            self.buf[slot] = value;
        }
        self.resolve_overflow();
        self.cursor_at(index)
    }

    fn append<I: Iterator<Item = T>>(&mut self, values: I) -> Cursor<T> {
        let mut pushed = 0usize;
        for value in values {
            self.push_back(value);
            pushed += 1;
        }
        if pushed == 0 {
            return self.end();
        }
        self.cursor_at(self.len() - pushed.min(N))
    }
}

impl<T: Clone, const N: usize> RingBuffer<T, N> {
    /// Overwrites every live element with `value`. Unused capacity is not
    /// touched and the length does not change.
    pub fn fill(&mut self, value: T) {
        for slot in self.iter_mut() {
            slot.clone_from(&value);
        }
    }
}

impl<T: Clone + Default, const N: usize> RingBuffer<T, N> {
    /// Clones `values` in before `cursor`. See [`insert_iter`](Self::insert_iter).
    pub fn insert_slice(&mut self, cursor: Cursor<T>, values: &[T]) -> Cursor<T> {
        self.insert_iter(cursor, values.iter().cloned())
    }

    /// Replaces the contents with clones of `values`.
    pub fn assign_slice(&mut self, values: &[T]) {
        self.assign(values.iter().cloned());
    }
}

impl<T: PartialEq, const N: usize> RingBuffer<T, N> {
    /// Returns true if any live element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

#[cfg(all(test, feature = "std"))]
impl<T: Default, const N: usize> RingBuffer<T, N> {
    /// An empty buffer whose cursors start at `origin` instead of 0.
    fn with_origin(origin: Position) -> Self {
        let mut ring = Self::new();
        ring.head = origin;
        ring.tail = origin;
        ring
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T: Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for RingBuffer<T, N> {
    /// Copies the buffer, re-normalizing the cursors so that `head` lies in
    /// `[0, N)`. Every element keeps its physical slot.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn clone(&self) -> Self {
        let head = Self::slot(self.head) as Position;
        Self {
            buf: self.buf.clone(),
            head,
            tail: head + (self.tail - self.head),
        }
    }
}

impl<T: PartialEq, const N: usize> PartialEq for RingBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for RingBuffer<T, N> {}

impl<T: Hash, const N: usize> Hash for RingBuffer<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Index<usize> for RingBuffer<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        assert!(index < self.len(), "index out of bounds");
        &self.buf[self.slot_of(index)]
    }
}

impl<T, const N: usize> IndexMut<usize> for RingBuffer<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < self.len(), "index out of bounds");
        let slot = self.slot_of(index);
        &mut self.buf[slot]
    }
}

impl<T, const N: usize> Index<Cursor<T>> for RingBuffer<T, N> {
    type Output = T;

    /// Dereferences a cursor without checking that it is in the live range,
    /// like a raw iterator dereference.
    ///
    /// # Panics
    ///
    /// Panics if the cursor was not taken from this buffer.
    fn index(&self, cursor: Cursor<T>) -> &T {
        assert!(cursor.belongs_to(self.storage()), "cursor does not belong to this buffer");
        &self.buf[cursor.slot(N)]
    }
}

impl<T, const N: usize> IndexMut<Cursor<T>> for RingBuffer<T, N> {
    fn index_mut(&mut self, cursor: Cursor<T>) -> &mut T {
        assert!(cursor.belongs_to(self.storage()), "cursor does not belong to this buffer");
        &mut self.buf[cursor.slot(N)]
    }
}

impl<T: Default, const N: usize> FromIterator<T> for RingBuffer<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<T: Default, const N: usize> Extend<T> for RingBuffer<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default, const N: usize, const M: usize> From<[T; M]> for RingBuffer<T, N> {
    /// Pushes every element in order; only the last `N` remain.
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}
