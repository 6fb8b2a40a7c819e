//! Logical-position cursors into a ring buffer.
//!
//! A [`Cursor`] is the ring buffer's equivalent of a random-access iterator:
//! a pair of (storage identity, logical position). It does not borrow the
//! buffer, so it can be held across mutations and handed back to
//! [`RingBuffer::erase`](crate::ring::RingBuffer::erase) or
//! [`RingBuffer::insert`](crate::ring::RingBuffer::insert). Dereferencing goes
//! through the owning buffer ([`RingBuffer::at`](crate::ring::RingBuffer::at)
//! or indexing by cursor), which maps the position onto a slot.
//!
//! Cursors order by logical position only, so a cursor that has wrapped past
//! the end of the backing array still compares greater than one that has not,
//! even though both may name the same physical slot.
//!
//! # Examples
//!
//! ```
//! use planck_stdx::ring::RingBuffer;
//!
//! let mut ring = RingBuffer::<u32, 3>::new();
//! for v in 1..=5 {
//!     ring.push_back(v);
//! }
//!
//! let mut it = ring.begin();
//! let end = ring.end();
//! let mut seen = 0;
//! while it != end {
//!     seen += ring[it];
//!     it.inc();
//! }
//! assert_eq!(seen, 3 + 4 + 5);
//! assert_eq!(end - ring.begin(), 3);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::pos::{self, Position};

/// A position within a specific ring buffer.
///
/// The default cursor is the *sentinel*: it belongs to no buffer and is what
/// `begin()` and `end()` return for an empty container. It is only useful for
/// comparison.
pub struct Cursor<T> {
    storage: *const T,
    pos: Position,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(storage: *const T, pos: Position) -> Self {
        Self { storage, pos }
    }

    /// Returns the sentinel cursor.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self {
            storage: ptr::null(),
            pos: 0,
        }
    }

    /// Returns true if this is the sentinel cursor of an empty container.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.storage.is_null()
    }

    /// Returns the logical position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Returns the physical slot this cursor names in a buffer of `capacity`.
    #[must_use]
    pub const fn slot(&self, capacity: usize) -> usize {
        pos::physical_slot(self.pos, capacity)
    }

    /// Returns a cursor `n` positions away (negative `n` moves toward head).
    #[must_use]
    pub const fn offset(self, n: Position) -> Self {
        Self {
            storage: self.storage,
            pos: self.pos.wrapping_add(n),
        }
    }

    /// Advances by one position and returns the advanced cursor.
    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Retreats by one position and returns the retreated cursor.
    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Advances by one position, returning the cursor as it was before.
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Retreats by one position, returning the cursor as it was before.
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }

    pub(crate) fn belongs_to(&self, storage: *const T) -> bool {
        !self.storage.is_null() && ptr::eq(self.storage, storage)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("Cursor(sentinel)")
        } else {
            f.debug_struct("Cursor")
                .field("storage", &self.storage)
                .field("pos", &self.pos)
                .finish()
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.storage, other.storage) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    /// Orders by logical position. Two cursors at the same position into
    /// different buffers are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.pos.cmp(&other.pos) {
            Ordering::Equal if !ptr::eq(self.storage, other.storage) => None,
            ord => Some(ord),
        }
    }
}

impl<T> Add<Position> for Cursor<T> {
    type Output = Self;

    fn add(self, n: Position) -> Self {
        self.offset(n)
    }
}

impl<T> Sub<Position> for Cursor<T> {
    type Output = Self;

    fn sub(self, n: Position) -> Self {
        self.offset(n.wrapping_neg())
    }
}

impl<T> AddAssign<Position> for Cursor<T> {
    fn add_assign(&mut self, n: Position) {
        self.pos = self.pos.wrapping_add(n);
    }
}

impl<T> SubAssign<Position> for Cursor<T> {
    fn sub_assign(&mut self, n: Position) {
        self.pos = self.pos.wrapping_sub(n);
    }
}

impl<T> Sub for Cursor<T> {
    type Output = Position;

    /// Signed logical distance between two cursors.
    fn sub(self, rhs: Self) -> Position {
        self.pos.wrapping_sub(rhs.pos)
    }
}
