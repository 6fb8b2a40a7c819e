//! Heap-free, fixed-capacity containers built on a cursor-addressed ring buffer.
//!
//! Every container in this crate stores its elements inline in an array whose
//! size is a const generic, never allocates, and keeps working when full: a
//! push into a full container evicts an element instead of growing or
//! panicking. They are meant for code that runs without an allocator (kernels,
//! early boot, firmware, interrupt handlers) but wants the shape of the
//! standard collections.
//!
//! # Overview
//!
//! - [`ring::RingBuffer`] - the engine: a double-ended circular buffer with
//!   signed logical cursors that survive wraparound and integer overflow
//! - [`vector::Vector`] - push and pop at the back, positional insert/erase
//! - [`deque::Deque`] - push and pop at both ends
//! - [`array::Array`] - up to `N` elements, length fixed at construction
//! - [`map::Map`] - small associative container in insertion order
//! - [`set::Set`] - sorted unique elements with binary search
//! - [`function::Function`] - inline type-erased callable
//!
//! [`cursor::Cursor`] is the iterator-like position type shared by the
//! ring-backed containers. Rust iterators ([`ring::Iter`] and friends) are
//! available as well.
//!
//! # Overflow policy
//!
//! | Operation on a full container | Result |
//! |-------------------------------|--------|
//! | `push_back` | front element evicted |
//! | `push_front` | back element evicted |
//! | `insert` before a live element | back element(s) dropped |
//! | `insert` at `end()` | same as `push_back` |
//! | `Map::insert` of a new key | oldest entry evicted |
//! | `Set::insert` | rejected |
//! | any `try_*` | [`error::CapacityError`] holding the value |
//!
//! # Examples
//!
//! ```
//! use planck_stdx::deque::Deque;
//! use planck_stdx::vector::Vector;
//!
//! // Keep the last four samples.
//! let mut recent = Deque::<u16, 4>::new();
//! for sample in [10, 20, 30, 40, 50] {
//!     recent.push_back(sample);
//! }
//! assert_eq!(recent.front(), Some(&20));
//!
//! let mut v: Vector<u8> = Vector::new();
//! assert_eq!(v.capacity(), planck_stdx::DEFAULT_CAPACITY);
//! v.push_back(1);
//! assert!(v.try_push_back(2).is_ok());
//! ```
//!
//! # Diagnostics
//!
//! Eviction and cursor re-centering are reported through the [`log`] module's
//! hook. Install a sink with [`log::set_log_fn`] to see them.
//!
//! # Features
//!
//! - `std` (default): only used to run the host test suite; the library itself
//!   is always `no_std`.

#![no_std]

pub mod log;

mod adapter;
pub mod array;
pub mod cursor;
pub mod deque;
pub mod error;
pub mod function;
pub mod map;
pub mod pos;
pub mod ring;
pub mod safety;
pub mod set;
pub mod static_assert;
pub mod vector;

pub use cursor::Cursor;
pub use error::CapacityError;

/// Capacity used by [`Vector`](vector::Vector), [`Deque`](deque::Deque),
/// [`Map`](map::Map) and [`Set`](set::Set) when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

static_assert!(DEFAULT_CAPACITY > 0 && DEFAULT_CAPACITY <= pos::CAPACITY_LIMIT);
