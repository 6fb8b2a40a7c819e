//! Fixed-capacity sorted set backed by an inline array.
//!
//! [`Set`] keeps its elements sorted and unique in a contiguous array, so
//! lookups are a binary search and iteration is in ascending order. Unlike
//! the ring-backed containers, unused slots are left uninitialized and `T`
//! need not implement `Default`.
//!
//! Insertion is O(len) because later elements shift to make room. A full set
//! refuses new elements rather than evicting: which element to drop from a
//! sorted set has no natural answer.
//!
//! # Examples
//!
//! ```
//! use planck_stdx::set::Set;
//!
//! let mut ports = Set::<u16, 8>::new();
//! assert!(ports.insert(443));
//! assert!(ports.insert(22));
//! assert!(ports.insert(80));
//! assert!(!ports.insert(22));
//!
//! assert_eq!(ports.as_slice(), &[22, 80, 443]);
//! assert!(ports.contains(&80));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::MaybeUninit;

use crate::DEFAULT_CAPACITY;
use crate::error::CapacityError;

/// A sorted set of at most `N` unique elements.
///
/// # Type Parameters
///
/// - `T`: The element type, ordered by [`Ord`]
/// - `N`: The maximum number of elements (capacity)
pub struct Set<T, const N: usize = DEFAULT_CAPACITY> {
    data: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> Set<T, N> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the set cannot accept another element.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the elements in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Elements 0..self.len are initialized, and the pointer from
        // `self.data` is valid for `self.len` elements.
        unsafe { core::slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns an iterator in ascending order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero the length first so a panicking destructor cannot cause a
        // double drop.
        self.len = 0;
        // SAFETY: Elements 0..len were initialized and are no longer
        // reachable through `self`.
        unsafe {
            core::ptr::drop_in_place(core::ptr::slice_from_raw_parts_mut(
                self.data.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Writes `value` at `index`, shifting `index..len` one slot right.
    fn insert_at(&mut self, index: usize, value: T) {
        crate::assert_unsafe_precondition!(
            index <= self.len && self.len < N,
            "Set::insert_at: index {} with len {} and capacity {}",
            index,
            self.len,
            N
        );
        // SAFETY: The precondition above holds because callers only pass a
        // binary-search insertion point on a non-full set. Elements
        // index..len are initialized and slot `len` is in bounds, so the
        // shifted range stays inside `data`.
        unsafe {
            let ptr = self.data.as_mut_ptr().add(index);
            core::ptr::copy(ptr, ptr.add(1), self.len - index);
            ptr.cast::<T>().write(value);
        }
        self.len += 1;
    }

    /// Reads out the element at `index`, shifting later elements left.
    fn remove_at(&mut self, index: usize) -> T {
        crate::assert_unsafe_precondition!(
            index < self.len,
            "Set::remove_at: index {} with len {}",
            index,
            self.len
        );
        // SAFETY: The element at `index` is initialized. It is read out, then
        // the initialized tail index+1..len moves down over it.
        unsafe {
            let ptr = self.data.as_mut_ptr().add(index);
            let value = ptr.cast::<T>().read();
            core::ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            self.len -= 1;
            value
        }
    }
}

impl<T: Ord, const N: usize> Set<T, N> {
    /// Inserts `value` if it is not present and the set is not full.
    ///
    /// Returns true if the value was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            crate::stdx_trace!("set<{}>: full, rejected insert", N);
            return false;
        }
        match self.as_slice().binary_search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.insert_at(index, value);
                true
            }
        }
    }

    /// Inserts `value`, telling apart a full set from a duplicate.
    ///
    /// Returns `Ok(true)` if inserted and `Ok(false)` if already present.
    ///
    /// # Errors
    ///
    /// Returns the value inside a [`CapacityError`] if the set is full and
    /// does not already contain it.
    pub fn try_insert(&mut self, value: T) -> Result<bool, CapacityError<T>> {
        match self.as_slice().binary_search(&value) {
            Ok(_) => Ok(false),
            Err(_) if self.is_full() => Err(CapacityError::new(value)),
            Err(index) => {
                self.insert_at(index, value);
                Ok(true)
            }
        }
    }

    /// Returns true if `value` is in the set.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().binary_search(value).is_ok()
    }

    /// Removes `value`. Returns true if it was present.
    pub fn erase(&mut self, value: &T) -> bool {
        self.remove(value).is_some()
    }

    /// Removes `value` and returns the stored element.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.as_slice().binary_search(value).ok()?;
        Some(self.remove_at(index))
    }
}

impl<T, const N: usize> Drop for Set<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for Set<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Set<T, N> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self {
            copy.data[copy.len].write(value.clone());
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Set<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for Set<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for Set<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len.cmp(&other.len) {
            Ordering::Equal => self.as_slice().partial_cmp(other.as_slice()),
            unequal => Some(unequal),
        }
    }
}

impl<T: Ord, const N: usize> Ord for Set<T, N> {
    /// Orders by size first, then lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.as_slice().cmp(other.as_slice()))
    }
}

impl<T: Hash, const N: usize> Hash for Set<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Set<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord, const N: usize> FromIterator<T> for Set<T, N> {
    /// Collects up to `N` distinct values; the rest are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> Extend<T> for Set<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Set<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::format;
    use std::rc::Rc;
    use std::string::String;

    use super::*;

    #[test]
    fn insert_keeps_sorted_unique() {
        let mut set = Set::<i32, 8>::new();
        for v in [5, 1, 4, 1, 3, 5, 2] {
            set.insert(v);
        }
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&5));
    }

    #[test]
    fn full_set_rejects() {
        let mut set: Set<i32, 2> = [3, 1].into_iter().collect();
        assert!(set.is_full());
        assert!(!set.insert(2));
        assert_eq!(set.try_insert(2).unwrap_err().into_inner(), 2);
        assert_eq!(set.try_insert(3), Ok(false));
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    #[test]
    fn erase_and_remove() {
        let mut set: Set<i32, 4> = [1, 2, 3].into_iter().collect();
        assert!(set.erase(&2));
        assert!(!set.erase(&2));
        assert_eq!(set.remove(&3), Some(3));
        assert_eq!(set.as_slice(), &[1]);
        assert!(!set.contains(&3));
    }

    #[test]
    fn ordering_is_size_first() {
        let small: Set<i32, 4> = [9].into_iter().collect();
        let large: Set<i32, 4> = [1, 2].into_iter().collect();
        assert!(small < large);

        let a: Set<i32, 4> = [1, 2].into_iter().collect();
        let b: Set<i32, 4> = [1, 3].into_iter().collect();
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Set::<String, 4>::new();
        a.insert(String::from("b"));
        a.insert(String::from("a"));
        let b = a.clone();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(b.len(), 2);
        assert_eq!(format!("{b:?}"), r#"{"a", "b"}"#);
    }

    #[test]
    fn drops_live_elements_only() {
        let tracker = Rc::new(());
        {
            let mut set = Set::<(u8, Rc<()>), 8>::new();
            set.insert((1, Rc::clone(&tracker)));
            set.insert((2, Rc::clone(&tracker)));
            assert_eq!(Rc::strong_count(&tracker), 3);
            let _ = set.remove(&(1, Rc::clone(&tracker)));
            assert_eq!(Rc::strong_count(&tracker), 2);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    // Without the check the shift below writes past `data`.
    #[test]
    #[cfg(any(debug_assertions, planck_hardened))]
    #[should_panic(expected = "Set::insert_at")]
    fn insert_at_checks_bounds() {
        let mut set = Set::<i32, 1>::new();
        set.insert(1);
        set.insert_at(1, 2);
    }

    #[test]
    #[cfg(any(debug_assertions, planck_hardened))]
    #[should_panic(expected = "Set::remove_at")]
    fn remove_at_checks_bounds() {
        let mut set = Set::<i32, 2>::new();
        set.insert(1);
        let _ = set.remove_at(1);
    }
}
