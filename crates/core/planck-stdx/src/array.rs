//! Fixed-length array with ring-buffer cursors.
//!
//! [`Array`] has a length fixed at construction, at most `N`. It shares the
//! cursor and iteration surface of the other adapters but exposes nothing
//! that changes its length.

use crate::ring::RingBuffer;

/// An array of at most `N` elements whose length never changes after
/// construction.
///
/// # Examples
///
/// ```
/// use planck_stdx::array::Array;
///
/// let mut a = Array::<u8, 4>::new();
/// assert_eq!(a.len(), 4);
/// a.fill(7);
/// a[0] = 1;
/// assert_eq!(a.as_slice(), &[1, 7, 7, 7]);
///
/// let short = Array::<u8, 8>::from([1, 2, 3]);
/// assert_eq!(short.len(), 3);
/// assert_eq!(short.capacity(), 8);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    ring: RingBuffer<T, N>,
}

crate::adapter::ring_adapter!(Array);

impl<T, const N: usize> Array<T, N> {
    /// Wraps `values` without copying element by element.
    #[must_use]
    pub const fn from_array(values: [T; N]) -> Self {
        Self {
            ring: RingBuffer::from_array(values),
        }
    }

    /// Returns the number of slots, which may exceed [`len`](Self::len).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the elements as one slice.
    ///
    /// An array is built from slot 0 and never shifts, so its live range is
    /// always a prefix of the backing array.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        let (front, back) = self.ring.as_slices();
        debug_assert!(back.is_empty());
        front
    }

    /// Returns the elements as one mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let (front, back) = self.ring.as_mut_slices();
        debug_assert!(back.is_empty());
        front
    }
}

impl<T: Default, const N: usize> Array<T, N> {
    /// Creates an array of `N` default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::filled_with_default(),
        }
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.ring.fill(value);
    }
}

struct Fits<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> Fits<M, N> {
    const CHECK: () = assert!(M <= N, "initializer is longer than the array");
}

impl<T: Default, const N: usize, const M: usize> From<[T; M]> for Array<T, N> {
    /// Builds an array of length `M`. Fails to compile if `M > N`.
    fn from(values: [T; M]) -> Self {
        let () = Fits::<M, N>::CHECK;
        values.into_iter().collect()
    }
}

impl<T: Default, const N: usize> FromIterator<T> for Array<T, N> {
    /// Builds an array from the first `N` items; the rest are not consumed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: iter.into_iter().take(N).collect(),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn new_is_full_of_defaults() {
        let a = Array::<i32, 3>::new();
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
        assert_eq!(a.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn fill_and_index() {
        let mut a = Array::<i32, 3>::new();
        a.fill(5);
        a[1] = 6;
        *a.back_mut().unwrap() = 7;
        assert_eq!(a.as_slice(), &[5, 6, 7]);
        assert_eq!(a.front(), Some(&5));
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn swap_and_slice_mutation() {
        let mut a = Array::from_array([1, 2, 3]);
        a.swap(0, 2);
        a.as_mut_slice()[1] = 20;
        assert_eq!(a.as_slice(), &[3, 20, 1]);
        assert!(a.contains(&20));
    }

    #[test]
    fn cursors_span_all_elements() {
        let a = Array::from_array([1, 2, 3, 4]);
        assert_eq!(a.end() - a.begin(), 4);
        assert_eq!(a[a.cursor_at(2)], 3);
        assert_eq!(a.at(a.end()), None);
    }

    #[test]
    fn debug_and_equality() {
        let a = Array::from_array([1, 2]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "[1, 2]");
    }

    #[test]
    fn shorter_initializer_keeps_its_length() {
        let mut a = Array::<u8, 8>::from([1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.capacity(), 8);
        assert!(!a.is_empty());
        a.fill(9);
        assert_eq!(a.as_slice(), &[9, 9, 9]);
        assert_eq!(a.end() - a.begin(), 3);
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn empty_initializer() {
        let a = Array::<u8, 4>::from([]);
        assert!(a.is_empty());
        assert_eq!(a.as_slice(), &[] as &[u8]);
        assert_eq!(a.begin(), a.end());
    }

    #[test]
    fn collect_takes_at_most_capacity() {
        let a: Array<u32, 3> = (10..20).collect();
        assert_eq!(a.as_slice(), &[10, 11, 12]);
        let b: Array<u32, 3> = (0..2).collect();
        assert_eq!(b.as_slice(), &[0, 1]);
    }
}
