//! Forwarding surface shared by the sequence adapters.
//!
//! [`Vector`](crate::vector::Vector), [`Deque`](crate::deque::Deque) and
//! [`Array`](crate::array::Array) are newtypes over
//! [`RingBuffer`](crate::ring::RingBuffer) stored in a field named `ring`.
//! They differ only in which mutating operations they expose; the read side,
//! cursor access and standard trait impls are identical and generated here.

macro_rules! ring_adapter {
    ($name:ident) => {
        impl<T, const N: usize> $name<T, N> {
            /// Returns the number of elements.
            #[must_use]
            pub const fn len(&self) -> usize {
                self.ring.len()
            }

            /// Returns true if there are no elements.
            #[must_use]
            pub const fn is_empty(&self) -> bool {
                self.ring.is_empty()
            }

            /// Returns a reference to the element at `index`, if any.
            #[must_use]
            pub fn get(&self, index: usize) -> Option<&T> {
                self.ring.get(index)
            }

            /// Returns a mutable reference to the element at `index`, if any.
            #[must_use]
            pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                self.ring.get_mut(index)
            }

            /// Returns the first element, or `None` if empty.
            #[must_use]
            pub fn front(&self) -> Option<&T> {
                self.ring.front()
            }

            /// Returns the last element, or `None` if empty.
            #[must_use]
            pub fn back(&self) -> Option<&T> {
                self.ring.back()
            }

            /// Returns the first element mutably, or `None` if empty.
            #[must_use]
            pub fn front_mut(&mut self) -> Option<&mut T> {
                self.ring.front_mut()
            }

            /// Returns the last element mutably, or `None` if empty.
            #[must_use]
            pub fn back_mut(&mut self) -> Option<&mut T> {
                self.ring.back_mut()
            }

            /// Returns the elements as two slices, front part first.
            #[must_use]
            pub fn as_slices(&self) -> (&[T], &[T]) {
                self.ring.as_slices()
            }

            /// Returns the elements as two mutable slices, front part first.
            #[must_use]
            pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
                self.ring.as_mut_slices()
            }

            /// Returns a front-to-back iterator.
            pub fn iter(&self) -> $crate::ring::Iter<'_, T> {
                self.ring.iter()
            }

            /// Returns a front-to-back iterator over mutable references.
            pub fn iter_mut(&mut self) -> $crate::ring::IterMut<'_, T> {
                self.ring.iter_mut()
            }

            /// Returns a cursor at the first element, or the sentinel if empty.
            #[must_use]
            pub fn begin(&self) -> $crate::cursor::Cursor<T> {
                self.ring.begin()
            }

            /// Returns the one-past-the-end cursor, or the sentinel if empty.
            #[must_use]
            pub fn end(&self) -> $crate::cursor::Cursor<T> {
                self.ring.end()
            }

            /// Returns a cursor at `index`, or [`end`](Self::end) if out of range.
            #[must_use]
            pub fn cursor_at(&self, index: usize) -> $crate::cursor::Cursor<T> {
                self.ring.cursor_at(index)
            }

            /// Returns true if `cursor` points at a live element of this container.
            #[must_use]
            pub fn is_valid(&self, cursor: &$crate::cursor::Cursor<T>) -> bool {
                self.ring.is_valid(cursor)
            }

            /// Dereferences `cursor` if it is valid for this container.
            #[must_use]
            pub fn at(&self, cursor: $crate::cursor::Cursor<T>) -> Option<&T> {
                self.ring.at(cursor)
            }

            /// Mutably dereferences `cursor` if it is valid for this container.
            #[must_use]
            pub fn at_mut(&mut self, cursor: $crate::cursor::Cursor<T>) -> Option<&mut T> {
                self.ring.at_mut(cursor)
            }

            /// Swaps the elements at `a` and `b`.
            ///
            /// # Panics
            ///
            /// Panics if either index is out of bounds.
            pub fn swap(&mut self, a: usize, b: usize) {
                self.ring.swap(a, b);
            }
        }

        impl<T: PartialEq, const N: usize> $name<T, N> {
            /// Returns true if any element equals `value`.
            #[must_use]
            pub fn contains(&self, value: &T) -> bool {
                self.ring.contains(value)
            }
        }

        impl<T: Default, const N: usize> Default for $name<T, N> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for $name<T, N> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.ring, f)
            }
        }

        impl<T, const N: usize> core::ops::Index<usize> for $name<T, N> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.ring[index]
            }
        }

        impl<T, const N: usize> core::ops::IndexMut<usize> for $name<T, N> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.ring[index]
            }
        }

        impl<T, const N: usize> core::ops::Index<$crate::cursor::Cursor<T>> for $name<T, N> {
            type Output = T;

            fn index(&self, cursor: $crate::cursor::Cursor<T>) -> &T {
                &self.ring[cursor]
            }
        }

        impl<T, const N: usize> core::ops::IndexMut<$crate::cursor::Cursor<T>> for $name<T, N> {
            fn index_mut(&mut self, cursor: $crate::cursor::Cursor<T>) -> &mut T {
                &mut self.ring[cursor]
            }
        }

        impl<'a, T, const N: usize> IntoIterator for &'a $name<T, N> {
            type Item = &'a T;
            type IntoIter = $crate::ring::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.ring.iter()
            }
        }

        impl<'a, T, const N: usize> IntoIterator for &'a mut $name<T, N> {
            type Item = &'a mut T;
            type IntoIter = $crate::ring::IterMut<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.ring.iter_mut()
            }
        }

        impl<T: Default, const N: usize> IntoIterator for $name<T, N> {
            type Item = T;
            type IntoIter = $crate::ring::IntoIter<T, N>;

            fn into_iter(self) -> Self::IntoIter {
                self.ring.into_iter()
            }
        }
    };
}

pub(crate) use ring_adapter;
