//! Error type for the fallible (`try_*`) container operations.
//!
//! The default container operations never fail: a push into a full container
//! evicts from the opposite end. Callers that would rather detect overflow use
//! the `try_*` variants, which refuse the value and hand it back inside a
//! [`CapacityError`].

use core::fmt;

/// The container was full; the rejected value is returned to the caller.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    value: T,
}

impl<T> CapacityError<T> {
    /// Wraps the value that could not be stored.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the rejected value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns a reference to the rejected value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError { .. }")
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("capacity overflow")
    }
}

impl<T> core::error::Error for CapacityError<T> {}
