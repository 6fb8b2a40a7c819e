//! Checks guarding the raw element shifts of [`Set`](crate::set::Set).
//!
//! `Set` keeps its elements in `[MaybeUninit<T>; N]` and moves them with
//! `ptr::copy` on insert and remove. Those copies are only in bounds while
//! the insertion point is at most `len`, the set has a free slot, and a
//! removed index names an initialized element. The ring-backed containers
//! need none of this: their storage is always fully initialized.
//!
//! | Build configuration | Result |
//! |---------------------|--------|
//! | Debug (`debug_assertions`) | Panics on failure |
//! | Release + `planck_hardened` cfg | Panics on failure |
//! | Release (default) | Compiled away (condition still type-checked) |

/// Checks a precondition of an `unsafe` block that follows it.
///
/// A violation means the following raw pointer work would leave inline
/// storage or read an uninitialized slot. Plain logic invariants belong in
/// `debug_assert!`.
///
/// # Examples
///
/// ```
/// use planck_stdx::assert_unsafe_precondition;
/// let (index, len, capacity) = (2, 3, 4);
/// assert_unsafe_precondition!(
///     index <= len && len < capacity,
///     "shift of {}..{} leaves the inline storage",
///     index,
///     len,
/// );
/// ```
#[macro_export]
macro_rules! assert_unsafe_precondition {
    ($cond:expr $(,)?) => {
        #[cfg(any(debug_assertions, planck_hardened))]
        {
            if !$cond {
                panic!(
                    "unsafe precondition violated: {}",
                    stringify!($cond),
                );
            }
        }
        #[cfg(not(any(debug_assertions, planck_hardened)))]
        {
            if false {
                let _ = $cond;
            }
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        #[cfg(any(debug_assertions, planck_hardened))]
        {
            if !$cond {
                panic!($($arg)+);
            }
        }
        #[cfg(not(any(debug_assertions, planck_hardened)))]
        {
            if false {
                let _ = $cond;
            }
        }
    };
}
