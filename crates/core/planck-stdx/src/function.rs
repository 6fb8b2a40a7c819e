//! Inline type-erased callable.
//!
//! [`Function`] stores a closure or function pointer in a fixed 16-byte,
//! pointer-aligned buffer and reaches it through a table of three function
//! pointers (call, clone, drop) monomorphized for the stored type, in the
//! manner of a [`RawWakerVTable`](core::task::RawWakerVTable). Nothing is
//! boxed: a callable that does not fit the buffer is a compile-time error.
//!
//! The callable takes exactly one argument. Pass a tuple for several, or `()`
//! for none.
//!
//! # Examples
//!
//! ```
//! use planck_stdx::function::Function;
//!
//! let offset = 10;
//! let add = Function::new(|(a, b): (i32, i32)| a + b + offset);
//! assert_eq!(add.call((1, 2)), Some(13));
//!
//! let empty: Function<'_, (i32, i32), i32> = Function::empty();
//! assert_eq!(empty.call((1, 2)), None);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr;

/// Size in bytes of the inline buffer.
pub const INLINE_SIZE: usize = 16;

const INLINE_WORDS: usize = INLINE_SIZE / mem::size_of::<usize>();

#[repr(C)]
struct Storage {
    words: [MaybeUninit<usize>; INLINE_WORDS],
}

impl Storage {
    const fn uninit() -> Self {
        Self {
            words: [MaybeUninit::uninit(); INLINE_WORDS],
        }
    }
}

crate::static_assert!(mem::size_of::<Storage>() == INLINE_SIZE);

struct VTable<A, R> {
    call: unsafe fn(*const Storage, A) -> R,
    clone: unsafe fn(*const Storage, *mut Storage),
    drop: unsafe fn(*mut Storage),
}

impl<A, R> Clone for VTable<A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, R> Copy for VTable<A, R> {}

/// # Safety
///
/// `storage` must hold an initialized `F`.
unsafe fn call_erased<F: Fn(A) -> R, A, R>(storage: *const Storage, arg: A) -> R {
    // SAFETY: The caller guarantees `storage` holds an initialized `F`, and
    // `Inline::<F>::FITS` guarantees it is suitably sized and aligned.
    let f = unsafe { &*storage.cast::<F>() };
    f(arg)
}

/// # Safety
///
/// `src` must hold an initialized `F`; `dst` must be writable and hold no
/// live value.
unsafe fn clone_erased<F: Clone>(src: *const Storage, dst: *mut Storage) {
    // SAFETY: Upheld by the caller as documented above.
    unsafe {
        let f = &*src.cast::<F>();
        dst.cast::<F>().write(f.clone());
    }
}

/// # Safety
///
/// `storage` must hold an initialized `F`, which is dead afterwards.
unsafe fn drop_erased<F>(storage: *mut Storage) {
    // SAFETY: Upheld by the caller as documented above.
    unsafe { ptr::drop_in_place(storage.cast::<F>()) }
}

struct Inline<F>(PhantomData<F>);

impl<F> Inline<F> {
    const FITS: () = assert!(
        mem::size_of::<F>() <= mem::size_of::<Storage>()
            && mem::align_of::<F>() <= mem::align_of::<Storage>(),
        "callable does not fit the inline buffer of Function"
    );
}

/// A nullable, clonable callable `A -> R` stored inline.
///
/// `Function` is neither `Send` nor `Sync`, since the stored closure may not
/// be.
pub struct Function<'a, A, R> {
    storage: Storage,
    vtable: Option<VTable<A, R>>,
    _marker: PhantomData<(&'a (), *const (), fn(A) -> R)>,
}

impl<'a, A, R> Function<'a, A, R> {
    /// Stores `f`.
    ///
    /// Fails to compile if `F` is larger than [`INLINE_SIZE`] bytes or more
    /// strictly aligned than a pointer.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Clone + 'a,
    {
        let () = Inline::<F>::FITS;
        let mut storage = Storage::uninit();
        // SAFETY: `FITS` checked that `F` fits and is aligned within `Storage`.
        unsafe { ptr::from_mut(&mut storage).cast::<F>().write(f) };
        Self {
            storage,
            vtable: Some(VTable {
                call: call_erased::<F, A, R>,
                clone: clone_erased::<F>,
                drop: drop_erased::<F>,
            }),
            _marker: PhantomData,
        }
    }

    /// Returns a `Function` holding nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            storage: Storage::uninit(),
            vtable: None,
            _marker: PhantomData,
        }
    }

    /// Stores a plain function pointer.
    #[must_use]
    pub fn from_fn_ptr(f: fn(A) -> R) -> Self
    where
        A: 'a,
        R: 'a,
    {
        Self::new(f)
    }

    /// Calls the stored callable, or returns `None` if there is none.
    pub fn call(&self, arg: A) -> Option<R> {
        let vtable = self.vtable?;
        // SAFETY: `vtable` is only `Some` while `storage` holds the callable
        // it was built for.
        Some(unsafe { (vtable.call)(&raw const self.storage, arg) })
    }

    /// Calls the stored callable, or returns `R::default()` if there is none.
    pub fn call_or_default(&self, arg: A) -> R
    where
        R: Default,
    {
        self.call(arg).unwrap_or_default()
    }

    /// Returns true if a callable is stored.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.vtable.is_some()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.vtable.is_none()
    }

    /// Drops the stored callable, leaving `self` empty.
    pub fn clear(&mut self) {
        if let Some(vtable) = self.vtable.take() {
            // SAFETY: The vtable was taken, so the callable is dropped
            // exactly once and never reached again.
            unsafe { (vtable.drop)(&raw mut self.storage) };
        }
    }

    /// Replaces the stored callable with `f`.
    pub fn set<F>(&mut self, f: F)
    where
        F: Fn(A) -> R + Clone + 'a,
    {
        *self = Self::new(f);
    }

    /// Replaces `self` with `other`, returning the previous value.
    pub fn replace(&mut self, other: Self) -> Self {
        mem::replace(self, other)
    }

    /// Moves the callable out, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<A, R> Default for Function<'_, A, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, R> Clone for Function<'_, A, R> {
    fn clone(&self) -> Self {
        let mut copy = Self::empty();
        if let Some(vtable) = self.vtable {
            // SAFETY: `self.storage` holds the callable `vtable` was built
            // for, and `copy.storage` holds nothing yet.
            unsafe { (vtable.clone)(&raw const self.storage, &raw mut copy.storage) };
            copy.vtable = Some(vtable);
        }
        copy
    }
}

impl<A, R> Drop for Function<'_, A, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, A: 'a, R: 'a> From<fn(A) -> R> for Function<'a, A, R> {
    fn from(f: fn(A) -> R) -> Self {
        Self::from_fn_ptr(f)
    }
}

impl<A, R> fmt::Debug for Function<'_, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("is_some", &self.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::cell::Cell;
    use std::format;
    use std::rc::Rc;

    use super::*;

    fn double(x: u32) -> u32 {
        x * 2
    }

    #[test]
    fn calls_closure_with_captures() {
        let base = 5u64;
        let f = Function::new(move |x: u64| x + base);
        assert!(f.is_some());
        assert_eq!(f.call(1), Some(6));
    }

    #[test]
    fn borrows_environment() {
        let hits = Cell::new(0);
        let f = Function::new(|()| hits.set(hits.get() + 1));
        f.call(());
        f.call(());
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn empty_function() {
        let f: Function<'_, u32, u32> = Function::default();
        assert!(f.is_none());
        assert_eq!(f.call(1), None);
        assert_eq!(f.call_or_default(1), 0);
        assert_eq!(format!("{f:?}"), "Function { is_some: false, .. }");
    }

    #[test]
    fn function_pointers() {
        let f = Function::from_fn_ptr(double);
        assert_eq!(f.call(21), Some(42));
        let g: Function<'_, u32, u32> = (double as fn(u32) -> u32).into();
        assert_eq!(g.call(4), Some(8));
    }

    #[test]
    fn clone_shares_nothing_but_captures() {
        let counter = Rc::new(());
        let captured = Rc::clone(&counter);
        let f = Function::new(move |()| Rc::strong_count(&captured));
        assert_eq!(Rc::strong_count(&counter), 2);
        let g = f.clone();
        assert_eq!(Rc::strong_count(&counter), 3);
        drop(f);
        assert_eq!(g.call(()), Some(2));
        drop(g);
        assert_eq!(Rc::strong_count(&counter), 1);
    }

    #[test]
    fn clear_take_replace() {
        let token = Rc::new(());
        let held = Rc::clone(&token);
        let mut f = Function::new(move |x: i32| {
            let _keep = &held;
            x + 1
        });

        let taken = f.take();
        assert!(f.is_none());
        assert_eq!(taken.call(1), Some(2));

        let previous = f.replace(taken);
        assert!(previous.is_none());
        assert_eq!(f.call(2), Some(3));

        f.clear();
        assert!(f.is_none());
        assert_eq!(Rc::strong_count(&token), 1);

        f.set(|x| x * 10);
        assert_eq!(f.call(3), Some(30));
    }

    #[test]
    fn fits_two_words() {
        let (a, b) = (3usize, 4usize);
        let f = Function::new(move |()| a * b);
        assert_eq!(f.call(()), Some(12));
    }
}
