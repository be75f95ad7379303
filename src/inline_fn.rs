//! A type-erased `Fn(A) -> R` that keeps small closures inline.
//!
//! [`InlineFn`] carries its call thunk as a plain function pointer, so
//! calling it is a single indirect call with no vtable load and no pointer
//! chase to reach the captured state. Closures that fit in `N` machine
//! words (and need no more than word alignment) live in the value itself;
//! anything bigger is boxed and only the box pointer is kept inline.
//!
//! ```
//! use std::cell::Cell;
//! use fnbench::InlineFn;
//!
//! let hits = Cell::new(0);
//! let f: InlineFn<'_, u32> = InlineFn::new(|n: u32| hits.set(hits.get() + n));
//! let g = f.clone();
//! f.call(1);
//! g.call(2);
//! assert_eq!(hits.get(), 3);
//! ```

use core::{
    cell::UnsafeCell,
    fmt,
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ptr,
};

/// Inline capacity, in words, used when `N` is left unspecified.
///
/// Two words cover a closure capturing a reference plus one more scalar.
pub const DEFAULT_INLINE_WORDS: usize = 2;

enum Op {
    Clone,
    Drop,
}

pub struct InlineFn<'a, A, R = (), const N: usize = DEFAULT_INLINE_WORDS> {
    call: unsafe fn(*const u8, A) -> R,
    manage: unsafe fn(Op, *mut u8, *mut u8),
    // Captured state may mutate through `&self` (a `Cell` moved in, say).
    buf: UnsafeCell<[MaybeUninit<usize>; N]>,
    // `*const ()`: the captured state may be neither `Send` nor `Sync`.
    _p: PhantomData<(fn(A) -> R, &'a (), *const ())>,
}

impl<'a, A, R, const N: usize> InlineFn<'a, A, R, N> {
    const HAS_ROOM_FOR_A_BOX: () = assert!(N >= 1, "`InlineFn` needs at least one word");

    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Clone + 'a,
    {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_ROOM_FOR_A_BOX;

        // SAFETY: each branch stores exactly the type its thunks expect, and
        // only after checking that it fits.
        unsafe {
            if Self::fits_inline::<F>() {
                Self::store(f, call_inline::<F, A, R>, manage::<F>)
            } else {
                Self::store(Box::new(f), call_boxed::<F, A, R>, manage::<Box<F>>)
            }
        }
    }

    /// Whether a closure of type `F` is stored without a heap allocation.
    pub const fn fits_inline<F>() -> bool {
        mem::size_of::<F>() <= mem::size_of::<[usize; N]>()
            && mem::align_of::<F>() <= mem::align_of::<usize>()
    }

    /// # Safety
    /// `T` must fit inline, and `call`/`manage` must treat the buffer as a `T`.
    unsafe fn store<T>(
        value: T,
        call: unsafe fn(*const u8, A) -> R,
        manage: unsafe fn(Op, *mut u8, *mut u8),
    ) -> Self {
        debug_assert!(Self::fits_inline::<T>());

        let mut buf = [MaybeUninit::uninit(); N];
        ptr::write(buf.as_mut_ptr().cast::<T>(), value);

        InlineFn {
            call,
            manage,
            buf: UnsafeCell::new(buf),
            _p: PhantomData,
        }
    }

    #[inline]
    pub fn call(&self, arg: A) -> R {
        // SAFETY: `call` was paired with the contents of `buf` in `store`.
        unsafe { (self.call)(self.buf.get().cast_const().cast(), arg) }
    }
}

impl<A, R, const N: usize> Clone for InlineFn<'_, A, R, N> {
    fn clone(&self) -> Self {
        let mut buf = [MaybeUninit::uninit(); N];
        // SAFETY: `Op::Clone` only reads from the source; the destination is
        // a fresh buffer of the same size.
        unsafe {
            (self.manage)(
                Op::Clone,
                self.buf.get().cast(),
                buf.as_mut_ptr().cast(),
            );
        }

        InlineFn {
            call: self.call,
            manage: self.manage,
            buf: UnsafeCell::new(buf),
            _p: PhantomData,
        }
    }
}

impl<A, R, const N: usize> Drop for InlineFn<'_, A, R, N> {
    fn drop(&mut self) {
        let data = self.buf.get_mut().as_mut_ptr().cast();
        // SAFETY: `buf` holds a live value that is never touched again.
        unsafe { (self.manage)(Op::Drop, data, ptr::null_mut()) }
    }
}

impl<A, R, const N: usize> fmt::Debug for InlineFn<'_, A, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineFn")
            .field("inline_words", &N)
            .finish_non_exhaustive()
    }
}

unsafe fn call_inline<F: Fn(A) -> R, A, R>(data: *const u8, arg: A) -> R {
    (*data.cast::<F>())(arg)
}

unsafe fn call_boxed<F: Fn(A) -> R, A, R>(data: *const u8, arg: A) -> R {
    (**data.cast::<Box<F>>())(arg)
}

unsafe fn manage<T: Clone>(op: Op, src: *mut u8, dst: *mut u8) {
    match op {
        Op::Clone => ptr::write(dst.cast::<T>(), (*src.cast::<T>()).clone()),
        Op::Drop => ptr::drop_in_place(src.cast::<T>()),
    }
}
