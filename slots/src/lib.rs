#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

mod errors;
mod fmt;
pub use errors::AllocateError;

mod alloc {
    extern crate alloc;
    pub use alloc::alloc::{alloc as allocate, dealloc as deallocate, handle_alloc_error};
}

/// An owned, contiguous run of `capacity` slots that can each hold a `T`.
///
/// The slots are never read, written or dropped by this type; it only owns the allocation.
/// Tracking which slots are initialised is the job of the structure built on top.
pub struct RawSlots<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawSlots<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// The largest number of slots an allocation of `T`s can hold.
    pub const MAX_CAPACITY: usize = if Self::IS_ZST {
        usize::MAX
    } else {
        isize::MAX.unsigned_abs() / mem::size_of::<T>()
    };

    #[must_use]
    #[inline]
    /// Creates an empty run without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: if Self::IS_ZST { usize::MAX } else { 0 },
            _phantom: PhantomData,
        }
    }

    /// Attempts to allocate a run of `capacity` slots.
    ///
    /// Zero-sized types never allocate and report the requested capacity.
    ///
    /// # Errors
    /// If `capacity` exceeds [`Self::MAX_CAPACITY`] or allocation fails, this will return an [`AllocateError`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocateError> {
        Ok(Self {
            ptr: Self::try_allocate(capacity)?,
            capacity,
            _phantom: PhantomData,
        })
    }

    #[must_use]
    #[inline]
    /// Allocates a run of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        AllocateError::unwrap_result(Self::try_with_capacity(capacity))
    }

    #[must_use]
    #[inline]
    /// Gets the number of slots in the run.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    #[inline]
    /// Gets a pointer to the first slot.
    ///
    /// The pointer is dangling if nothing has been allocated.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[must_use]
    #[inline]
    /// Calculates the capacity the next growth event will produce.
    ///
    /// The run grows by half plus one slot (`capacity * 3 / 2 + 1`), clamped to [`Self::MAX_CAPACITY`].
    pub const fn grown_capacity(capacity: usize) -> usize {
        let grown = match capacity.checked_mul(3) {
            Some(tripled) => tripled / 2 + 1,
            None => usize::MAX,
        };

        if grown > Self::MAX_CAPACITY {
            Self::MAX_CAPACITY
        } else {
            grown
        }
    }

    /// Attempts to grow the run by one growth step, moving the first `len` slots into the new allocation.
    ///
    /// A new block is allocated, the slots are copied across in order and the old block is freed.
    /// On failure the run is left untouched.
    ///
    /// # Safety
    /// `len` must not be greater than [`Self::capacity`].
    ///
    /// # Errors
    /// If the run is already at [`Self::MAX_CAPACITY`] or allocation fails, this will return an [`AllocateError`].
    pub unsafe fn try_grow(&mut self, len: usize) -> Result<(), AllocateError> {
        debug_assert!(len <= self.capacity);

        let capacity = Self::grown_capacity(self.capacity);
        if capacity <= self.capacity {
            return Err(AllocateError::new_overflow(self.capacity));
        }

        let ptr = Self::try_allocate(capacity)?;
        if !Self::IS_ZST {
            // SAFETY:
            // The old block is valid for `len` reads (safety condition) and the new block holds at least
            // `capacity > len` slots. They are separate allocations so cannot overlap.
            unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), len) };
        }

        let old_ptr = mem::replace(&mut self.ptr, ptr);
        let old_capacity = mem::replace(&mut self.capacity, capacity);
        // SAFETY:
        // The old block was allocated by `try_allocate` with `old_capacity` and is no longer referenced.
        unsafe { Self::deallocate(old_ptr, old_capacity) };

        debug_assert!(self.capacity > old_capacity);
        Ok(())
    }

    #[inline]
    /// Grows the run by one growth step, moving the first `len` slots into the new allocation.
    ///
    /// # Safety
    /// `len` must not be greater than [`Self::capacity`].
    pub unsafe fn grow(&mut self, len: usize) {
        // SAFETY:
        // `len <= capacity` (safety condition).
        let result = unsafe { self.try_grow(len) };
        AllocateError::unwrap_result(result);
    }

    fn try_allocate(capacity: usize) -> Result<NonNull<T>, AllocateError> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(NonNull::dangling());
        }
        if capacity > Self::MAX_CAPACITY {
            return Err(AllocateError::new_overflow(Self::MAX_CAPACITY));
        }

        let layout = Layout::array::<T>(capacity)?;
        // SAFETY:
        // `layout` has a non-zero size as `T` is not zero-sized and `capacity` is not zero.
        let ptr = unsafe { alloc::allocate(layout) };
        NonNull::new(ptr.cast()).ok_or_else(|| AllocateError::new_alloc(layout))
    }

    /// Frees a block returned by `try_allocate`.
    ///
    /// # Safety
    /// `ptr` must have come from `try_allocate` with the same `capacity` and must not be used afterwards.
    unsafe fn deallocate(ptr: NonNull<T>, capacity: usize) {
        if Self::IS_ZST || capacity == 0 {
            return;
        }

        // SAFETY:
        // This layout was successfully calculated when allocating.
        let layout = unsafe { Layout::array::<T>(capacity).unwrap_unchecked() };
        // SAFETY:
        // The block was allocated with `layout` by the global allocator (safety condition).
        unsafe { alloc::deallocate(ptr.as_ptr().cast(), layout) };
    }
}

impl<T> Default for RawSlots<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        // SAFETY:
        // `self.ptr` is either dangling with a capacity of zero or was allocated with `self.capacity`.
        unsafe { Self::deallocate(self.ptr, self.capacity) };
    }
}

// SAFETY:
// `RawSlots` owns its allocation, so it can move between threads when `T` can.
unsafe impl<T> Send for RawSlots<T> where T: Send {}
// SAFETY:
// `RawSlots` only hands out raw pointers, so sharing it is as safe as sharing `T`.
unsafe impl<T> Sync for RawSlots<T> where T: Sync {}

#[cfg(test)]
mod test {
    use super::RawSlots;

    #[test]
    fn growth_policy() {
        let mut capacity = 16;
        let mut seen = Vec::new();
        for _ in 0..4 {
            capacity = RawSlots::<u32>::grown_capacity(capacity);
            seen.push(capacity);
        }
        assert_eq!(seen, [25, 38, 58, 88]);

        assert_eq!(RawSlots::<u32>::grown_capacity(0), 1);
        assert_eq!(RawSlots::<u32>::grown_capacity(1), 2);
        assert_eq!(RawSlots::<u32>::grown_capacity(2), 4);
        assert_eq!(RawSlots::<u32>::grown_capacity(4), 7);
    }

    #[test]
    fn growth_is_clamped() {
        let max = RawSlots::<u64>::MAX_CAPACITY;
        assert_eq!(RawSlots::<u64>::grown_capacity(max), max);
        assert_eq!(RawSlots::<u64>::grown_capacity(max - 1), max);
        assert_eq!(RawSlots::<()>::grown_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn grow_moves_slots() {
        let mut slots = RawSlots::<String>::with_capacity(2);
        // SAFETY:
        // Both slots are inside the allocation.
        unsafe { slots.as_ptr().write(String::from("a")) };
        // SAFETY:
        // As above.
        let second = unsafe { slots.as_ptr().add(1) };
        // SAFETY:
        // As above.
        unsafe { second.write(String::from("b")) };
        // SAFETY:
        // Both slots were written.
        unsafe { slots.grow(2) };
        assert_eq!(slots.capacity(), 4);

        // SAFETY:
        // The prefix was moved into the new block.
        let first = unsafe { slots.as_ptr().read() };
        // SAFETY:
        // As above.
        let second = unsafe { slots.as_ptr().add(1) };
        // SAFETY:
        // As above.
        let second = unsafe { second.read() };
        assert_eq!([first, second], ["a", "b"]);
    }

    #[test]
    fn zero_sized() {
        let mut slots = RawSlots::<()>::with_capacity(3);
        assert_eq!(slots.capacity(), 3);
        // SAFETY:
        // `3 <= capacity`.
        unsafe { slots.grow(3) };
        assert_eq!(slots.capacity(), 5);
        assert_eq!(RawSlots::<()>::new().capacity(), usize::MAX);
    }

    #[test]
    fn full_run_cannot_grow() {
        let mut slots = RawSlots::<()>::new();
        // SAFETY:
        // No slots are in use.
        let error = unsafe { slots.try_grow(0) }.unwrap_err();
        assert!(error.is_capacity_overflow());
        assert_eq!(slots.capacity(), usize::MAX);
    }

    #[test]
    fn oversized_request_fails() {
        let error = RawSlots::<u64>::try_with_capacity(usize::MAX).unwrap_err();
        assert!(error.is_capacity_overflow());
    }
}
