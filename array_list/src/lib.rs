#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

use core::{cmp::Ordering, mem, ptr, slice};

mod cmp;
mod errors;
mod fmt;
pub mod iter;
mod sort;

pub use errors::{IndexOutOfBoundsError, InvalidCapacityError, NoSuchElementError};
use iter::{Iter, IterMut};
pub use slots::AllocateError;
use slots::RawSlots;

/// The capacity of a list created with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A contiguous, growable list.
///
/// Elements live in slots `0..len`; the slots from `len` up to the capacity are uninitialised and never read.
/// The capacity only ever grows, by half plus one slot each time the list runs out of room.
///
/// The list has no internal synchronisation. Sharing and sending follow the usual rules for owned collections.
pub struct ArrayList<T> {
    slots: RawSlots<T>,
    len: usize,
}

impl<T> ArrayList<T> {
    #[must_use]
    #[inline]
    /// Creates an empty [`ArrayList`] with a capacity of [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            slots: RawSlots::with_capacity(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty [`ArrayList`] with room for `capacity` elements before growing.
    ///
    /// # Errors
    /// If `capacity` is zero or more than a `T` allocation can hold, this will return an
    /// [`InvalidCapacityError`].
    ///
    /// # Panics
    /// Calls [`handle_alloc_error`](std::alloc::handle_alloc_error) if the allocator fails.
    ///
    /// # Examples
    /// ```
    /// # use array_list::ArrayList;
    /// let list = ArrayList::<u8>::with_capacity(4).unwrap();
    /// assert_eq!(list.capacity(), 4);
    ///
    /// assert!(ArrayList::<u8>::with_capacity(0).is_err());
    /// assert!(ArrayList::<u64>::with_capacity(usize::MAX).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, InvalidCapacityError> {
        if capacity == 0 {
            return Err(InvalidCapacityError::new(capacity));
        }

        match RawSlots::try_with_capacity(capacity) {
            Ok(slots) => Ok(Self { slots, len: 0 }),
            Err(error) if error.is_capacity_overflow() => Err(InvalidCapacityError::new(capacity)),
            Err(error) => error.handle(),
        }
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the list holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements the list can hold before it next grows.
    pub const fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[must_use]
    #[inline]
    /// Gets the elements as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY:
        // Slots `0..len` are initialised and the pointer is aligned and non-null, even when dangling.
        unsafe { slice::from_raw_parts(self.slots.as_ptr(), self.len) }
    }

    #[must_use]
    #[inline]
    /// Gets the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY:
        // As in `as_slice`, and the list is borrowed mutably.
        unsafe { slice::from_raw_parts_mut(self.slots.as_ptr(), self.len) }
    }

    /// Grows the slots when `needed` would not fit.
    fn try_grow_for(&mut self, needed: usize) -> Result<(), AllocateError> {
        if needed <= self.slots.capacity() {
            return Ok(());
        }

        // SAFETY:
        // `len` never exceeds the capacity.
        unsafe { self.slots.try_grow(self.len) }
    }

    /// Attempts to add `value` to the back of the list.
    ///
    /// # Errors
    /// If the list needs to grow and allocation fails, this will return an [`AllocateError`] holding `value`.
    pub fn try_add(&mut self, value: T) -> Result<(), AllocateError<T>> {
        if let Err(error) = self.try_grow_for(self.len + 1) {
            return Err(error.with_value(value));
        }

        // SAFETY:
        // `len < capacity` after growing, so the offset stays inside the allocation.
        let slot = unsafe { self.slots.as_ptr().add(self.len) };
        // SAFETY:
        // Slot `len` is uninitialised and nothing else points to it.
        unsafe { slot.write(value) };
        self.len += 1;

        self.debug_check();
        Ok(())
    }

    #[inline]
    /// Adds `value` to the back of the list.
    ///
    /// # Examples
    /// ```
    /// # use array_list::ArrayList;
    /// let mut list = ArrayList::with_capacity(1).unwrap();
    /// list.add('a');
    /// list.add('b');
    /// assert_eq!(list.as_slice(), ['a', 'b']);
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn add(&mut self, value: T) {
        AllocateError::unwrap_result(self.try_add(value));
    }

    /// Inserts `value` at `index`, shifting the elements from `index` onwards one place towards the back.
    ///
    /// Inserting at `index == len` adds to the back of the list.
    /// The list grows beforehand whenever the insertion fills or would overfill it.
    ///
    /// # Errors
    /// If `index > len`, this will return an [`IndexOutOfBoundsError`] holding `value` and the list is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use array_list::ArrayList;
    /// let mut list: ArrayList<_> = [1, 2, 3].into_iter().collect();
    /// list.insert(1, 9).unwrap();
    /// assert_eq!(list.as_slice(), [1, 9, 2, 3]);
    ///
    /// let error = list.insert(7, 4).unwrap_err();
    /// assert_eq!(error.into_value(), 4);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBoundsError<T>> {
        if index == self.len {
            self.add(value);
            return Ok(());
        }
        if index > self.len {
            return Err(IndexOutOfBoundsError::new(index, self.len).with_value(value));
        }

        // Grows once the insertion would leave no free slot, one step earlier than `add`
        AllocateError::unwrap_result(self.try_grow_for(self.len + 2));

        let ptr = self.slots.as_ptr();
        // SAFETY:
        // `index < len < capacity`, so the offset stays inside the allocation.
        let src = unsafe { ptr.add(index) };
        // SAFETY:
        // `index + 1 <= len < capacity`, so the offset stays inside the allocation.
        let dst = unsafe { ptr.add(index + 1) };
        // SAFETY:
        // The source `index..len` is initialised and the destination `index + 1..=len` is inside the allocation.
        // `ptr::copy` handles the overlap.
        unsafe { ptr::copy(src, dst, self.len - index) };
        // SAFETY:
        // The value at `index` has been moved out of the way.
        unsafe { src.write(value) };
        self.len += 1;

        self.debug_check();
        Ok(())
    }

    /// Replaces the element at `index` with `value`, returning the element that was there.
    ///
    /// # Errors
    /// If `index >= len`, this will return an [`IndexOutOfBoundsError`] holding `value`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBoundsError<T>> {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(IndexOutOfBoundsError::new(index, len).with_value(value)),
        }
    }

    /// Removes and returns the element at `index`, shifting the elements after it one place towards the front.
    ///
    /// The capacity is unchanged.
    ///
    /// # Errors
    /// If `index >= len`, this will return an [`IndexOutOfBoundsError`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::ArrayList;
    /// let mut list: ArrayList<_> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(list.remove_at(0), Ok("a"));
    /// assert_eq!(list.as_slice(), ["b", "c"]);
    /// assert!(list.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBoundsError> {
        if index >= self.len {
            return Err(IndexOutOfBoundsError::new(index, self.len));
        }

        let ptr = self.slots.as_ptr();
        // SAFETY:
        // `index < len <= capacity`, so the offset stays inside the allocation.
        let dst = unsafe { ptr.add(index) };
        // SAFETY:
        // `index + 1 <= len <= capacity`, so the offset stays inside the allocation or one past its end.
        let src = unsafe { ptr.add(index + 1) };
        // SAFETY:
        // `index < len`, so the slot is initialised. It is treated as uninitialised from here on.
        let value = unsafe { dst.read() };
        // SAFETY:
        // `index + 1..len` is initialised and the destination `index..len - 1` is inside the allocation.
        unsafe { ptr::copy(src, dst, self.len - index - 1) };
        self.len -= 1;

        self.debug_check();
        Ok(value)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns [`true`] if an element was removed and [`false`] (leaving the list unchanged) otherwise.
    ///
    /// # Examples
    /// ```
    /// # use array_list::ArrayList;
    /// let mut list: ArrayList<_> = [Some(1), None, Some(2), None].into_iter().collect();
    /// assert!(list.remove_value(&None));
    /// assert_eq!(list.as_slice(), [Some(1), Some(2), None]);
    /// assert!(!list.remove_value(&Some(3)));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.iter().position(|item| item == value) else {
            return false;
        };

        self.remove_at(index).is_ok()
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    /// If `index >= len`, this will return an [`IndexOutOfBoundsError`].
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBoundsError> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| IndexOutOfBoundsError::new(index, self.len))
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// If `index >= len`, this will return an [`IndexOutOfBoundsError`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBoundsError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| IndexOutOfBoundsError::new(index, len))
    }

    /// Drops every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        // Set first so a panicking destructor cannot lead to a double drop
        self.len = 0;
        // SAFETY:
        // The elements were initialised and are no longer counted by `len`.
        unsafe { ptr::drop_in_place(elements) };
    }

    /// Sorts the list in place with `compare`.
    ///
    /// This is a quicksort that partitions around the middle element of each range. It is not stable;
    /// it makes `O(n log n)` comparisons on average and `O(n²)` in the worst case.
    ///
    /// `compare` must be a total order. If it is not, the order of the elements is unspecified and the sort may
    /// panic, but no element is lost or duplicated.
    ///
    /// # Examples
    /// ```
    /// # use array_list::ArrayList;
    /// let mut list: ArrayList<_> = [3, 1, 2].into_iter().collect();
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.as_slice(), [3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quick_sort(self.as_mut_slice(), &mut compare);
    }

    #[inline]
    /// Sorts the list in place in ascending order.
    ///
    /// See [`Self::sort_by`].
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    #[inline]
    /// Sorts the list in place by the key `f` extracts.
    ///
    /// See [`Self::sort_by`].
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    #[must_use]
    #[inline]
    /// Creates an iterator over references to the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    #[must_use]
    #[inline]
    /// Creates an iterator over mutable references to the elements of the list.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.len <= self.slots.capacity());
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert!(self.len <= self.slots.capacity());
        assert!(self.slots.capacity() > 0);
    }
}

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // The slots free themselves afterwards
        self.clear();
    }
}

impl<T> Clone for ArrayList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut list = Self {
            slots: RawSlots::with_capacity(self.capacity()),
            len: 0,
        };
        list.extend(self.iter().cloned());
        list
    }
}
