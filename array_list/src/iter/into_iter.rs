use core::{iter::FusedIterator, mem::ManuallyDrop, ptr, slice};

use slots::RawSlots;

use crate::ArrayList;

/// An iterator over owned elements of an [`ArrayList`].
///
/// This is created by [`ArrayList::into_iter`]. Elements that are not visited are dropped with the iterator.
pub struct IntoIter<T> {
    slots: RawSlots<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    #[must_use]
    pub(crate) fn new(list: ArrayList<T>) -> Self {
        let list = ManuallyDrop::new(list);
        // SAFETY:
        // `list` is never dropped, so the slots have exactly one owner from here on.
        let slots = unsafe { ptr::read(&list.slots) };

        Self {
            slots,
            front: 0,
            back: list.len,
        }
    }

    #[must_use]
    #[inline]
    /// Gets the elements that have not been yielded yet.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY:
        // `front <= back <= capacity`, so the offset stays inside the allocation.
        let start = unsafe { self.slots.as_ptr().add(self.front) };
        // SAFETY:
        // Slots `front..back` are initialised and have not been moved out.
        unsafe { slice::from_raw_parts(start, self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY:
        // `front < back <= capacity`, so the offset stays inside the allocation.
        let slot = unsafe { self.slots.as_ptr().add(self.front) };
        // SAFETY:
        // `front < back`, so the slot is initialised. Advancing `front` marks it as moved out.
        let item = unsafe { slot.read() };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY:
        // `back < capacity`, so the offset stays inside the allocation.
        let slot = unsafe { self.slots.as_ptr().add(self.back) };
        // SAFETY:
        // The slot at the old `back - 1` is initialised and is now outside `front..back`.
        Some(unsafe { slot.read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY:
            // `front <= back <= capacity`, so the offset stays inside the allocation.
            unsafe { self.slots.as_ptr().add(self.front) },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY:
        // The remaining elements are initialised and are no longer tracked by `front..back`.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod test {
    use core::cell::Cell;

    use crate::ArrayList;

    #[test]
    fn yields_in_order() {
        let list: ArrayList<_> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut iter = list.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.as_slice(), ["b"]);
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn remainder_tracks_both_ends() {
        let list: ArrayList<u32> = (0..6).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.as_slice(), [0, 1, 2, 3, 4, 5]);

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.as_slice(), [2, 3, 4]);
        assert_eq!(iter.len(), 3);

        assert_eq!(iter.by_ref().rev().collect::<Vec<_>>(), [4, 3, 2]);
        assert!(iter.as_slice().is_empty());
    }

    #[test]
    fn drops_unvisited() {
        struct Counted<'a>(&'a Cell<usize>);
        impl Drop for Counted<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Cell::new(0);
        let mut list = ArrayList::new();
        for _ in 0..4 {
            list.add(Counted(&drops));
        }

        let mut iter = list.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 4);
    }
}
