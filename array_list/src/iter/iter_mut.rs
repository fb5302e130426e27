use core::{iter::FusedIterator, slice};

/// An iterator over mutable references to the elements of an [`ArrayList`](crate::ArrayList).
///
/// This is created by [`ArrayList::iter_mut`](crate::ArrayList::iter_mut).
pub struct IterMut<'a, T> {
    items: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    #[must_use]
    #[inline]
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self {
            items: items.iter_mut(),
        }
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] while there are elements left to visit.
    pub fn has_next(&self) -> bool {
        self.items.len() != 0
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[cfg(test)]
mod test {
    use crate::ArrayList;

    #[test]
    fn mutates_in_place() {
        let mut list: ArrayList<_> = ["a", "b"].into_iter().map(String::from).collect();
        let mut iter = list.iter_mut();
        assert!(iter.has_next());
        iter.next().unwrap().push('!');
        iter.next().unwrap().push('?');
        assert!(!iter.has_next());

        assert_eq!(list.as_slice(), ["a!", "b?"]);
    }
}
