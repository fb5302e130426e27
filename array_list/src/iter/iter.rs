use core::iter::FusedIterator;

use crate::NoSuchElementError;

/// A forward iterator over references to the elements of an [`ArrayList`](crate::ArrayList).
///
/// This is created by [`ArrayList::iter`](crate::ArrayList::iter).
///
/// The iterator is a snapshot: it walks the elements as they were when it was created. The list is borrowed for
/// the iterator's lifetime, so it cannot change underneath it and there is no concurrent-modification check.
///
/// # Examples
/// ```
/// # use array_list::{ArrayList, NoSuchElementError};
/// let list: ArrayList<_> = [1, 2].into_iter().collect();
/// let mut iter = list.iter();
///
/// assert!(iter.has_next());
/// assert_eq!(iter.try_next(), Ok(&1));
/// assert_eq!(iter.try_next(), Ok(&2));
/// assert!(!iter.has_next());
/// assert_eq!(iter.try_next(), Err(NoSuchElementError));
/// ```
pub struct Iter<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> Iter<'a, T> {
    #[must_use]
    #[inline]
    pub(crate) const fn new(items: &'a [T]) -> Self {
        Self { items, cursor: 0 }
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] while there are elements left to visit.
    pub const fn has_next(&self) -> bool {
        self.cursor < self.items.len()
    }

    /// Returns the element under the cursor and advances past it.
    ///
    /// # Errors
    /// If every element has been visited, this will return a [`NoSuchElementError`].
    pub fn try_next(&mut self) -> Result<&'a T, NoSuchElementError> {
        let item = self.items.get(self.cursor).ok_or(NoSuchElementError)?;
        self.cursor += 1;

        debug_assert!(self.cursor <= self.items.len());
        Ok(item)
    }

    #[must_use]
    #[inline]
    /// Gets the elements that have not been visited yet.
    pub fn remainder(&self) -> &'a [T] {
        &self.items[self.cursor..]
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// Manually implemented to avoid a `Clone` bound on `T`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            cursor: self.cursor,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod test {
    use crate::{ArrayList, NoSuchElementError};

    #[test]
    fn stays_exhausted() {
        let list: ArrayList<u8> = ArrayList::new();
        let mut iter = list.iter();
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(NoSuchElementError));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.try_next(), Err(NoSuchElementError));
    }

    #[test]
    fn visits_only_logical_elements() {
        let mut list = ArrayList::new();
        list.add('x');
        list.add('y');
        list.add('z');
        list.remove_at(2).unwrap();

        let mut iter = list.iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&'x'));
        assert_eq!(iter.remainder(), ['y']);
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&'y'));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn clones_are_independent() {
        let list: ArrayList<_> = (1..=3).collect();
        let mut first = list.iter();
        first.next();
        let second = first.clone();

        assert_eq!(first.copied().sum::<i32>(), 5);
        assert_eq!(second.copied().sum::<i32>(), 5);
    }
}
