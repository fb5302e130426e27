use core::hash::{Hash, Hasher};

use crate::ArrayList;

impl<T, U> PartialEq<ArrayList<U>> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &ArrayList<U>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T, U> PartialEq<[U]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T> Eq for ArrayList<T> where T: Eq {}

// Capacity is not part of the value
impl<T> Hash for ArrayList<T>
where
    T: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
