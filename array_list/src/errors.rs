use core::{error::Error, fmt};

#[derive(Clone, PartialEq, Eq)]
/// The error type returned when an index is outside the range an operation accepts.
///
/// Operations that take ownership of a value (like [`ArrayList::insert`](crate::ArrayList::insert)) hand it back
/// inside the error.
pub struct IndexOutOfBoundsError<Value = ()> {
    index: usize,
    len: usize,
    value: Value,
}

impl<Value> IndexOutOfBoundsError<Value> {
    #[must_use]
    #[inline]
    /// Gets the rejected index.
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    #[inline]
    /// Gets the length of the list when the index was rejected.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the list was empty when the index was rejected.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    /// Gets the value held in the error.
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    /// Seperates the value from the error.
    pub fn into_parts(self) -> (Value, IndexOutOfBoundsError) {
        (
            self.value,
            IndexOutOfBoundsError {
                index: self.index,
                len: self.len,
                value: (),
            },
        )
    }
}

impl IndexOutOfBoundsError {
    #[must_use]
    #[inline]
    /// Create a new error for `index` being out of bounds for a list of `len` elements.
    pub const fn new(index: usize, len: usize) -> Self {
        Self {
            index,
            len,
            value: (),
        }
    }

    #[inline]
    /// Places a value into the error.
    pub const fn with_value<Value>(self, value: Value) -> IndexOutOfBoundsError<Value> {
        IndexOutOfBoundsError {
            index: self.index,
            len: self.len,
            value,
        }
    }
}

// Manually implemented to avoid a `Debug` bound on `Value`
impl<Value> fmt::Debug for IndexOutOfBoundsError<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexOutOfBoundsError")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<Value> fmt::Display for IndexOutOfBoundsError<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index out of bounds (index: {}, size: {})", self.index, self.len)
    }
}

impl<Value> Error for IndexOutOfBoundsError<Value> {}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// The error type returned when a list is created with an illegal capacity.
pub struct InvalidCapacityError {
    capacity: usize,
}

impl InvalidCapacityError {
    #[must_use]
    #[inline]
    pub(crate) const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[must_use]
    #[inline]
    /// Gets the rejected capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for InvalidCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity is illegal: {}", self.capacity)
    }
}

impl Error for InvalidCapacityError {}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
/// The error type returned when advancing an exhausted iterator.
pub struct NoSuchElementError;

impl fmt::Display for NoSuchElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no more elements to iterate over")
    }
}

impl Error for NoSuchElementError {}

#[cfg(test)]
mod test {
    use super::{IndexOutOfBoundsError, InvalidCapacityError, NoSuchElementError};

    #[test]
    fn index_error_returns_value() {
        let error = IndexOutOfBoundsError::new(5, 2).with_value(String::from("rejected"));
        assert_eq!(error.index(), 5);
        assert_eq!(error.len(), 2);
        assert!(!error.is_empty());
        assert!(IndexOutOfBoundsError::new(0, 0).is_empty());

        let (value, empty) = error.into_parts();
        assert_eq!(value, "rejected");
        assert_eq!(empty, IndexOutOfBoundsError::new(5, 2));
    }

    #[test]
    fn display() {
        assert_eq!(
            IndexOutOfBoundsError::new(3, 1).to_string(),
            "index out of bounds (index: 3, size: 1)"
        );
        assert_eq!(
            InvalidCapacityError::new(0).to_string(),
            "capacity is illegal: 0"
        );
        assert_eq!(
            format!("{:?}", IndexOutOfBoundsError::new(3, 1).with_value(())),
            "IndexOutOfBoundsError { index: 3, len: 1, .. }"
        );
        assert_eq!(
            NoSuchElementError.to_string(),
            "no more elements to iterate over"
        );
    }
}
