use core::{
    alloc::{Layout, LayoutError},
    error::Error,
    fmt,
};

#[derive(Clone, PartialEq, Eq)]
enum AllocateErrorInternal {
    Overflow { capacity: usize },
    Layout { error: LayoutError },
    Alloc { layout: Layout },
}

#[derive(Clone, PartialEq, Eq)]
/// The error type returned when growing or allocating slots fails.
///
/// This can either be from the slot count exceeding what the element type allows, from an arithmetic error when
/// calculating the layout or from the global allocator when allocating.
pub struct AllocateError<Value = ()> {
    internal: AllocateErrorInternal,
    value: Value,
}

impl AllocateErrorInternal {
    fn handle(self) -> ! {
        match self {
            Self::Alloc { layout } => crate::alloc::handle_alloc_error(layout),
            Self::Overflow { .. } | Self::Layout { .. } => panic!("{self}"),
        }
    }
}

impl<Value> AllocateError<Value> {
    #[inline]
    /// Handles the error by calling [`handle_alloc_error`](std::alloc::handle_alloc_error) if the allocator failed, or
    /// panicking with a capacity overflow otherwise.
    pub fn handle(self) -> ! {
        self.internal.handle()
    }

    #[inline]
    /// Gets the value held in the error.
    ///
    /// This is usually from attempting to add the value to a list.
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    /// Seperates the value from the error.
    pub fn into_parts(self) -> (Value, AllocateError) {
        (
            self.value,
            AllocateError {
                internal: self.internal,
                value: (),
            },
        )
    }

    #[inline]
    /// Unwraps the result using [`Self::handle`] when it is an error.
    pub fn unwrap_result<T>(result: Result<T, Self>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => err.handle(),
        }
    }

    #[inline]
    /// Gets the layout for the allocation.
    ///
    /// If this returns [`None`], the slot count or layout calculation failed before reaching the allocator.
    pub const fn layout(&self) -> Option<Layout> {
        match self.internal {
            AllocateErrorInternal::Overflow { .. } | AllocateErrorInternal::Layout { .. } => None,
            AllocateErrorInternal::Alloc { layout } => Some(layout),
        }
    }

    #[inline]
    /// Returns [`true`] if the error came from the slot count rather than the allocator.
    pub const fn is_capacity_overflow(&self) -> bool {
        !matches!(self.internal, AllocateErrorInternal::Alloc { .. })
    }

    #[inline]
    /// Applies a function `f` to the value.
    ///
    /// This maps from an [`AllocateError<Value>`] to an [`AllocateError<U>`].
    pub fn map<U, F>(self, f: F) -> AllocateError<U>
    where
        F: FnOnce(Value) -> U,
    {
        let (value, empty) = self.into_parts();
        empty.with_value(f(value))
    }
}

impl AllocateError {
    #[inline]
    /// Places a value into the error.
    pub const fn with_value<Value>(self, value: Value) -> AllocateError<Value> {
        AllocateError {
            internal: self.internal,
            value,
        }
    }

    #[must_use]
    #[inline]
    /// Create a new error for a slot count that cannot grow any further.
    pub const fn new_overflow(capacity: usize) -> Self {
        Self {
            internal: AllocateErrorInternal::Overflow { capacity },
            value: (),
        }
    }

    #[must_use]
    #[inline]
    /// Create a new error from a [`LayoutError`].
    pub const fn new_layout(source: LayoutError) -> Self {
        Self {
            internal: AllocateErrorInternal::Layout { error: source },
            value: (),
        }
    }

    #[must_use]
    #[inline]
    /// Create a new error for a [`Layout`] that the allocator could not allocate.
    pub const fn new_alloc(layout: Layout) -> Self {
        Self {
            internal: AllocateErrorInternal::Alloc { layout },
            value: (),
        }
    }
}

impl fmt::Debug for AllocateErrorInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple;
        match self {
            Self::Overflow { capacity } => {
                tuple = f.debug_tuple("AllocateError::Overflow");
                tuple.field(capacity);
            }
            Self::Layout { .. } => {
                tuple = f.debug_tuple("AllocateError::Layout");
            }
            Self::Alloc { layout } => {
                tuple = f.debug_tuple("AllocateError::Alloc");
                tuple.field(&layout);
            }
        }

        tuple.finish()
    }
}

impl fmt::Display for AllocateErrorInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { capacity } => {
                write!(f, "capacity overflow (cannot grow past {capacity} slots)")
            }
            Self::Layout { error } => write!(f, "capacity overflow ({error})"),
            Self::Alloc { layout } => write!(
                f,
                "memory allocation failed (size: {}, align: {})",
                layout.size(),
                layout.align()
            ),
        }
    }
}

// Manually implemented to avoid a `Debug` bound on `Value`
impl<Value> fmt::Debug for AllocateError<Value> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.internal, f)
    }
}

impl<Value> fmt::Display for AllocateError<Value> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.internal, f)
    }
}

impl Error for AllocateErrorInternal {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout { error } => Some(error),
            Self::Overflow { .. } | Self::Alloc { .. } => None,
        }
    }
}

impl<Value> Error for AllocateError<Value> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.internal.source()
    }
}

impl From<LayoutError> for AllocateError {
    #[inline]
    fn from(value: LayoutError) -> Self {
        Self::new_layout(value)
    }
}
