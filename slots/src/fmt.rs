use core::fmt::{Debug, Formatter, Pointer, Result};

use crate::RawSlots;

impl<T> Debug for RawSlots<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("RawSlots")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Pointer for RawSlots<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Pointer::fmt(&self.ptr, f)
    }
}
