use core::fmt::{Debug, Display, Formatter, Result};

use crate::ArrayList;

impl<T> Debug for ArrayList<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements (not the spare capacity) as `[a, b, c]`.
impl<T> Display for ArrayList<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}
