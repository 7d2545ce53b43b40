//! The canonical empty cursor.

use core::fmt;
use core::marker::PhantomData;

use crate::core::cursor::Cursor;
use crate::foundation::error::{Error, Result};
use crate::foundation::size::SizeDescriptor;

/// A cursor with no elements. Zero-sized and stateless.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates the empty cursor.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        false
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        Err(Error::Exhausted)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        Err(Error::Exhausted)
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        SizeDescriptor::EMPTY
    }
}
