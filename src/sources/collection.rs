//! Cursors over borrowed or owned collections.

use crate::core::cursor::Cursor;
use crate::foundation::error::{OrExhausted, Result};
use crate::foundation::size::SizeDescriptor;

/// A cursor over any iterator that knows its exact length, such as a
/// slice, a set or the values of a map.
///
/// Reports `Exact(len)` taken from [`ExactSizeIterator::len`].
#[derive(Debug, Clone)]
pub struct CollectionSource<I> {
    iter: I,
}

impl<I: ExactSizeIterator> CollectionSource<I> {
    /// Wraps an exact-size iterator.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: ExactSizeIterator> Cursor for CollectionSource<I> {
    type Item = I::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.iter.len() > 0
    }

    #[inline]
    fn next(&mut self) -> Result<I::Item> {
        self.iter.next().or_exhausted()
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        SizeDescriptor::Exact(self.iter.len())
    }
}
