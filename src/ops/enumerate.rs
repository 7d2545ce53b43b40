//! Position tagging.

use crate::core::cursor::Cursor;
use crate::foundation::error::Result;
use crate::foundation::size::SizeDescriptor;

/// Pairs every element with its zero-based position. Created by
/// [`Cursor::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<C> {
    upstream: C,
    index: usize,
}

impl<C> Enumerate<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self { upstream, index: 0 }
    }
}

impl<C: Cursor> Cursor for Enumerate<C> {
    type Item = (usize, C::Item);

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        let element = self.upstream.next()?;
        let index = self.index;
        self.index += 1;
        Ok((index, element))
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        self.upstream.skip()?;
        self.index += 1;
        Ok(())
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.upstream.size().mapped()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_enumerate_counts_skipped_elements() {
        let mut cursor = over(vec!['a', 'b', 'c']).enumerate();
        assert_eq!(cursor.exact_size(), Some(3));
        assert_eq!(cursor.skip(), Ok(()));
        assert_eq!(cursor.to_vec(), vec![(1, 'b'), (2, 'c')]);
    }
}
