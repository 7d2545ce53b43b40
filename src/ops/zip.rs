//! Lock-step traversal of two cursors.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::{Error, Result};
use crate::foundation::size::SizeDescriptor;

// ============================================================================
// Zip
// ============================================================================

/// Pairs elements of two cursors until either ends. Created by
/// [`Cursor::zip`].
///
/// Neither side is advanced unless both have an element, so the longer
/// cursor keeps its surplus.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    size: SizeDescriptor,
}

impl<A: Cursor, B: Cursor> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        let size = a.size().zipped(b.size());
        Self { a, b, size }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn has_next(&mut self) -> bool {
        self.a.has_next() && self.b.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        let pair = (self.a.next()?, self.b.next()?);
        self.size.decrement();
        Ok(pair)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.a.skip()?;
        self.b.skip()?;
        self.size.decrement();
        Ok(())
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.size
    }
}

// ============================================================================
// Combine
// ============================================================================

/// Merges elements of two cursors with a function until either ends.
/// Created by [`Cursor::combine`].
#[derive(Clone)]
pub struct Combine<A, B, F> {
    zip: Zip<A, B>,
    f: F,
}

impl<A: Cursor, B: Cursor, F> Combine<A, B, F> {
    pub(crate) fn new(a: A, b: B, f: F) -> Self {
        Self {
            zip: Zip::new(a, b),
            f,
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug, F> fmt::Debug for Combine<A, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combine")
            .field("zip", &self.zip)
            .finish_non_exhaustive()
    }
}

impl<A, B, R, F> Cursor for Combine<A, B, F>
where
    A: Cursor,
    B: Cursor,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.zip.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<R> {
        let (a, b) = self.zip.next()?;
        Ok((self.f)(a, b))
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        self.zip.skip()
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.zip.size()
    }
}
