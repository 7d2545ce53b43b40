//! Prefix removal.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::Result;
use crate::foundation::size::SizeDescriptor;

// ============================================================================
// DropFirst
// ============================================================================

/// Discards the first `n` elements. Created by [`Cursor::drop`].
///
/// The discarded elements are skipped on the first query, not at
/// construction.
#[derive(Debug, Clone)]
pub struct DropFirst<C> {
    upstream: C,
    pending: usize,
    size: SizeDescriptor,
}

impl<C: Cursor> DropFirst<C> {
    pub(crate) fn new(upstream: C, n: usize) -> Self {
        let size = upstream.size().dropped(n);
        Self {
            upstream,
            pending: n,
            size,
        }
    }

    fn settle(&mut self) {
        while self.pending > 0 && self.upstream.has_next() {
            if self.upstream.skip().is_err() {
                break;
            }
            self.pending -= 1;
        }
        self.pending = 0;
    }
}

impl<C: Cursor> Cursor for DropFirst<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.settle();
        self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<C::Item> {
        self.settle();
        let element = self.upstream.next()?;
        self.size.decrement();
        Ok(element)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        self.settle();
        self.upstream.skip()?;
        self.size.decrement();
        Ok(())
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.size
    }
}

// ============================================================================
// DropWhile
// ============================================================================

/// Discards elements until the predicate first fails, then emits the rest.
/// Created by [`Cursor::drop_while`].
///
/// Once an element fails the predicate the drop phase is over for good;
/// later elements are never tested.
pub struct DropWhile<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Option<C::Item>,
    dropping: bool,
}

impl<C: Cursor, P> DropWhile<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            lookahead: None,
            dropping: true,
        }
    }
}

impl<C, P> DropWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    fn settle(&mut self) {
        if !self.dropping {
            return;
        }
        self.dropping = false;
        while let Some(element) = self.upstream.next_element() {
            if !(self.predicate)(&element) {
                self.lookahead = Some(element);
                return;
            }
        }
    }
}

impl<C, P> fmt::Debug for DropWhile<C, P>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropWhile")
            .field("upstream", &self.upstream)
            .field("lookahead", &self.lookahead)
            .field("dropping", &self.dropping)
            .finish_non_exhaustive()
    }
}

impl<C, P> Cursor for DropWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.settle();
        self.lookahead.is_some() || self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<C::Item> {
        self.settle();
        match self.lookahead.take() {
            Some(element) => Ok(element),
            None => self.upstream.next(),
        }
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        self.settle();
        match self.lookahead.take() {
            Some(_) => Ok(()),
            None => self.upstream.skip(),
        }
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.upstream.size().filtered()
    }
}
