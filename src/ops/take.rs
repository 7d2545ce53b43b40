//! Prefix selection.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::{Error, OrExhausted, Result};
use crate::foundation::size::SizeDescriptor;

// ============================================================================
// Take
// ============================================================================

/// Emits at most `n` elements. Created by [`Cursor::take`].
///
/// Never pulls an upstream element beyond the `n`th, so the rest of the
/// upstream stays available through [`Cursor::by_ref`].
#[derive(Debug, Clone)]
pub struct Take<C> {
    upstream: C,
    remaining: usize,
    size: SizeDescriptor,
}

impl<C: Cursor> Take<C> {
    pub(crate) fn new(upstream: C, n: usize) -> Self {
        let size = upstream.size().taken(n);
        Self {
            upstream,
            remaining: n,
            size,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<C::Item> {
        if self.remaining == 0 {
            return Err(Error::Exhausted);
        }
        let element = self.upstream.next()?;
        self.remaining -= 1;
        self.size.decrement();
        Ok(element)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        if self.remaining == 0 {
            return Err(Error::Exhausted);
        }
        self.upstream.skip()?;
        self.remaining -= 1;
        self.size.decrement();
        Ok(())
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.size
    }
}

// ============================================================================
// TakeWhile
// ============================================================================

/// Emits elements until the predicate first fails. Created by
/// [`Cursor::take_while`].
///
/// The first failing element is consumed from upstream and discarded.
pub struct TakeWhile<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Option<C::Item>,
    done: bool,
}

impl<C: Cursor, P> TakeWhile<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            lookahead: None,
            done: false,
        }
    }
}

impl<C, P> TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    fn fill(&mut self) {
        if self.done || self.lookahead.is_some() {
            return;
        }
        match self.upstream.next_element() {
            Some(element) if (self.predicate)(&element) => self.lookahead = Some(element),
            _ => self.done = true,
        }
    }
}

impl<C, P> fmt::Debug for TakeWhile<C, P>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("upstream", &self.upstream)
            .field("lookahead", &self.lookahead)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.fill();
        self.lookahead.is_some()
    }

    #[inline]
    fn next(&mut self) -> Result<C::Item> {
        self.fill();
        self.lookahead.take().or_exhausted()
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.upstream.size().filtered()
    }
}
