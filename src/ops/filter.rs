//! Predicate selection.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::{OrExhausted, Result};
use crate::foundation::size::SizeDescriptor;

/// Keeps the elements satisfying a predicate. Created by
/// [`Cursor::filter`].
///
/// The next qualifying element is held in a one-slot buffer so that
/// `has_next` can answer truthfully. The size is always unknown.
pub struct Filter<C: Cursor, P> {
    upstream: C,
    predicate: P,
    lookahead: Option<C::Item>,
}

impl<C: Cursor, P> Filter<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            lookahead: None,
        }
    }
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    fn fill(&mut self) {
        if self.lookahead.is_some() {
            return;
        }
        while let Some(element) = self.upstream.next_element() {
            if (self.predicate)(&element) {
                self.lookahead = Some(element);
                return;
            }
        }
    }
}

impl<C, P> fmt::Debug for Filter<C, P>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

impl<C, P> Cursor for Filter<C, P>
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
