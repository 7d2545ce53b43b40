//! Index-driven selection.

use core::fmt;

use tracing::debug;

use crate::core::cursor::Cursor;
use crate::foundation::error::{OrExhausted, Result};
use crate::foundation::size::SizeDescriptor;

/// Emits the upstream elements at positions `index(0), index(1), ...`.
/// Created by [`Cursor::slice`].
///
/// Upstream elements between two selected positions are skipped, never
/// produced. Selection ends at the first index beyond the upstream end.
pub struct Slice<C: Cursor, F> {
    upstream: C,
    index: F,
    query: usize,
    consumed: usize,
    lookahead: Option<C::Item>,
    done: bool,
}

impl<C: Cursor, F> Slice<C, F> {
    pub(crate) const fn new(upstream: C, index: F) -> Self {
        Self {
            upstream,
            index,
            query: 0,
            consumed: 0,
            lookahead: None,
            done: false,
        }
    }
}

impl<C, F> Slice<C, F>
where
    C: Cursor,
    F: FnMut(usize) -> usize,
{
    fn fill(&mut self) {
        if self.done || self.lookahead.is_some() {
            return;
        }
        let requested = (self.index)(self.query);
        let target = if requested < self.consumed {
            debug!(
                query = self.query,
                requested,
                clamped = self.consumed,
                "slice index does not increase, clamping"
            );
            self.consumed
        } else {
            requested
        };
        while self.consumed < target {
            if !self.upstream.has_next() || self.upstream.skip().is_err() {
                self.done = true;
                return;
            }
            self.consumed += 1;
        }
        match self.upstream.next_element() {
            Some(element) => {
                self.lookahead = Some(element);
                self.consumed += 1;
                self.query += 1;
            }
            None => self.done = true,
        }
    }
}

impl<C, F> fmt::Debug for Slice<C, F>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("upstream", &self.upstream)
            .field("query", &self.query)
            .field("consumed", &self.consumed)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

impl<C, F> Cursor for Slice<C, F>
where
    C: Cursor,
    F: FnMut(usize) -> usize,
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
