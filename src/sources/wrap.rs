//! Cursors over foreign iterators.

use core::iter::Fuse;

use crate::core::cursor::Cursor;
use crate::foundation::error::{OrExhausted, Result};
use crate::foundation::size::SizeDescriptor;

/// A cursor over an arbitrary [`Iterator`].
///
/// A plain iterator cannot answer `has_next` without producing the element,
/// so one element is buffered when asked. The iterator is fused, so the
/// cursor stays exhausted after the first `None`. The size descriptor is
/// derived from the iterator's `size_hint`.
#[derive(Debug, Clone)]
pub struct Wrap<I: Iterator> {
    iter: Fuse<I>,
    lookahead: Option<I::Item>,
}

impl<I: Iterator> Wrap<I> {
    /// Wraps `iter`.
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            lookahead: None,
        }
    }
}

impl<I: Iterator> Cursor for Wrap<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if self.lookahead.is_none() {
            self.lookahead = self.iter.next();
        }
        self.lookahead.is_some()
    }

    fn next(&mut self) -> Result<I::Item> {
        match self.lookahead.take() {
            Some(element) => Ok(element),
            None => self.iter.next().or_exhausted(),
        }
    }

    fn size(&self) -> SizeDescriptor {
        let rest = SizeDescriptor::from_size_hint(self.iter.size_hint());
        if self.lookahead.is_some() {
            SizeDescriptor::Exact(1).appended(rest)
        } else {
            rest
        }
    }
}
