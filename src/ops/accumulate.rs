//! Running accumulation.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::Result;
use crate::foundation::size::SizeDescriptor;

// ============================================================================
// Accumulate
// ============================================================================

/// Emits the running accumulation of the upstream, starting with the first
/// element unchanged. Created by [`Cursor::accumulate`].
pub struct Accumulate<C: Cursor, F> {
    upstream: C,
    f: F,
    acc: Option<C::Item>,
}

impl<C: Cursor, F> Accumulate<C, F> {
    pub(crate) const fn new(upstream: C, f: F) -> Self {
        Self {
            upstream,
            f,
            acc: None,
        }
    }
}

impl<C, F> fmt::Debug for Accumulate<C, F>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulate")
            .field("upstream", &self.upstream)
            .field("acc", &self.acc)
            .finish_non_exhaustive()
    }
}

impl<C, F> Cursor for Accumulate<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        let element = self.upstream.next()?;
        let acc = match self.acc.take() {
            Some(acc) => (self.f)(acc, element),
            None => element,
        };
        self.acc = Some(acc.clone());
        Ok(acc)
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.upstream.size().accumulated()
    }
}

// ============================================================================
// AccumulateFrom
// ============================================================================

/// Emits the running accumulation of the upstream, seeded with an identity.
/// Created by [`Cursor::accumulate_from`].
///
/// The identity itself is not emitted.
#[derive(Clone)]
pub struct AccumulateFrom<C, R, F> {
    upstream: C,
    acc: R,
    f: F,
}

impl<C, R, F> AccumulateFrom<C, R, F> {
    pub(crate) const fn new(upstream: C, identity: R, f: F) -> Self {
        Self {
            upstream,
            acc: identity,
            f,
        }
    }
}

impl<C: fmt::Debug, R: fmt::Debug, F> fmt::Debug for AccumulateFrom<C, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccumulateFrom")
            .field("upstream", &self.upstream)
            .field("acc", &self.acc)
            .finish_non_exhaustive()
    }
}

impl<C, R, F> Cursor for AccumulateFrom<C, R, F>
where
    C: Cursor,
    R: Clone,
    F: FnMut(R, C::Item) -> R,
{
    type Item = R;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<R> {
        let element = self.upstream.next()?;
        self.acc = (self.f)(self.acc.clone(), element);
        Ok(self.acc.clone())
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.upstream.size().accumulated()
    }
}
