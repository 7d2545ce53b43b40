//! Nested traversal.

use core::fmt;

use crate::core::cursor::{Cursor, IntoCursor};
use crate::foundation::error::{Error, Result};
use crate::foundation::size::SizeDescriptor;

/// Maps every element to an inner cursor and emits the inner elements in
/// order. Created by [`Cursor::flat_map`] and [`Cursor::flatten`].
///
/// Inner cursors that turn out empty are passed over. The active inner
/// cursor is only ever drained once; it is dropped as soon as it ends.
pub struct FlatMap<C, F, U: IntoCursor> {
    upstream: C,
    f: F,
    current: Option<U::Cursor>,
}

impl<C, F, U: IntoCursor> FlatMap<C, F, U> {
    pub(crate) const fn new(upstream: C, f: F) -> Self {
        Self {
            upstream,
            f,
            current: None,
        }
    }
}

impl<C, F, U> FlatMap<C, F, U>
where
    C: Cursor,
    U: IntoCursor,
    F: FnMut(C::Item) -> U,
{
    /// Advances to an inner cursor with an element left, if there is one.
    fn prime(&mut self) -> bool {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if inner.has_next() {
                    return true;
                }
                self.current = None;
            }
            match self.upstream.next_element() {
                Some(element) => self.current = Some((self.f)(element).into_cursor()),
                None => return false,
            }
        }
    }
}

impl<C, F, U> fmt::Debug for FlatMap<C, F, U>
where
    C: fmt::Debug,
    U: IntoCursor,
    U::Cursor: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("upstream", &self.upstream)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<C, F, U> Cursor for FlatMap<C, F, U>
where
    C: Cursor,
    U: IntoCursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.prime()
    }

    fn next(&mut self) -> Result<U::Item> {
        if !self.prime() {
            return Err(Error::Exhausted);
        }
        match self.current.as_mut() {
            Some(inner) => inner.next(),
            None => Err(Error::Exhausted),
        }
    }

    fn skip(&mut self) -> Result<()> {
        if !self.prime() {
            return Err(Error::Exhausted);
        }
        match self.current.as_mut() {
            Some(inner) => inner.skip(),
            None => Err(Error::Exhausted),
        }
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.upstream.size().flattened()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_flatten_skips_empty_inner_cursors() {
        let nested = vec![vec![], vec![1, 2], vec![], vec![3], vec![]];
        let mut cursor = over(nested).flatten();
        assert!(cursor.size().is_unknown());
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.skip(), Ok(()));
        assert_eq!(cursor.next(), Ok(3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(Error::Exhausted));
    }

    #[test]
    fn test_flat_map_to_cursors() {
        let expanded = ints(&[1, 2, 3])
            .flat_map(|n| by_indexing(move |_| n, n as usize))
            .to_vec();
        assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_flatten_empty_outer() {
        let mut cursor = empty::<Vec<String>>().flatten();
        assert!(!cursor.has_next());
        assert_eq!(cursor.skip(), Err(Error::Exhausted));
    }

    #[test]
    fn test_flat_map_is_lazy_in_outer() {
        let mut outer_pulls = 0;
        let mut cursor = by_indexing(
            |i| {
                outer_pulls += 1;
                vec![i; 2]
            },
            100,
        )
        .flatten();
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Ok(0));
        assert_eq!(cursor.next(), Ok(1));
        drop(cursor);
        assert_eq!(outer_pulls, 2);
    }
}
