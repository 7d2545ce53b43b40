//! Adjacent-pair combination.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::{Error, Result};
use crate::foundation::size::SizeDescriptor;

/// Combines each element with its successor, producing one element fewer
/// than the upstream. Created by [`Cursor::pair_fold`].
///
/// The first upstream element is pulled on the first query and kept as the
/// left-hand side of the next pair.
pub struct PairFold<C: Cursor, F> {
    upstream: C,
    f: F,
    previous: Option<C::Item>,
    primed: bool,
    size: SizeDescriptor,
}

impl<C: Cursor, F> PairFold<C, F> {
    pub(crate) fn new(upstream: C, f: F) -> Self {
        let size = upstream.size().pair_folded();
        Self {
            upstream,
            f,
            previous: None,
            primed: false,
            size,
        }
    }

    fn prime(&mut self) {
        if !self.primed {
            self.primed = true;
            self.previous = self.upstream.next_element();
        }
    }
}

impl<C, F> fmt::Debug for PairFold<C, F>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairFold")
            .field("upstream", &self.upstream)
            .field("previous", &self.previous)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl<C, R, F> Cursor for PairFold<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> R,
{
    type Item = R;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.prime();
        self.previous.is_some() && self.upstream.has_next()
    }

    fn next(&mut self) -> Result<R> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        let current = self.upstream.next()?;
        let previous = self.previous.replace(current);
        let out = match (previous.as_ref(), self.previous.as_ref()) {
            (Some(left), Some(right)) => (self.f)(left, right),
            _ => return Err(Error::Exhausted),
        };
        self.size.decrement();
        Ok(out)
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_differences() {
        let mut cursor = ints(&[1, 4, 9, 16]).pair_fold(|a, b| b - a);
        assert_eq!(cursor.exact_size(), Some(3));
        assert_eq!(cursor.next(), Ok(3));
        assert_eq!(cursor.exact_size(), Some(2));
        assert_eq!(cursor.to_vec(), vec![5, 7]);
    }

    #[test]
    fn test_short_inputs() {
        assert!(!empty::<i32>().pair_fold(|a, b| a + b).has_next());
        let mut single = ints(&[5]).pair_fold(|a, b| a + b);
        assert_eq!(single.exact_size(), Some(0));
        assert!(!single.has_next());
        assert_eq!(single.next(), Err(Error::Exhausted));
    }

    #[test]
    fn test_pairs_of_strings() {
        let joined = over(vec!["x", "y", "z"])
            .pair_fold(|a, b| format!("{a}{b}"))
            .to_vec();
        assert_eq!(joined, vec!["xy", "yz"]);
    }
}
