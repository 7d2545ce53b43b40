//! One-to-one element transformation.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::Result;
use crate::foundation::size::SizeDescriptor;

/// Applies a function to every element. Created by [`Cursor::map`] and the
/// `map_to_*` conversions.
///
/// Keeps the upstream size descriptor. Skipping does not call the function.
#[derive(Clone)]
pub struct Map<C, F> {
    upstream: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(crate) const fn new(upstream: C, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Map<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<B, C, F> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<B> {
        self.upstream.next().map(&mut self.f)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        self.upstream.skip()
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
    fn test_map() {
        let mut cursor = over(vec![1, 2, 3]).map(|x| x.to_string());
        assert_eq!(cursor.exact_size(), Some(3));
        assert_eq!(cursor.next(), Ok("1".to_string()));
        assert_eq!(cursor.exact_size(), Some(2));
        assert_eq!(cursor.to_vec(), vec!["2", "3"]);
    }

    #[test]
    fn test_skip_does_not_apply_function() {
        let mut calls = 0;
        let mut cursor = over(vec![1, 2]).map(|x| {
            calls += 1;
            x
        });
        assert_eq!(cursor.skip(), Ok(()));
        assert_eq!(cursor.next(), Ok(2));
        assert_eq!(cursor.skip(), Err(Error::Exhausted));
        drop(cursor);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_cross_kind_conversion() {
        let lengths = over(vec!["a", "abc"]).map_to_int(|s| s.len() as i32).sum();
        assert_eq!(lengths, 4);
        let halves = ints(&[1, 3]).map_to_double(|x| f64::from(x) / 2.0).to_vec();
        assert_eq!(halves, vec![0.5, 1.5]);
        let widened = ints(&[7]).map_to_long(i64::from).to_vec();
        assert_eq!(widened, vec![7_i64]);
    }
}
