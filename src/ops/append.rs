//! Concatenation.

use crate::core::cursor::Cursor;
use crate::foundation::error::Result;
use crate::foundation::size::SizeDescriptor;

/// Emits every element of `first`, then every element of `second`.
/// Created by [`Cursor::append`] and [`Cursor::insert`].
#[derive(Debug, Clone)]
pub struct Append<A, B> {
    first: A,
    second: B,
    size: SizeDescriptor,
}

impl<A: Cursor, B: Cursor<Item = A::Item>> Append<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        let size = first.size().appended(second.size());
        Self {
            first,
            second,
            size,
        }
    }
}

impl<A, B> Cursor for Append<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.first.has_next() || self.second.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<A::Item> {
        let element = if self.first.has_next() {
            self.first.next()?
        } else {
            self.second.next()?
        };
        self.size.decrement();
        Ok(element)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        if self.first.has_next() {
            self.first.skip()?;
        } else {
            self.second.skip()?;
        }
        self.size.decrement();
        Ok(())
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
    fn test_append() {
        let mut cursor = over(vec![1, 2]).append(over(vec![3]));
        assert_eq!(cursor.exact_size(), Some(3));
        assert_eq!(cursor.skip(), Ok(()));
        assert_eq!(cursor.exact_size(), Some(2));
        assert_eq!(cursor.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_insert_puts_other_first() {
        let cursor = over(vec!["c", "d"]).insert(vec!["a", "b"]);
        assert_eq!(cursor.to_vec(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_append_with_unknown_and_empty_sides() {
        let cursor = empty::<f64>().append(doubles(&[1.0, 2.0]).filter(|x| *x > 1.0));
        assert!(cursor.size().is_unknown());
        assert_eq!(cursor.to_vec(), vec![2.0]);
        let mut both_empty = empty::<f64>().append(empty::<f64>());
        assert_eq!(both_empty.exact_size(), Some(0));
        assert!(!both_empty.has_next());
        assert_eq!(both_empty.next(), Err(Error::Exhausted));
    }
}
