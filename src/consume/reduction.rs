//! Folding consumers.
//!
//! Each function drains the cursor it is given. None of them call
//! [`Cursor::next`] on an exhausted cursor.

use tracing::trace;

use crate::core::cursor::Cursor;
use crate::core::primitive::Primitive;
use crate::foundation::error::{Error, Result};

/// Folds every element into `identity` from left to right.
pub fn fold<C, R, F>(mut cursor: C, identity: R, mut f: F) -> R
where
    C: Cursor,
    F: FnMut(R, C::Item) -> R,
{
    trace!(size = ?cursor.size(), "fold");
    let mut acc = identity;
    while let Some(element) = cursor.next_element() {
        acc = f(acc, element);
    }
    acc
}

/// Folds every element into the first one.
pub fn reduce<C, F>(cursor: C, f: F) -> Result<C::Item>
where
    C: Cursor,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    reduce_option(cursor, f).ok_or(Error::EmptyReduction)
}

/// Folds every element into the first one, `None` when there is none.
pub fn reduce_option<C, F>(mut cursor: C, f: F) -> Option<C::Item>
where
    C: Cursor,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    let first = cursor.next_element()?;
    Some(fold(cursor, first, f))
}

/// Counts the remaining elements by skipping them.
pub fn count<C: Cursor>(mut cursor: C) -> usize {
    let mut n = 0;
    while cursor.has_next() {
        if cursor.skip().is_err() {
            break;
        }
        n += 1;
    }
    n
}

/// Returns the final element.
pub fn last<C: Cursor>(cursor: C) -> Option<C::Item> {
    fold(cursor, None, |_, element| Some(element))
}

/// Sums a numeric cursor. Integer kinds wrap on overflow.
pub fn sum<C, T>(cursor: C) -> T
where
    C: Cursor<Item = T>,
    T: Primitive,
{
    fold(cursor, T::ZERO, T::plus)
}

/// The arithmetic mean of a numeric cursor, computed in double precision.
#[allow(clippy::cast_precision_loss)]
pub fn average<C, T>(cursor: C) -> Option<f64>
where
    C: Cursor<Item = T>,
    T: Primitive,
{
    let (total, n) = fold(cursor, (0.0_f64, 0_usize), |(total, n), x| {
        (total + x.to_f64(), n + 1)
    });
    (n > 0).then(|| total / n as f64)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_fold_and_reduce() {
        assert_eq!(ints(&[1, 2, 3]).fold(10, |a, b| a + b), 16);
        assert_eq!(over(vec!["a", "b"]).reduce(|a, _| a), Ok("a"));
        assert_eq!(
            empty::<String>().reduce(|a, b| a + &b),
            Err(Error::EmptyReduction)
        );
        assert_eq!(empty::<i32>().reduce_option(i32::max), None);
        assert_eq!(ints(&[4, 9, 2]).reduce_option(i32::max), Some(9));
    }

    #[test]
    fn test_count_does_not_produce() {
        let mut produced = 0;
        let n = by_indexing(
            |i| {
                produced += 1;
                i
            },
            7,
        )
        .count();
        assert_eq!(n, 7);
        assert_eq!(produced, 0);
        assert_eq!(over(vec![1, 2, 3]).filter(|x| *x > 1).count(), 2);
    }

    #[test]
    fn test_last() {
        assert_eq!(over(vec!['x', 'y']).last(), Some('y'));
        assert_eq!(empty::<char>().last(), None);
    }

    #[test]
    fn test_average_of_longs() {
        assert_eq!(longs(&[1, 2]).average(), Some(1.5));
        assert_eq!(ints(&[-3, 3]).average(), Some(0.0));
    }
}
