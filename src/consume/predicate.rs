//! Predicate consumers.
//!
//! The matching functions stop pulling as soon as the answer is known; the
//! remainder of the cursor is left untouched.

use crate::core::cursor::Cursor;
use crate::foundation::types::Partition;

/// `true` if every element satisfies `predicate`, vacuously on empty input.
pub fn all_match<C, P>(cursor: C, mut predicate: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    find_first(cursor, |element| !predicate(element)).is_none()
}

/// `true` if some element satisfies `predicate`.
pub fn any_match<C, P>(cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    find_first(cursor, predicate).is_some()
}

/// `true` if no element satisfies `predicate`.
pub fn none_match<C, P>(cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    !any_match(cursor, predicate)
}

/// `true` if every element equals the first, vacuously on empty input.
pub fn are_all_equal<C>(mut cursor: C) -> bool
where
    C: Cursor,
    C::Item: PartialEq,
{
    match cursor.next_element() {
        Some(first) => all_match(cursor, |element| *element == first),
        None => true,
    }
}

/// The first element satisfying `predicate`.
pub fn find_first<C, P>(mut cursor: C, mut predicate: P) -> Option<C::Item>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    while let Some(element) = cursor.next_element() {
        if predicate(&element) {
            return Some(element);
        }
    }
    None
}

/// Splits the elements by `predicate`, keeping encounter order on each side.
pub fn partition<C, P>(mut cursor: C, mut predicate: P) -> Partition<C::Item>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut out = Partition::new();
    while let Some(element) = cursor.next_element() {
        if predicate(&element) {
            out.passed.push(element);
        } else {
            out.failed.push(element);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_matching_short_circuits() {
        let mut source = ints(&[1, 2, 3, 4]);
        assert!(source.by_ref().any_match(|x| *x == 2));
        assert_eq!(source.to_vec(), vec![3, 4]);

        let mut source = ints(&[1, 2, 3]);
        assert!(!source.by_ref().all_match(|x| *x < 2));
        assert_eq!(source.to_vec(), vec![3]);
    }

    #[test]
    fn test_vacuous_truth() {
        assert!(empty::<i32>().all_match(|_| false));
        assert!(!empty::<i32>().any_match(|_| true));
        assert!(empty::<i32>().none_match(|_| true));
        assert!(empty::<i32>().are_all_equal());
    }

    #[test]
    fn test_are_all_equal() {
        assert!(over(vec!["a", "a", "a"]).are_all_equal());
        assert!(!over(vec!["a", "a", "b"]).are_all_equal());
    }

    #[test]
    fn test_find_first() {
        assert_eq!(ints(&[1, 8, 3, 9]).find_first(|x| *x > 5), Some(8));
        assert_eq!(ints(&[1]).find_first(|x| *x > 5), None);
    }

    #[test]
    fn test_partition_keeps_order() {
        let (even, odd) = ints(&[5, 2, 7, 4, 1])
            .partition(|x| x % 2 == 0)
            .into_parts();
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![5, 7, 1]);
    }
}
