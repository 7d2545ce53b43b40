//! Extremum consumers.
//!
//! Ties keep the earliest element. A key that compares neither less nor
//! greater (a `NaN`, for instance) never displaces the current pick.

use core::cmp::Ordering;

use crate::core::cursor::Cursor;

fn select_by_key<C, K, F>(mut cursor: C, mut key: F, wanted: Ordering) -> Option<C::Item>
where
    C: Cursor,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    let first = cursor.next_element()?;
    let mut best_key = key(&first);
    let mut best = first;
    while let Some(element) = cursor.next_element() {
        let k = key(&element);
        if k.partial_cmp(&best_key) == Some(wanted) {
            best_key = k;
            best = element;
        }
    }
    Some(best)
}

fn select_by<C, F>(mut cursor: C, mut compare: F, wanted: Ordering) -> Option<C::Item>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut best = cursor.next_element()?;
    while let Some(element) = cursor.next_element() {
        if compare(&element, &best) == wanted {
            best = element;
        }
    }
    Some(best)
}

/// The element with the smallest key.
pub fn min_by_key<C, K, F>(cursor: C, key: F) -> Option<C::Item>
where
    C: Cursor,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    select_by_key(cursor, key, Ordering::Less)
}

/// The element with the largest key.
pub fn max_by_key<C, K, F>(cursor: C, key: F) -> Option<C::Item>
where
    C: Cursor,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    select_by_key(cursor, key, Ordering::Greater)
}

/// The smallest element under `compare`.
pub fn min_by<C, F>(cursor: C, compare: F) -> Option<C::Item>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    select_by(cursor, compare, Ordering::Less)
}

/// The largest element under `compare`.
pub fn max_by<C, F>(cursor: C, compare: F) -> Option<C::Item>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    select_by(cursor, compare, Ordering::Greater)
}
