//! Constructors for source cursors.
//!
//! Thin functions naming the common ways to start a pipeline, plus aliases
//! that fix the element kind for the numeric specializations.

use core::slice;

use crate::core::cursor::{Cursor, IntoCursor};
use crate::ops::flatten::FlatMap;
use crate::sources::array::ArraySource;
use crate::sources::collection::CollectionSource;
use crate::sources::empty::Empty;
use crate::sources::function::FunctionSource;
use crate::sources::wrap::Wrap;

// ============================================================================
// Reference kinds
// ============================================================================

/// A cursor over the elements of `items`, first to last.
pub fn over<T>(items: impl Into<Vec<T>>) -> ArraySource<T> {
    ArraySource::new(items.into())
}

/// A cursor over the elements of `items`, last to first.
pub fn reverse<T>(items: impl Into<Vec<T>>) -> ArraySource<T> {
    ArraySource::reversed(items.into())
}

/// A cursor borrowing the elements of a slice.
pub fn over_slice<T>(items: &[T]) -> CollectionSource<slice::Iter<'_, T>> {
    CollectionSource::new(items.iter())
}

/// A cursor over any collection whose iterator knows its exact length.
pub fn collection<I>(items: I) -> CollectionSource<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    CollectionSource::new(items.into_iter())
}

/// A cursor applying `f` to the indices `0..bound`.
pub fn by_indexing<T, F>(f: F, bound: usize) -> FunctionSource<F>
where
    F: FnMut(usize) -> T,
{
    FunctionSource::new(f, bound)
}

/// The empty cursor.
pub const fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// A cursor of one element if `value` is present, else the empty cursor.
pub fn option<T>(value: Option<T>) -> ArraySource<T> {
    ArraySource::new(value.into_iter().collect())
}

/// A cursor over a foreign iterator.
pub fn wrap<I: IntoIterator>(items: I) -> Wrap<I::IntoIter> {
    Wrap::new(items.into_iter())
}

/// Every element of every inner sequence, in order.
pub fn flatten_all<S>(sequences: S) -> FlatMap<S::Cursor, fn(S::Item) -> S::Item, S::Item>
where
    S: IntoCursor,
    S::Item: IntoCursor,
{
    sequences.into_cursor().flatten()
}

// ============================================================================
// Numeric kinds
// ============================================================================

/// A cursor over 32-bit integers.
pub fn ints(values: &[i32]) -> ArraySource<i32> {
    ArraySource::new(values.to_vec())
}

/// A cursor over 64-bit integers.
pub fn longs(values: &[i64]) -> ArraySource<i64> {
    ArraySource::new(values.to_vec())
}

/// A cursor over doubles.
pub fn doubles(values: &[f64]) -> ArraySource<f64> {
    ArraySource::new(values.to_vec())
}

/// A cursor over 32-bit integers, last to first.
pub fn reverse_ints(values: &[i32]) -> ArraySource<i32> {
    ArraySource::reversed(values.to_vec())
}

/// A cursor over 64-bit integers, last to first.
pub fn reverse_longs(values: &[i64]) -> ArraySource<i64> {
    ArraySource::reversed(values.to_vec())
}

/// A cursor over doubles, last to first.
pub fn reverse_doubles(values: &[f64]) -> ArraySource<f64> {
    ArraySource::reversed(values.to_vec())
}

/// A 32-bit integer cursor applying `f` to the indices `0..bound`.
pub fn ints_by_indexing<F>(f: F, bound: usize) -> FunctionSource<F>
where
    F: FnMut(usize) -> i32,
{
    FunctionSource::new(f, bound)
}

/// A 64-bit integer cursor applying `f` to the indices `0..bound`.
pub fn longs_by_indexing<F>(f: F, bound: usize) -> FunctionSource<F>
where
    F: FnMut(usize) -> i64,
{
    FunctionSource::new(f, bound)
}

/// A double cursor applying `f` to the indices `0..bound`.
pub fn doubles_by_indexing<F>(f: F, bound: usize) -> FunctionSource<F>
where
    F: FnMut(usize) -> f64,
{
    FunctionSource::new(f, bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_reference_factories() {
        assert_eq!(over(["a", "b"]).to_vec(), vec!["a", "b"]);
        assert_eq!(reverse(vec!["a", "b"]).to_vec(), vec!["b", "a"]);
        assert_eq!(over_slice(&[1, 2]).to_vec(), vec![&1, &2]);
        assert_eq!(option(Some(5)).to_vec(), vec![5]);
        assert!(!option(None::<u8>).has_next());
        assert_eq!(wrap("ab".chars()).to_vec(), vec!['a', 'b']);
    }

    #[test]
    fn test_collection_factory() {
        let set: BTreeSet<_> = [3, 1, 2].into_iter().collect();
        let mut cursor = collection(&set);
        assert_eq!(cursor.exact_size(), Some(3));
        assert_eq!(cursor.next(), Ok(&1));
    }

    #[test]
    fn test_flatten_all() {
        let nested = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(flatten_all(nested).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_numeric_factories() {
        assert_eq!(ints(&[1, 2]).to_vec(), vec![1, 2]);
        assert_eq!(reverse_longs(&[1, 2]).to_vec(), vec![2, 1]);
        assert_eq!(reverse_doubles(&[0.5, 1.5]).to_vec(), vec![1.5, 0.5]);
        assert_eq!(reverse_ints(&[]).to_vec(), Vec::<i32>::new());
        assert_eq!(longs_by_indexing(|i| i as i64 * 2, 3).to_vec(), vec![0, 2, 4]);
        assert_eq!(doubles_by_indexing(|i| i as f64 / 2.0, 2).to_vec(), vec![0.0, 0.5]);
        assert_eq!(ints_by_indexing(|i| -(i as i32), 2).to_vec(), vec![0, -1]);
    }
}
