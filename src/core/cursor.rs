//! The cursor contract and its combinator surface.
//!
//! A [`Cursor`] is a single-use, forward-only traversal handle. It answers
//! [`has_next`](Cursor::has_next) before every production call instead of
//! signalling the end through its return value, and it reports what it knows
//! about its remaining length through a [`SizeDescriptor`].
//!
//! ## State machine
//!
//! Every cursor is either *ready* (`has_next()` is `true`) or *exhausted*.
//! [`next`](Cursor::next) and [`skip`](Cursor::skip) are only valid while
//! ready; on an exhausted cursor they fail with [`Error::Exhausted`]. Once
//! exhausted, a cursor stays exhausted.
//!
//! ## Composition
//!
//! Decorators take the cursor by value and own it for the rest of its life,
//! so consuming through a decorator can never be observed through another
//! alias. Use [`by_ref`](Cursor::by_ref) to lend a cursor to a decorator and
//! keep draining it afterwards.
//!
//! ```rust
//! use flow_core::prelude::*;
//!
//! let squares = by_indexing(|i| i * i, 10).take(3).to_vec();
//! assert_eq!(squares, vec![0, 1, 4]);
//! ```
//!
//! [`Error::Exhausted`]: crate::foundation::error::Error::Exhausted

use core::cmp::Ordering;
use core::hash::Hash;
use core::iter::FusedIterator;

use indexmap::{IndexMap, IndexSet};

use crate::consume::{collection, min_max, predicate, reduction};
use crate::core::config::MaterializeConfig;
use crate::foundation::error::Result;
use crate::foundation::size::SizeDescriptor;
use crate::foundation::types::Partition;
use crate::ops::{
    accumulate::{Accumulate, AccumulateFrom},
    append::Append,
    drop::{DropFirst, DropWhile},
    enumerate::Enumerate,
    filter::Filter,
    flatten::FlatMap,
    map::Map,
    pair_fold::PairFold,
    slice::Slice,
    take::{Take, TakeWhile},
    zip::{Combine, Zip},
};
use crate::sources::array::ArraySource;

// ============================================================================
// Core Cursor Trait
// ============================================================================

/// A single-pass, pull-based traversal over a sequence of elements.
///
/// Implementors provide the four required methods; everything else is
/// derived. The element kind is the `Item` type: reference kinds and the
/// numeric kinds (`i32`, `i64`, `f64`) share this one trait, and each
/// pipeline is monomorphized for its kind without boxing elements.
pub trait Cursor {
    /// The element kind this cursor produces.
    type Item;

    /// Returns `true` if a further element can be produced.
    ///
    /// Takes `&mut self` because lookahead operators fill their buffer on
    /// the first query.
    fn has_next(&mut self) -> bool;

    /// Produces the next element.
    ///
    /// Fails with `Error::Exhausted` if `has_next()` is `false`.
    fn next(&mut self) -> Result<Self::Item>;

    /// Advances past the next element without producing it.
    ///
    /// Same preconditions as [`next`](Self::next).
    fn skip(&mut self) -> Result<()> {
        self.next().map(|_| ())
    }

    /// Describes how many elements remain.
    fn size(&self) -> SizeDescriptor;

    /// The known lower bound on the remaining elements.
    #[inline]
    fn lower_bound(&self) -> Option<usize> {
        self.size().lower_bound()
    }

    /// The known upper bound on the remaining elements.
    #[inline]
    fn upper_bound(&self) -> Option<usize> {
        self.size().upper_bound()
    }

    /// The exact number of remaining elements, if known.
    #[inline]
    fn exact_size(&self) -> Option<usize> {
        self.size().exact_size()
    }

    /// Produces the next element if there is one.
    ///
    /// This is the draining primitive used by terminal consumers: it never
    /// calls [`next`](Self::next) on an exhausted cursor.
    #[inline]
    fn next_element(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.next().ok()
        } else {
            None
        }
    }

    /// Borrows this cursor so a decorator can drain part of it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Adapts this cursor into a standard [`Iterator`].
    fn elements(self) -> Elements<Self>
    where
        Self: Sized,
    {
        Elements { cursor: self }
    }

    /// Erases the concrete type of this cursor.
    fn boxed<'a>(self) -> Box<dyn Cursor<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    // ------------------------------------------------------------------------
    // One-to-one operators
    // ------------------------------------------------------------------------

    /// Applies `f` to every element.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Converts every element into the 32-bit integer kind.
    fn map_to_int<F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> i32,
    {
        Map::new(self, f)
    }

    /// Converts every element into the 64-bit integer kind.
    fn map_to_long<F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> i64,
    {
        Map::new(self, f)
    }

    /// Converts every element into the 64-bit floating point kind.
    fn map_to_double<F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> f64,
    {
        Map::new(self, f)
    }

    /// Pairs every element with its position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Emits the running accumulation, seeded by the first element.
    fn accumulate<F>(self, f: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate::new(self, f)
    }

    /// Emits the running accumulation, seeded by `identity`.
    fn accumulate_from<R, F>(self, identity: R, f: F) -> AccumulateFrom<Self, R, F>
    where
        Self: Sized,
        R: Clone,
        F: FnMut(R, Self::Item) -> R,
    {
        AccumulateFrom::new(self, identity, f)
    }

    /// Combines each adjacent pair of elements.
    fn pair_fold<R, F>(self, f: F) -> PairFold<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> R,
    {
        PairFold::new(self, f)
    }

    // ------------------------------------------------------------------------
    // Selecting operators
    // ------------------------------------------------------------------------

    /// Keeps only the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Emits at most the first `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Emits elements until `predicate` first fails.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Discards the first `n` elements.
    fn drop(self, n: usize) -> DropFirst<Self>
    where
        Self: Sized,
    {
        DropFirst::new(self, n)
    }

    /// Discards elements until `predicate` first fails.
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Emits the elements at the indices `index(0), index(1), ...`.
    ///
    /// `index` must be strictly increasing. An index at or below one already
    /// passed is clamped to the next unvisited element.
    fn slice<F>(self, index: F) -> Slice<Self, F>
    where
        Self: Sized,
        F: FnMut(usize) -> usize,
    {
        Slice::new(self, index)
    }

    // ------------------------------------------------------------------------
    // Nesting and binary operators
    // ------------------------------------------------------------------------

    /// Maps every element to a cursor and emits their elements in turn.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, F, U>
    where
        Self: Sized,
        U: IntoCursor,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, f)
    }

    /// Emits the elements of every inner cursor in turn.
    fn flatten(self) -> FlatMap<Self, fn(Self::Item) -> Self::Item, Self::Item>
    where
        Self: Sized,
        Self::Item: IntoCursor,
    {
        FlatMap::new(self, core::convert::identity as fn(Self::Item) -> Self::Item)
    }

    /// Pairs elements from both cursors until either ends.
    fn zip<U>(self, other: U) -> Zip<Self, U::Cursor>
    where
        Self: Sized,
        U: IntoCursor,
    {
        Zip::new(self, other.into_cursor())
    }

    /// Combines elements from both cursors with `f` until either ends.
    fn combine<U, R, F>(self, other: U, f: F) -> Combine<Self, U::Cursor, F>
    where
        Self: Sized,
        U: IntoCursor,
        F: FnMut(Self::Item, U::Item) -> R,
    {
        Combine::new(self, other.into_cursor(), f)
    }

    /// Emits this cursor's elements, then `other`'s.
    fn append<U>(self, other: U) -> Append<Self, U::Cursor>
    where
        Self: Sized,
        U: IntoCursor<Item = Self::Item>,
    {
        Append::new(self, other.into_cursor())
    }

    /// Emits `other`'s elements, then this cursor's.
    fn insert<U>(self, other: U) -> Append<U::Cursor, Self>
    where
        Self: Sized,
        U: IntoCursor<Item = Self::Item>,
    {
        Append::new(other.into_cursor(), self)
    }

    // ------------------------------------------------------------------------
    // Terminal consumers: reduction
    // ------------------------------------------------------------------------

    /// Folds every element into `identity`.
    fn fold<R, F>(self, identity: R, f: F) -> R
    where
        Self: Sized,
        F: FnMut(R, Self::Item) -> R,
    {
        reduction::fold(self, identity, f)
    }

    /// Folds every element into the first one.
    ///
    /// Fails with `Error::EmptyReduction` on an empty cursor.
    fn reduce<F>(self, f: F) -> Result<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduction::reduce(self, f)
    }

    /// Folds every element into the first one, `None` when empty.
    fn reduce_option<F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduction::reduce_option(self, f)
    }

    /// Counts the remaining elements.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        reduction::count(self)
    }

    /// Returns the final element.
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        reduction::last(self)
    }

    // ------------------------------------------------------------------------
    // Terminal consumers: extrema
    // ------------------------------------------------------------------------

    /// The element with the smallest key. Ties keep the first.
    fn min_by_key<K, F>(self, key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        min_max::min_by_key(self, key)
    }

    /// The element with the largest key. Ties keep the first.
    fn max_by_key<K, F>(self, key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        min_max::max_by_key(self, key)
    }

    /// The smallest element under `compare`. Ties keep the first.
    fn min_by<F>(self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        min_max::min_by(self, compare)
    }

    /// The largest element under `compare`. Ties keep the first.
    fn max_by<F>(self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        min_max::max_by(self, compare)
    }

    // ------------------------------------------------------------------------
    // Terminal consumers: predicates
    // ------------------------------------------------------------------------

    /// `true` if every element satisfies `predicate`. Short-circuits.
    fn all_match<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        predicate::all_match(self, predicate)
    }

    /// `true` if some element satisfies `predicate`. Short-circuits.
    fn any_match<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        predicate::any_match(self, predicate)
    }

    /// `true` if no element satisfies `predicate`. Short-circuits.
    fn none_match<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        predicate::none_match(self, predicate)
    }

    /// `true` if every element equals the first. Short-circuits.
    fn are_all_equal(self) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        predicate::are_all_equal(self)
    }

    /// The first element satisfying `predicate`.
    fn find_first<P>(self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        predicate::find_first(self, predicate)
    }

    /// Splits the elements by `predicate`, preserving order on both sides.
    fn partition<P>(self, predicate: P) -> Partition<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        predicate::partition(self, predicate)
    }

    // ------------------------------------------------------------------------
    // Terminal consumers: materialization
    // ------------------------------------------------------------------------

    /// Collects the elements into a vector.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        collection::to_vec(self, &MaterializeConfig::default())
    }

    /// Collects the elements into a vector using `config`.
    fn to_vec_with(self, config: &MaterializeConfig) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        collection::to_vec(self, config)
    }

    /// Collects the distinct elements in first-occurrence order.
    fn to_set(self) -> IndexSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Hash + Eq,
    {
        collection::to_set(self, &MaterializeConfig::default())
    }

    /// Collects the distinct elements using `config`.
    fn to_set_with(self, config: &MaterializeConfig) -> IndexSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Hash + Eq,
    {
        collection::to_set(self, config)
    }

    /// Collects the elements into any collection.
    fn to_collection<B>(self) -> B
    where
        Self: Sized,
        B: Default + Extend<Self::Item>,
    {
        collection::to_collection(self)
    }

    /// Maps every element to a key and a value. A later key overwrites the
    /// earlier value but keeps its position.
    fn to_map<K, V, FK, FV>(self, key: FK, value: FV) -> IndexMap<K, V>
    where
        Self: Sized,
        K: Hash + Eq,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(&Self::Item) -> V,
    {
        collection::to_map(self, key, value)
    }

    /// Uses every element as a key for the value `f` computes from it.
    fn associate<V, F>(self, f: F) -> IndexMap<Self::Item, V>
    where
        Self: Sized,
        Self::Item: Hash + Eq,
        F: FnMut(&Self::Item) -> V,
    {
        collection::associate(self, f)
    }

    /// Groups the elements by `classifier`, in first-occurrence key order.
    fn group_by<K, F>(self, classifier: F) -> IndexMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        collection::group_by(self, classifier)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        (**self).skip()
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        (**self).size()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        (**self).skip()
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        (**self).size()
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Conversion into a [`Cursor`].
///
/// Binary operators and flattening accept anything implementing this trait,
/// so a second operand may be a cursor or a plain sequence.
pub trait IntoCursor {
    /// The element kind of the resulting cursor.
    type Item;

    /// The resulting cursor type.
    type Cursor: Cursor<Item = Self::Item>;

    /// Converts `self` into a cursor.
    fn into_cursor(self) -> Self::Cursor;
}

impl<C: Cursor> IntoCursor for C {
    type Item = C::Item;
    type Cursor = C;

    #[inline]
    fn into_cursor(self) -> C {
        self
    }
}

impl<T> IntoCursor for Vec<T> {
    type Item = T;
    type Cursor = ArraySource<T>;

    fn into_cursor(self) -> ArraySource<T> {
        ArraySource::new(self)
    }
}

impl<T, const N: usize> IntoCursor for [T; N] {
    type Item = T;
    type Cursor = ArraySource<T>;

    fn into_cursor(self) -> ArraySource<T> {
        ArraySource::new(Vec::from(self))
    }
}

// ============================================================================
// Standard iterator interop
// ============================================================================

/// A [`Cursor`] viewed as a standard [`Iterator`].
///
/// Created by [`Cursor::elements`]. The iterator's `size_hint` is derived
/// from the cursor's [`SizeDescriptor`].
#[derive(Debug, Clone)]
pub struct Elements<C> {
    cursor: C,
}

impl<C> Elements<C> {
    /// Returns the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Elements<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_element()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size().to_size_hint()
    }
}

impl<C: Cursor> FusedIterator for Elements<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::error::Error;
    use crate::sources::factories::{by_indexing, empty, over};

    #[test]
    fn test_state_machine() {
        let mut cursor = over(vec![1, 2]);
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.skip(), Ok(()));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(Error::Exhausted));
        assert_eq!(cursor.skip(), Err(Error::Exhausted));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_by_ref_splits_without_revisiting() {
        let mut source = over(vec![1, 2, 3, 4, 5]);
        let prefix = source.by_ref().take(2).to_vec();
        let suffix = source.to_vec();
        assert_eq!(prefix, vec![1, 2]);
        assert_eq!(suffix, vec![3, 4, 5]);
    }

    #[test]
    fn test_boxed_cursor() {
        let mut cursor: Box<dyn Cursor<Item = usize>> = by_indexing(|i| i + 1, 3).boxed();
        assert_eq!(cursor.exact_size(), Some(3));
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_elements_interop() {
        let elements = over(vec!["a", "b", "c"]).elements();
        assert_eq!(elements.size_hint(), (3, Some(3)));
        let joined: String = elements.collect();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_into_cursor_for_sequences() {
        let zipped = over(vec![1, 2, 3]).zip(["x", "y"]).to_vec();
        assert_eq!(zipped, vec![(1, "x"), (2, "y")]);
        let appended = empty::<i32>().append(vec![7]).to_vec();
        assert_eq!(appended, vec![7]);
    }
}
