//! Materializing consumers.
//!
//! Vectors and sets are pre-sized from the cursor's size descriptor as
//! allowed by [`MaterializeConfig`]. Maps and sets keep first-occurrence
//! order.

use core::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::core::config::MaterializeConfig;
use crate::core::cursor::Cursor;
use crate::foundation::types::Groups;

/// Collects every element into a vector.
pub fn to_vec<C: Cursor>(mut cursor: C, config: &MaterializeConfig) -> Vec<C::Item> {
    let size = cursor.size();
    let capacity = config.initial_capacity(size);
    trace!(?size, capacity, "collecting into vec");
    let mut out = Vec::with_capacity(capacity);
    while let Some(element) = cursor.next_element() {
        out.push(element);
    }
    out
}

/// Collects the distinct elements.
pub fn to_set<C>(mut cursor: C, config: &MaterializeConfig) -> IndexSet<C::Item>
where
    C: Cursor,
    C::Item: Hash + Eq,
{
    let size = cursor.size();
    let capacity = config.initial_capacity(size);
    trace!(?size, capacity, "collecting into set");
    let mut out = IndexSet::with_capacity(capacity);
    while let Some(element) = cursor.next_element() {
        out.insert(element);
    }
    out
}

/// Collects every element into `B` through [`Extend`].
pub fn to_collection<C, B>(cursor: C) -> B
where
    C: Cursor,
    B: Default + Extend<C::Item>,
{
    let mut out = B::default();
    out.extend(cursor.elements());
    out
}

/// Builds a map from a key and a value computed per element. A repeated key
/// takes the later value and keeps its original position.
pub fn to_map<C, K, V, FK, FV>(mut cursor: C, mut key: FK, mut value: FV) -> IndexMap<K, V>
where
    C: Cursor,
    K: Hash + Eq,
    FK: FnMut(&C::Item) -> K,
    FV: FnMut(&C::Item) -> V,
{
    let mut out = IndexMap::new();
    while let Some(element) = cursor.next_element() {
        out.insert(key(&element), value(&element));
    }
    out
}

/// Builds a map from every element to the value `f` computes for it.
pub fn associate<C, V, F>(mut cursor: C, mut f: F) -> IndexMap<C::Item, V>
where
    C: Cursor,
    C::Item: Hash + Eq,
    F: FnMut(&C::Item) -> V,
{
    let mut out = IndexMap::new();
    while let Some(element) = cursor.next_element() {
        let v = f(&element);
        out.insert(element, v);
    }
    out
}

/// Groups elements by the key `classifier` assigns them.
pub fn group_by<C, K, F>(mut cursor: C, mut classifier: F) -> Groups<K, C::Item>
where
    C: Cursor,
    K: Hash + Eq,
    F: FnMut(&C::Item) -> K,
{
    let mut out = Groups::new();
    while let Some(element) = cursor.next_element() {
        out.entry(classifier(&element)).or_default().push(element);
    }
    out
}
