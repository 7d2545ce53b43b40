//! Value types produced by terminal consumers.

use indexmap::IndexMap;

/// The two sides of a predicate partition, each in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition<T> {
    /// Elements that satisfied the predicate.
    pub passed: Vec<T>,
    /// Elements that did not.
    pub failed: Vec<T>,
}

impl<T> Partition<T> {
    /// Creates an empty partition.
    pub const fn new() -> Self {
        Self {
            passed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Splits into `(passed, failed)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.passed, self.failed)
    }

    /// Total number of partitioned elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// Returns `true` if nothing was partitioned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passed.is_empty() && self.failed.is_empty()
    }
}

/// Elements grouped under their key, keys in first-occurrence order.
pub type Groups<K, T> = IndexMap<K, Vec<T>>;

/// Numeric element kinds a cursor can be specialized for.
///
/// Reference kinds are any other `Item` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit signed integers.
    Int,
    /// 64-bit signed integers.
    Long,
    /// 64-bit floating point numbers.
    Double,
}
