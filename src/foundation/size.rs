//! Size descriptors and their composition algebra.
//!
//! Every cursor carries a [`SizeDescriptor`] stating what is known about the
//! number of elements it has left. Decorating a cursor derives a new
//! descriptor from the upstream one through the functions in this module.
//!
//! The descriptor is a hint for materialization (pre-sizing a collection). It
//! may understate what is known, never overstate it: `Unknown` is always
//! safe, a wrong `Exact` never is.
//!
//! | operator                            | result                                   |
//! |-------------------------------------|------------------------------------------|
//! | `map`, `enumerate`, `accumulate`    | upstream unchanged                       |
//! | `filter`, `take_while`, `drop_while`| `Unknown`                                |
//! | `slice`, `flatten`                  | `Unknown`                                |
//! | `take(n)`                           | `Exact(min(e, n))` or `Bounded(0, n)`    |
//! | `drop(n)`                           | `Exact(e - n)` or both bounds minus `n`  |
//! | `zip`, `combine`                    | `min` of both sides, see [`SizeDescriptor::zipped`] |
//! | `append`, `insert`                  | sum of both sides                        |
//! | `pair_fold`                         | `Exact(e - 1)`                           |

use core::cmp::min;

/// What is known about the number of elements a cursor has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeDescriptor {
    /// Exactly this many elements remain.
    Exact(usize),
    /// At least `lower` and, when present, at most `upper` elements remain.
    Bounded {
        /// Inclusive lower bound.
        lower: usize,
        /// Inclusive upper bound, if one is known.
        upper: Option<usize>,
    },
    /// Nothing is known. Absorbing under [`decrement`](Self::decrement).
    Unknown,
}

impl Default for SizeDescriptor {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl SizeDescriptor {
    /// The shared unknown descriptor.
    pub const UNKNOWN: Self = Self::Unknown;

    /// The descriptor of a cursor with nothing left.
    pub const EMPTY: Self = Self::Exact(0);

    /// Creates a bounded descriptor.
    #[inline]
    pub const fn bounded(lower: usize, upper: Option<usize>) -> Self {
        Self::Bounded { lower, upper }
    }

    /// Builds a descriptor from a standard `(lower, upper)` size hint.
    pub fn from_size_hint((lower, upper): (usize, Option<usize>)) -> Self {
        match upper {
            Some(upper) if upper == lower => Self::Exact(lower),
            None if lower == 0 => Self::Unknown,
            upper => Self::Bounded { lower, upper },
        }
    }

    /// Converts into a standard `(lower, upper)` size hint.
    pub fn to_size_hint(self) -> (usize, Option<usize>) {
        (self.lower_bound().unwrap_or(0), self.upper_bound())
    }

    /// The known lower bound on the remaining elements.
    #[inline]
    pub const fn lower_bound(&self) -> Option<usize> {
        match *self {
            Self::Exact(n) => Some(n),
            Self::Bounded { lower, .. } => Some(lower),
            Self::Unknown => None,
        }
    }

    /// The known upper bound on the remaining elements.
    #[inline]
    pub const fn upper_bound(&self) -> Option<usize> {
        match *self {
            Self::Exact(n) => Some(n),
            Self::Bounded { upper, .. } => upper,
            Self::Unknown => None,
        }
    }

    /// The exact number of remaining elements, present only when both bounds
    /// are known and coincide.
    #[inline]
    pub const fn exact_size(&self) -> Option<usize> {
        match *self {
            Self::Exact(n) => Some(n),
            Self::Bounded { lower, upper: Some(upper) } if lower == upper => Some(lower),
            _ => None,
        }
    }

    /// Returns `true` if nothing at all is known.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Records that one element was consumed or skipped.
    pub fn decrement(&mut self) {
        match self {
            Self::Exact(n) => *n = n.saturating_sub(1),
            Self::Bounded { lower, upper } => {
                *lower = lower.saturating_sub(1);
                if let Some(upper) = upper {
                    *upper = upper.saturating_sub(1);
                }
            }
            Self::Unknown => {}
        }
    }

    /// An independent snapshot of this descriptor.
    #[inline]
    #[must_use]
    pub const fn copy(&self) -> Self {
        *self
    }

    /// The number of slots worth pre-allocating for the remaining elements.
    pub fn capacity_hint(&self) -> Option<usize> {
        self.exact_size().or_else(|| self.upper_bound())
    }

    // ------------------------------------------------------------------------
    // Composition algebra
    // ------------------------------------------------------------------------

    /// One-to-one transformations keep the upstream descriptor.
    #[inline]
    #[must_use]
    pub const fn mapped(self) -> Self {
        self
    }

    /// Predicate-driven operators cannot know their output size.
    #[inline]
    #[must_use]
    pub const fn filtered(self) -> Self {
        Self::Unknown
    }

    /// Inner sequence lengths are not known in advance.
    #[inline]
    #[must_use]
    pub const fn flattened(self) -> Self {
        Self::Unknown
    }

    /// Running accumulation emits one value per input.
    #[inline]
    #[must_use]
    pub const fn accumulated(self) -> Self {
        self
    }

    /// Descriptor of the first `n` elements.
    #[must_use]
    pub fn taken(self, n: usize) -> Self {
        match self.exact_size() {
            Some(exact) => Self::Exact(min(exact, n)),
            None => Self::bounded(0, Some(n)),
        }
    }

    /// Descriptor after discarding the first `n` elements.
    #[must_use]
    pub fn dropped(self, n: usize) -> Self {
        if let Some(exact) = self.exact_size() {
            return Self::Exact(exact.saturating_sub(n));
        }
        match (self.lower_bound(), self.upper_bound()) {
            (None, None) => Self::Unknown,
            (lower, upper) => Self::Bounded {
                lower: lower.unwrap_or(0).saturating_sub(n),
                upper: upper.map(|u| u.saturating_sub(n)),
            },
        }
    }

    /// Descriptor of two cursors consumed in lockstep until either ends.
    ///
    /// Exact sizes combine with `min`. An unknown side makes the result
    /// unknown unless the other side is exact, which caps it.
    #[must_use]
    pub fn zipped(self, other: Self) -> Self {
        if let (Some(a), Some(b)) = (self.exact_size(), other.exact_size()) {
            return Self::Exact(min(a, b));
        }
        match (self, other) {
            (Self::Unknown, Self::Unknown) => Self::Unknown,
            (Self::Unknown, known) | (known, Self::Unknown) => match known.exact_size() {
                Some(n) => Self::bounded(0, Some(n)),
                None => Self::Unknown,
            },
            (a, b) => Self::Bounded {
                lower: min(a.lower_bound().unwrap_or(0), b.lower_bound().unwrap_or(0)),
                upper: match (a.upper_bound(), b.upper_bound()) {
                    (Some(x), Some(y)) => Some(min(x, y)),
                    (x, y) => x.or(y),
                },
            },
        }
    }

    /// Descriptor of one cursor followed by another.
    #[must_use]
    pub fn appended(self, other: Self) -> Self {
        if self.is_unknown() || other.is_unknown() {
            return Self::Unknown;
        }
        if let (Some(a), Some(b)) = (self.exact_size(), other.exact_size()) {
            if let Some(total) = a.checked_add(b) {
                return Self::Exact(total);
            }
        }
        let lower = self
            .lower_bound()
            .unwrap_or(0)
            .saturating_add(other.lower_bound().unwrap_or(0));
        let upper = match (self.upper_bound(), other.upper_bound()) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        Self::Bounded { lower, upper }
    }

    /// Adjacent-pair folding yields one fewer element than its input.
    #[must_use]
    pub fn pair_folded(self) -> Self {
        match self {
            Self::Exact(n) => Self::Exact(n.saturating_sub(1)),
            Self::Bounded { lower, upper } => Self::Bounded {
                lower: lower.saturating_sub(1),
                upper: upper.map(|u| u.saturating_sub(1)),
            },
            Self::Unknown => Self::Unknown,
        }
    }
}
