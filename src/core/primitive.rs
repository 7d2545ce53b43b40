//! Numeric element kinds.
//!
//! The three numeric kinds (`i32`, `i64`, `f64`) run through the very same
//! operator implementations as reference kinds: every decorator is generic
//! over `Item`, and monomorphization gives each kind its own unboxed code.
//! What differs per kind lives here: the arithmetic used by numeric
//! consumers, and the explicit widening conversions between kinds.

use core::fmt::Debug;

use crate::consume::{min_max, reduction};
use crate::core::cursor::Cursor;
use crate::foundation::types::ElementKind;
use crate::ops::map::Map;

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A numeric element kind.
///
/// Sealed: implemented for `i32`, `i64` and `f64` only.
pub trait Primitive: Copy + PartialOrd + Debug + Default + private::Sealed + 'static {
    /// Which kind this is.
    const KIND: ElementKind;

    /// The additive identity.
    const ZERO: Self;

    /// Adds two values. Integer kinds wrap on overflow.
    fn plus(self, rhs: Self) -> Self;

    /// Widens into the double kind.
    fn to_f64(self) -> f64;
}

impl Primitive for i32 {
    const KIND: ElementKind = ElementKind::Int;
    const ZERO: Self = 0;

    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Primitive for i64 {
    const KIND: ElementKind = ElementKind::Long;
    const ZERO: Self = 0;

    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Primitive for f64 {
    const KIND: ElementKind = ElementKind::Double;
    const ZERO: Self = 0.0;

    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Consumers and conversions available on cursors of a numeric kind.
pub trait NumericCursor<T: Primitive>: Cursor<Item = T> + Sized {
    /// Sums the elements; `ZERO` when empty.
    fn sum(self) -> T {
        reduction::sum(self)
    }

    /// The arithmetic mean, `None` when empty.
    fn average(self) -> Option<f64> {
        reduction::average(self)
    }

    /// The smallest element. Ties and incomparable values keep the earlier.
    fn min(self) -> Option<T> {
        min_max::min_by_key(self, |x| *x)
    }

    /// The largest element. Ties and incomparable values keep the earlier.
    fn max(self) -> Option<T> {
        min_max::max_by_key(self, |x| *x)
    }

    /// Widens every element into the double kind.
    fn as_doubles(self) -> Map<Self, fn(T) -> f64> {
        Map::new(self, T::to_f64 as fn(T) -> f64)
    }

    /// Widens every element into the long kind.
    fn as_longs(self) -> Map<Self, fn(T) -> i64>
    where
        T: Into<i64>,
    {
        Map::new(self, <T as Into<i64>>::into as fn(T) -> i64)
    }
}

impl<T: Primitive, C: Cursor<Item = T>> NumericCursor<T> for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::factories::{doubles, empty, ints, longs};

    #[test]
    fn test_kinds() {
        assert_eq!(i32::KIND, ElementKind::Int);
        assert_eq!(i64::KIND, ElementKind::Long);
        assert_eq!(f64::KIND, ElementKind::Double);
    }

    #[test]
    fn test_integer_sum_wraps() {
        assert_eq!(ints(&[i32::MAX, 1]).sum(), i32::MIN);
        assert_eq!(longs(&[1, 2, 3]).sum(), 6);
        assert_eq!(empty::<f64>().sum(), 0.0);
    }

    #[test]
    fn test_min_max_average() {
        assert_eq!(ints(&[3, -1, 4, -1]).min(), Some(-1));
        assert_eq!(ints(&[3, -1, 4, 4]).max(), Some(4));
        assert_eq!(doubles(&[1.0, 2.0, 6.0]).average(), Some(3.0));
        assert_eq!(empty::<i64>().average(), None);
        assert_eq!(empty::<i32>().max(), None);
    }

    #[test]
    fn test_nan_never_displaces() {
        assert_eq!(doubles(&[2.0, f64::NAN, 1.0]).min(), Some(1.0));
        assert_eq!(doubles(&[2.0, f64::NAN, 5.0]).max(), Some(5.0));
    }

    #[test]
    fn test_widening() {
        assert_eq!(ints(&[1, 2]).as_longs().to_vec(), vec![1_i64, 2]);
        assert_eq!(longs(&[3]).as_doubles().to_vec(), vec![3.0]);
        assert_eq!(ints(&[1, 2, 3]).as_doubles().exact_size(), Some(3));
    }
}
