//! Numeric range sources.
//!
//! An empty or unreachable span yields an empty range rather than an
//! error. Only arguments with no meaningful range at all, a zero step or a
//! partition into no sub-intervals, fail with [`Error::InvalidArgument`].

use crate::core::cursor::Cursor;
use crate::foundation::error::{require_arg, Error, Result};
use crate::foundation::size::SizeDescriptor;
use crate::sources::function::FunctionSource;

/// An arithmetic progression of `i32` values.
///
/// Reports `Exact(remaining)`.
#[derive(Debug, Clone)]
pub struct IntRange {
    next: i64,
    step: i64,
    remaining: usize,
}

impl IntRange {
    /// The half-open range `[start, end)` traversed by a non-zero `step`.
    ///
    /// Empty when `end` cannot be approached from `start` in the direction
    /// of `step`.
    fn spanning(start: i32, end: i32, step: i32) -> Self {
        let (start, end, step) = (i64::from(start), i64::from(end), i64::from(step));
        let length = end - start;
        let remaining = if length.signum() == step.signum() {
            let stride = step.unsigned_abs();
            // At most 2^32 elements, which fits every supported target.
            usize::try_from((length.unsigned_abs() + stride - 1) / stride).unwrap_or(usize::MAX)
        } else {
            0
        };
        Self {
            next: start,
            step,
            remaining,
        }
    }
}

impl Cursor for IntRange {
    type Item = i32;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.remaining > 0
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Result<i32> {
        if self.remaining == 0 {
            return Err(Error::Exhausted);
        }
        // Every value produced lies between two i32 endpoints.
        let value = self.next as i32;
        self.next += self.step;
        self.remaining -= 1;
        Ok(value)
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        SizeDescriptor::Exact(self.remaining)
    }
}

/// The integers `0, 1, ..., upper - 1`. Empty if `upper <= 0`.
pub fn until(upper: i32) -> IntRange {
    IntRange::spanning(0, upper, 1)
}

/// The integers `low, low + 1, ..., high - 1`. Empty if `low >= high`.
pub fn between(low: i32, high: i32) -> IntRange {
    IntRange::spanning(low, high, 1)
}

/// The integers from `start` towards `end` (exclusive) in strides of `step`.
///
/// Empty when the sign of `step` differs from the sign of `end - start`.
/// Fails if `step` is zero.
pub fn between_step(start: i32, end: i32, step: i32) -> Result<IntRange> {
    require_arg(step != 0, || "range step must be non-zero".to_string())?;
    Ok(IntRange::spanning(start, end, step))
}

/// The `n + 1` evenly spaced points splitting the interval from `start` to
/// `end` into `n` sub-intervals, both endpoints included and ordered from
/// `start`. A reversed interval yields descending points.
///
/// Fails if `n` is zero or `n + 1` points cannot be indexed.
#[allow(clippy::cast_precision_loss)]
pub fn partition(
    start: f64,
    end: f64,
    n: usize,
) -> Result<FunctionSource<impl FnMut(usize) -> f64 + Clone>> {
    require_arg(n > 0, || "partition needs at least one sub-interval".to_string())?;
    let points = n
        .checked_add(1)
        .ok_or_else(|| Error::invalid_argument(format!("cannot partition into {n} sub-intervals")))?;

    let width = (end - start) / n as f64;
    Ok(FunctionSource::new(
        move |i| if i == n { end } else { start + i as f64 * width },
        points,
    ))
}
