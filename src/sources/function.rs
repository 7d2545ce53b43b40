//! Cursors generating elements from an index function.

use core::fmt;

use crate::core::cursor::Cursor;
use crate::foundation::error::{Error, Result};
use crate::foundation::size::SizeDescriptor;

/// A cursor applying `f` to the indices `0..bound` on demand.
///
/// Reports `Exact(bound - index)`.
#[derive(Clone)]
pub struct FunctionSource<F> {
    f: F,
    index: usize,
    bound: usize,
}

impl<F> FunctionSource<F> {
    /// Generates `f(0), f(1), ..., f(bound - 1)`.
    pub const fn new(f: F, bound: usize) -> Self {
        Self { f, index: 0, bound }
    }

    /// The next index `f` will be applied to.
    #[inline]
    pub const fn position(&self) -> usize {
        self.index
    }
}

impl<F> fmt::Debug for FunctionSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSource")
            .field("index", &self.index)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl<T, F> Cursor for FunctionSource<F>
where
    F: FnMut(usize) -> T,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.index < self.bound
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        if self.index >= self.bound {
            return Err(Error::Exhausted);
        }
        let element = (self.f)(self.index);
        self.index += 1;
        Ok(element)
    }

    #[inline]
    fn skip(&mut self) -> Result<()> {
        if self.index >= self.bound {
            return Err(Error::Exhausted);
        }
        self.index += 1;
        Ok(())
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        SizeDescriptor::Exact(self.bound - self.index)
    }
}
