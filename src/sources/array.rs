//! Cursors over an owned snapshot of elements.

use std::vec::IntoIter;

use crate::core::cursor::Cursor;
use crate::foundation::error::{OrExhausted, Result};
use crate::foundation::size::SizeDescriptor;

/// A cursor over an owned `Vec`, forward or last-to-first.
///
/// Always reports `Exact(remaining)`.
#[derive(Debug, Clone)]
pub struct ArraySource<T> {
    items: IntoIter<T>,
    reversed: bool,
}

impl<T> ArraySource<T> {
    /// Traverses `items` from the first element to the last.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
            reversed: false,
        }
    }

    /// Traverses `items` from the last element to the first.
    pub fn reversed(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
            reversed: true,
        }
    }

    /// The elements not yet produced, in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> Cursor for ArraySource<T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.items.len() > 0
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        if self.reversed {
            self.items.next_back().or_exhausted()
        } else {
            self.items.next().or_exhausted()
        }
    }

    #[inline]
    fn size(&self) -> SizeDescriptor {
        SizeDescriptor::Exact(self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::error::Error;

    #[test]
    fn test_forward() {
        let mut source = ArraySource::new(vec!["a", "b"]);
        assert_eq!(source.size(), SizeDescriptor::Exact(2));
        assert_eq!(source.next(), Ok("a"));
        assert_eq!(source.size(), SizeDescriptor::Exact(1));
        assert_eq!(source.as_slice(), &["b"]);
        assert_eq!(source.next(), Ok("b"));
        assert_eq!(source.next(), Err(Error::Exhausted));
    }

    #[test]
    fn test_reversed() {
        let mut source = ArraySource::reversed(vec![1, 2, 3]);
        assert_eq!(source.next(), Ok(3));
        assert_eq!(source.skip(), Ok(()));
        assert_eq!(source.exact_size(), Some(1));
        assert_eq!(source.next(), Ok(1));
        assert!(!source.has_next());
        assert_eq!(source.skip(), Err(Error::Exhausted));
    }
}
