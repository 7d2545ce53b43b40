//! Error handling for Flow Core.
//!
//! Every failure a cursor pipeline can report falls into one of three
//! conditions. None of them is used for ordinary control flow: whether a
//! cursor has more elements is asked up front through
//! [`Cursor::has_next`](crate::core::cursor::Cursor::has_next).

use thiserror::Error;

/// The main error type for Flow Core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A production method (`next`, `skip`) was called on a cursor with no
    /// remaining element.
    #[error("cursor exhausted: no further element")]
    Exhausted,

    /// A constructor or operator received a structurally invalid parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An identity-less reduction was asked to reduce zero elements.
    #[error("cannot reduce an empty cursor without an identity")]
    EmptyReduction,
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] from any displayable message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// A specialized Result type for Flow Core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Extension trait turning a missing value into [`Error::Exhausted`].
pub trait OrExhausted<T> {
    /// Converts `None` into `Err(Error::Exhausted)`.
    fn or_exhausted(self) -> Result<T>;
}

impl<T> OrExhausted<T> for Option<T> {
    #[inline]
    fn or_exhausted(self) -> Result<T> {
        self.ok_or(Error::Exhausted)
    }
}

/// Fails with [`Error::InvalidArgument`] unless `condition` holds.
#[inline]
pub(crate) fn require_arg(condition: bool, msg: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(msg()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Exhausted.to_string(), "cursor exhausted: no further element");
        assert_eq!(
            Error::invalid_argument("step must be non-zero").to_string(),
            "invalid argument: step must be non-zero"
        );
        assert_eq!(
            Error::EmptyReduction.to_string(),
            "cannot reduce an empty cursor without an identity"
        );
    }

    #[test]
    fn test_or_exhausted() {
        assert_eq!(Some(3).or_exhausted(), Ok(3));
        assert_eq!(None::<i32>.or_exhausted(), Err(Error::Exhausted));
    }

    #[test]
    fn test_require_arg() {
        assert!(require_arg(true, String::new).is_ok());
        let err = require_arg(false, || "bound is negative".to_string()).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("bound is negative".into()));
    }
}
