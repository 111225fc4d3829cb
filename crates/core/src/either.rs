//! The closed two-variant result type used across physocts
//!
//! `Either` holds either a successful value (`Right`) or a captured failure
//! (`Left`). Branching on the outcome is done with `match`, with
//! [`Either::is_ok`] or with its truthiness ([`Either::is_truthy`] and the
//! `bool` conversion), where `Right` is truthy and `Left` is falsy.

use crate::error_info::ErrorInfo;
use serde::{Deserialize, Serialize};

/// A successful value or a captured failure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "an Either may hold a captured failure that should be inspected"]
pub enum Either<T> {
    /// Failure outcome
    Left(ErrorInfo),
    /// Successful outcome
    Right(T),
}

impl<T> Either<T> {
    /// Wrap a successful value
    pub fn ok(value: T) -> Self {
        Either::Right(value)
    }

    /// Wrap a captured failure
    pub fn err(error: ErrorInfo) -> Self {
        Either::Left(error)
    }

    /// Returns `true` for `Right`
    pub fn is_ok(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns `true` for `Left`
    pub fn is_err(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Truthiness of the outcome: `Right` is truthy, `Left` is falsy
    pub fn is_truthy(&self) -> bool {
        self.is_ok()
    }

    /// Borrow the payload of whichever variant is populated
    pub fn value(&self) -> Result<&T, &ErrorInfo> {
        match self {
            Either::Right(value) => Ok(value),
            Either::Left(error) => Err(error),
        }
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left`. Reading the wrong variant is a
    /// programming error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Either::Right(value) => value,
            Either::Left(error) => panic!("called `Either::unwrap()` on a `Left` value: {error}"),
        }
    }

    /// Take the captured failure.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right`.
    #[track_caller]
    pub fn unwrap_err(self) -> ErrorInfo {
        match self {
            Either::Left(error) => error,
            Either::Right(_) => panic!("called `Either::unwrap_err()` on a `Right` value"),
        }
    }

    /// The success value, if any
    pub fn right(self) -> Option<T> {
        match self {
            Either::Right(value) => Some(value),
            Either::Left(_) => None,
        }
    }

    /// The captured failure, if any
    pub fn left(self) -> Option<ErrorInfo> {
        match self {
            Either::Left(error) => Some(error),
            Either::Right(_) => None,
        }
    }

    /// Transform the success value, leaving a failure untouched
    pub fn map<U, F>(self, f: F) -> Either<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Either::Right(value) => Either::Right(f(value)),
            Either::Left(error) => Either::Left(error),
        }
    }

    /// Chain a fallible step; a `Left` short-circuits and `f` is not called
    pub fn and_then<U, F>(self, f: F) -> Either<U>
    where
        F: FnOnce(T) -> Either<U>,
    {
        match self {
            Either::Right(value) => f(value),
            Either::Left(error) => Either::Left(error),
        }
    }

    /// The success value or a fallback
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Either::Right(value) => value,
            Either::Left(_) => default,
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            Either::Right(value) => Ok(value),
            Either::Left(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, ErrorInfo>> for Either<T> {
    fn from(result: Result<T, ErrorInfo>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error),
        }
    }
}

impl<T> From<Either<T>> for Result<T, ErrorInfo> {
    fn from(either: Either<T>) -> Self {
        either.into_result()
    }
}

impl<T> From<Either<T>> for crate::errors::Result<T> {
    fn from(either: Either<T>) -> Self {
        either.into_result().map_err(crate::errors::Error::Captured)
    }
}

impl<T> From<&Either<T>> for bool {
    fn from(either: &Either<T>) -> Self {
        either.is_truthy()
    }
}
