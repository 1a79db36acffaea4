//! Conversions into and out of [`ResultOrError`].
//!
//! Errors convert with `From`/`Into`; bare values go through
//! [`IntoResultOrError`], since a blanket `From<T>` would overlap with
//! `From<Error>`.

use crate::error::Error;
use crate::result::ResultOrError;

impl<T> From<Error> for ResultOrError<T> {
    fn from(error: Error) -> Self {
        ResultOrError::from_error(error)
    }
}

/// # Panics
///
/// Panics if `errors` is empty.
impl<T> From<Vec<Error>> for ResultOrError<T> {
    #[track_caller]
    fn from(errors: Vec<Error>) -> Self {
        ResultOrError::from_errors(errors)
    }
}

/// # Panics
///
/// Panics if `N == 0`.
impl<T, const N: usize> From<[Error; N]> for ResultOrError<T> {
    #[track_caller]
    fn from(errors: [Error; N]) -> Self {
        ResultOrError::from_errors(errors)
    }
}

impl<T> From<Result<T, Error>> for ResultOrError<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => ResultOrError::from_value(value),
            Err(error) => ResultOrError::from_error(error),
        }
    }
}

/// # Panics
///
/// Panics on `Err` holding an empty vector.
impl<T> From<Result<T, Vec<Error>>> for ResultOrError<T> {
    #[track_caller]
    fn from(result: Result<T, Vec<Error>>) -> Self {
        match result {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => ResultOrError::from_errors(errors),
        }
    }
}

impl<T> From<ResultOrError<T>> for Result<T, Vec<Error>> {
    fn from(result: ResultOrError<T>) -> Self {
        result.into_result()
    }
}

/// Wrap any value in the value state.
///
/// ```
/// use result_or_error_core::IntoResultOrError;
///
/// let wrapped = "ready".into_result_or_error();
/// assert_eq!(*wrapped.value(), "ready");
/// ```
pub trait IntoResultOrError: Sized {
    fn into_result_or_error(self) -> ResultOrError<Self>;
}

impl<T> IntoResultOrError for T {
    fn into_result_or_error(self) -> ResultOrError<Self> {
        ResultOrError::from_value(self)
    }
}

impl Error {
    /// Wrap this error in the error state.
    ///
    /// Shadows [`IntoResultOrError::into_result_or_error`], so a bare `Error`
    /// never ends up as a value.
    ///
    /// ```
    /// use result_or_error_core::{Error, IntoResultOrError, ResultOrError};
    ///
    /// let failed: ResultOrError<u32> = Error::not_found().into_result_or_error();
    /// assert!(failed.is_error());
    /// ```
    pub fn into_result_or_error<T>(self) -> ResultOrError<T> {
        ResultOrError::from_error(self)
    }
}
