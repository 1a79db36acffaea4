//! Recovery combinators (`else_*`).
//!
//! In value state every method returns the container unchanged: recovery
//! functions are not invoked and pending futures are dropped unpolled. In error
//! state the current errors are handed over by value, since the container is
//! consumed.

use core::future::Future;

use crate::error::Error;
use crate::result::ResultOrError;

/// How an error state is being handled.
#[derive(Debug, Clone, Copy)]
enum Handling {
    Replace,
    Recover,
}

fn trace_handling(errors: &[Error], handling: Handling) {
    tracing::trace!(
        ?handling,
        error_count = errors.len(),
        primary_code = errors.first().map(Error::code),
        "handling error state"
    );
}

impl<T> ResultOrError<T> {
    /// Replace the errors with the single error computed by `on_error`.
    pub fn else_error_with<F>(self, on_error: F) -> ResultOrError<T>
    where
        F: FnOnce(Vec<Error>) -> Error,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Replace);
                ResultOrError::from_error(on_error(errors))
            }
        }
    }

    /// Replace the errors with the sequence computed by `on_error`.
    ///
    /// # Panics
    ///
    /// Panics if `on_error` returns an empty sequence.
    #[track_caller]
    pub fn else_errors_with<F>(self, on_error: F) -> ResultOrError<T>
    where
        F: FnOnce(Vec<Error>) -> Vec<Error>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Replace);
                ResultOrError::from_errors(on_error(errors))
            }
        }
    }

    /// Replace the errors with `error`, whatever they were.
    pub fn else_error(self, error: Error) -> ResultOrError<T> {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Replace);
                ResultOrError::from_error(error)
            }
        }
    }

    /// Recover into value state with a value computed from the errors.
    ///
    /// ```
    /// use result_or_error_core::{Error, ResultOrError};
    ///
    /// let missing: ResultOrError<String> = Error::not_found().into();
    /// let recovered = missing.else_value_with(|errors| format!("count:{}", errors.len()));
    /// assert_eq!(recovered.value(), "count:1");
    /// ```
    pub fn else_value_with<F>(self, on_error: F) -> ResultOrError<T>
    where
        F: FnOnce(Vec<Error>) -> T,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Recover);
                ResultOrError::from_value(on_error(errors))
            }
        }
    }

    /// Recover into value state with a fixed fallback.
    pub fn else_value(self, fallback: T) -> ResultOrError<T> {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Recover);
                ResultOrError::from_value(fallback)
            }
        }
    }

    /// Async [`else_error_with`](Self::else_error_with).
    pub async fn else_error_with_async<F, Fut>(self, on_error: F) -> ResultOrError<T>
    where
        F: FnOnce(Vec<Error>) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Replace);
                ResultOrError::from_error(on_error(errors).await)
            }
        }
    }

    /// Async [`else_errors_with`](Self::else_errors_with).
    ///
    /// # Panics
    ///
    /// Panics if the awaited sequence is empty.
    pub async fn else_errors_with_async<F, Fut>(self, on_error: F) -> ResultOrError<T>
    where
        F: FnOnce(Vec<Error>) -> Fut,
        Fut: Future<Output = Vec<Error>>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Replace);
                ResultOrError::from_errors(on_error(errors).await)
            }
        }
    }

    /// Replace the errors with the output of an already-pending future.
    pub async fn else_error_async<Fut>(self, error: Fut) -> ResultOrError<T>
    where
        Fut: Future<Output = Error>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Replace);
                ResultOrError::from_error(error.await)
            }
        }
    }

    /// Async [`else_value_with`](Self::else_value_with).
    pub async fn else_value_with_async<F, Fut>(self, on_error: F) -> ResultOrError<T>
    where
        F: FnOnce(Vec<Error>) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Recover);
                ResultOrError::from_value(on_error(errors).await)
            }
        }
    }

    /// Recover with the output of an already-pending future.
    pub async fn else_value_async<Fut>(self, fallback: Fut) -> ResultOrError<T>
    where
        Fut: Future<Output = T>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(value),
            Err(errors) => {
                trace_handling(&errors, Handling::Recover);
                ResultOrError::from_value(fallback.await)
            }
        }
    }
}
