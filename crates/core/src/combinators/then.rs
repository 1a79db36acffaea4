//! Transformation combinators: `then`, `then_map`, `then_do` and their async
//! forms.
//!
//! All of them short-circuit in error state: the function is never invoked and
//! the original error sequence is re-wrapped unchanged at the new value type.

use core::future::Future;

use crate::result::ResultOrError;

impl<T> ResultOrError<T> {
    /// Bind: feed the value into `on_value`, which may itself fail.
    ///
    /// ```
    /// use result_or_error_core::{Error, ResultOrError};
    ///
    /// fn parse(s: String) -> ResultOrError<i32> {
    ///     s.parse::<i32>()
    ///         .map_err(|e| Error::validation().with_description(e.to_string()))
    ///         .into()
    /// }
    ///
    /// let doubled = ResultOrError::from_value("21".to_string())
    ///     .then(parse)
    ///     .then_map(|n| n * 2);
    /// assert_eq!(*doubled.value(), 42);
    /// ```
    pub fn then<U, F>(self, on_value: F) -> ResultOrError<U>
    where
        F: FnOnce(T) -> ResultOrError<U>,
    {
        match self.into_result() {
            Ok(value) => on_value(value),
            Err(errors) => ResultOrError::from_checked_errors(errors),
        }
    }

    /// Map: transform the value with an infallible function.
    pub fn then_map<U, F>(self, on_value: F) -> ResultOrError<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(on_value(value)),
            Err(errors) => ResultOrError::from_checked_errors(errors),
        }
    }

    /// Run `action` for its side effect and return the container unchanged.
    pub fn then_do<F>(self, action: F) -> ResultOrError<T>
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = self.try_value() {
            action(value);
        }
        self
    }

    /// Async [`then`](Self::then): `on_value` is awaited only in value state.
    pub async fn then_async<U, F, Fut>(self, on_value: F) -> ResultOrError<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ResultOrError<U>>,
    {
        match self.into_result() {
            Ok(value) => on_value(value).await,
            Err(errors) => ResultOrError::from_checked_errors(errors),
        }
    }

    /// Async [`then_map`](Self::then_map).
    pub async fn then_map_async<U, F, Fut>(self, on_value: F) -> ResultOrError<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.into_result() {
            Ok(value) => ResultOrError::from_value(on_value(value).await),
            Err(errors) => ResultOrError::from_checked_errors(errors),
        }
    }

    /// Async [`then_do`](Self::then_do).
    ///
    /// The returned future cannot borrow the value; clone what it needs.
    pub async fn then_do_async<F, Fut>(self, action: F) -> ResultOrError<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = self.try_value() {
            action(value).await;
        }
        self
    }
}
