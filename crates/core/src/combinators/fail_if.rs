//! Conditional failure injection (`fail_if*`). No-ops in error state.

use core::future::Future;

use crate::error::Error;
use crate::result::ResultOrError;

fn trace_failed(error: &Error) {
    tracing::trace!(
        code = error.code(),
        error_type = %error.error_type(),
        "predicate turned value into error state"
    );
}

impl<T> ResultOrError<T> {
    /// Switch to error state with `error` when `predicate` holds for the value.
    ///
    /// ```
    /// use result_or_error_core::{Error, ErrorType, ResultOrError};
    ///
    /// let checked = ResultOrError::from_value(5).fail_if(|n| *n > 3, Error::failure());
    /// assert_eq!(checked.first_error().error_type(), ErrorType::Failure);
    /// ```
    pub fn fail_if<P>(self, predicate: P, error: Error) -> ResultOrError<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.fail_if_with(predicate, |_| error)
    }

    /// Like [`fail_if`](Self::fail_if), building the error from the value.
    pub fn fail_if_with<P, B>(self, predicate: P, error_builder: B) -> ResultOrError<T>
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&T) -> Error,
    {
        let Ok(value) = self.try_value() else {
            return self;
        };
        if !predicate(value) {
            return self;
        }
        let error = error_builder(value);
        trace_failed(&error);
        ResultOrError::from_error(error)
    }

    /// Async [`fail_if`](Self::fail_if): the predicate is awaited only in value
    /// state.
    pub async fn fail_if_async<P, PFut>(self, predicate: P, error: Error) -> ResultOrError<T>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        let Ok(value) = self.try_value() else {
            return self;
        };
        if !predicate(value).await {
            return self;
        }
        trace_failed(&error);
        ResultOrError::from_error(error)
    }

    /// Async [`fail_if_with`](Self::fail_if_with): both the predicate and the
    /// error builder are asynchronous.
    pub async fn fail_if_with_async<P, PFut, B, BFut>(
        self,
        predicate: P,
        error_builder: B,
    ) -> ResultOrError<T>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        B: FnOnce(&T) -> BFut,
        BFut: Future<Output = Error>,
    {
        let Ok(value) = self.try_value() else {
            return self;
        };
        if !predicate(value).await {
            return self;
        }
        let error = error_builder(value).await;
        trace_failed(&error);
        ResultOrError::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, ErrorType, ResultOrError};
    use proptest::prelude::*;
    use std::cell::Cell;

    fn too_large(n: &i32) -> Error {
        Error::validation()
            .with_code("Number.TooLarge")
            .with_description(format!("{n} is larger than 3"))
    }

    async fn exceeds_three(n: i32) -> bool {
        n > 3
    }

    #[test]
    fn fail_if_switches_to_error_when_predicate_holds() {
        let result = ResultOrError::from_value(5).fail_if(|n| *n > 3, Error::failure());

        assert!(result.is_error());
        assert_eq!(result.first_error().error_type(), ErrorType::Failure);
    }

    #[test]
    fn fail_if_keeps_value_when_predicate_fails() {
        let result = ResultOrError::from_value(2).fail_if(|n| *n > 3, Error::failure());

        assert_eq!(*result.value(), 2);
    }

    #[test]
    fn fail_if_with_builds_error_from_value() {
        let result = ResultOrError::from_value(7).fail_if_with(|n| *n > 3, too_large);

        assert_eq!(result.first_error().description(), "7 is larger than 3");
    }

    #[test]
    fn fail_if_is_noop_on_errors() {
        let predicate_calls = Cell::new(0);
        let builder_calls = Cell::new(0);
        let original: ResultOrError<i32> =
            ResultOrError::from_errors([Error::not_found(), Error::conflict()]);

        let plain = original.clone().fail_if(
            |_| {
                predicate_calls.set(predicate_calls.get() + 1);
                true
            },
            Error::failure(),
        );
        let built = original.clone().fail_if_with(
            |_| {
                predicate_calls.set(predicate_calls.get() + 1);
                true
            },
            |n| {
                builder_calls.set(builder_calls.get() + 1);
                too_large(n)
            },
        );

        assert_eq!(predicate_calls.get(), 0);
        assert_eq!(builder_calls.get(), 0);
        assert_eq!(plain, original);
        assert_eq!(built, original);
    }

    #[tokio::test]
    async fn fail_if_async_awaits_predicate() {
        let failed = ResultOrError::from_value(5)
            .fail_if_async(|n| exceeds_three(*n), Error::conflict())
            .await;
        assert_eq!(failed.errors(), &[Error::conflict()]);

        let kept = ResultOrError::from_value(1)
            .fail_if_async(|n| exceeds_three(*n), Error::conflict())
            .await;
        assert_eq!(*kept.value(), 1);
    }

    #[tokio::test]
    async fn fail_if_with_async_awaits_builder_only_when_failing() {
        let builder_calls = Cell::new(0);

        let failed = ResultOrError::from_value(9)
            .fail_if_with_async(
                |n| exceeds_three(*n),
                |n| {
                    builder_calls.set(builder_calls.get() + 1);
                    let error = too_large(n);
                    async move { error }
                },
            )
            .await;
        assert_eq!(failed.first_error().code(), "Number.TooLarge");

        let kept = ResultOrError::from_value(0)
            .fail_if_with_async(
                |n| exceeds_three(*n),
                |n| {
                    builder_calls.set(builder_calls.get() + 1);
                    let error = too_large(n);
                    async move { error }
                },
            )
            .await;
        assert_eq!(*kept.value(), 0);
        assert_eq!(builder_calls.get(), 1);
    }

    #[tokio::test]
    async fn fail_if_async_is_noop_on_errors() {
        let calls = Cell::new(0);
        let original: ResultOrError<i32> = Error::unauthorized().into();

        let plain = original
            .clone()
            .fail_if_async(
                |_| {
                    calls.set(calls.get() + 1);
                    async { true }
                },
                Error::failure(),
            )
            .await;
        let built = original
            .clone()
            .fail_if_with_async(
                |_| {
                    calls.set(calls.get() + 1);
                    async { true }
                },
                |_| {
                    calls.set(calls.get() + 1);
                    async { Error::failure() }
                },
            )
            .await;

        assert_eq!(calls.get(), 0);
        assert_eq!(plain, original);
        assert_eq!(built, original);
    }

    proptest! {
        /// Property: on a value, `fail_if` yields the error iff the predicate
        /// holds; otherwise the container is unchanged.
        #[test]
        fn fail_if_gating(v in any::<i32>(), threshold in any::<i32>()) {
            let original = ResultOrError::from_value(v);
            let result = original.clone().fail_if(|n| *n > threshold, Error::failure());

            if v > threshold {
                prop_assert_eq!(result.errors(), &[Error::failure()]);
            } else {
                prop_assert_eq!(result, original);
            }
        }
    }
}
