//! Chaining directly off a pending `ResultOrError`.
//!
//! [`ResultOrErrorFutureExt`] is implemented for every
//! `Future<Output = ResultOrError<T>>` and mirrors the container's combinators.
//! Each method awaits the incoming future, then applies the container method of
//! the same name, so short-circuit and ordering rules are identical.
//!
//! ```
//! use futures::executor::block_on;
//! use result_or_error_core::{Error, ResultOrError, ResultOrErrorFutureExt};
//!
//! async fn load(id: u32) -> ResultOrError<String> {
//!     if id == 0 {
//!         return Error::not_found().into();
//!     }
//!     ResultOrError::from_value(format!("user-{id}"))
//! }
//!
//! let name = block_on(
//!     load(7)
//!         .then_map(|name| name.to_uppercase())
//!         .fail_if(|name| name.is_empty(), Error::validation())
//!         .else_value("ANONYMOUS".to_string()),
//! );
//! assert_eq!(name.value(), "USER-7");
//! ```
//!
//! `futures::FutureExt` also has a `then` method; avoid importing both traits
//! in the same scope.

use core::future::Future;

use crate::error::Error;
use crate::result::ResultOrError;

/// Combinators over a future resolving to a [`ResultOrError`].
pub trait ResultOrErrorFutureExt<T>: Future<Output = ResultOrError<T>> + Sized {
    fn then<U, F>(self, on_value: F) -> impl Future<Output = ResultOrError<U>>
    where
        F: FnOnce(T) -> ResultOrError<U>,
    {
        async move { self.await.then(on_value) }
    }

    fn then_map<U, F>(self, on_value: F) -> impl Future<Output = ResultOrError<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.then_map(on_value) }
    }

    fn then_do<F>(self, action: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.then_do(action) }
    }

    fn then_async<U, F, Fut>(self, on_value: F) -> impl Future<Output = ResultOrError<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ResultOrError<U>>,
    {
        async move { self.await.then_async(on_value).await }
    }

    fn then_map_async<U, F, Fut>(self, on_value: F) -> impl Future<Output = ResultOrError<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.then_map_async(on_value).await }
    }

    fn then_do_async<F, Fut>(self, action: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.then_do_async(action).await }
    }

    fn else_error_with<F>(self, on_error: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(Vec<Error>) -> Error,
    {
        async move { self.await.else_error_with(on_error) }
    }

    fn else_errors_with<F>(self, on_error: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(Vec<Error>) -> Vec<Error>,
    {
        async move { self.await.else_errors_with(on_error) }
    }

    fn else_error(self, error: Error) -> impl Future<Output = ResultOrError<T>> {
        async move { self.await.else_error(error) }
    }

    fn else_value_with<F>(self, on_error: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(Vec<Error>) -> T,
    {
        async move { self.await.else_value_with(on_error) }
    }

    fn else_value(self, fallback: T) -> impl Future<Output = ResultOrError<T>> {
        async move { self.await.else_value(fallback) }
    }

    fn else_error_with_async<F, Fut>(self, on_error: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(Vec<Error>) -> Fut,
        Fut: Future<Output = Error>,
    {
        async move { self.await.else_error_with_async(on_error).await }
    }

    fn else_errors_with_async<F, Fut>(
        self,
        on_error: F,
    ) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(Vec<Error>) -> Fut,
        Fut: Future<Output = Vec<Error>>,
    {
        async move { self.await.else_errors_with_async(on_error).await }
    }

    fn else_error_async<Fut>(self, error: Fut) -> impl Future<Output = ResultOrError<T>>
    where
        Fut: Future<Output = Error>,
    {
        async move { self.await.else_error_async(error).await }
    }

    fn else_value_with_async<F, Fut>(self, on_error: F) -> impl Future<Output = ResultOrError<T>>
    where
        F: FnOnce(Vec<Error>) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.else_value_with_async(on_error).await }
    }

    fn else_value_async<Fut>(self, fallback: Fut) -> impl Future<Output = ResultOrError<T>>
    where
        Fut: Future<Output = T>,
    {
        async move { self.await.else_value_async(fallback).await }
    }

    fn fail_if<P>(self, predicate: P, error: Error) -> impl Future<Output = ResultOrError<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.fail_if(predicate, error) }
    }

    fn fail_if_with<P, B>(
        self,
        predicate: P,
        error_builder: B,
    ) -> impl Future<Output = ResultOrError<T>>
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&T) -> Error,
    {
        async move { self.await.fail_if_with(predicate, error_builder) }
    }

    fn fail_if_async<P, PFut>(
        self,
        predicate: P,
        error: Error,
    ) -> impl Future<Output = ResultOrError<T>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        async move { self.await.fail_if_async(predicate, error).await }
    }

    fn fail_if_with_async<P, PFut, B, BFut>(
        self,
        predicate: P,
        error_builder: B,
    ) -> impl Future<Output = ResultOrError<T>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        B: FnOnce(&T) -> BFut,
        BFut: Future<Output = Error>,
    {
        async move {
            self.await
                .fail_if_with_async(predicate, error_builder)
                .await
        }
    }
}

impl<T, Fut> ResultOrErrorFutureExt<T> for Fut where Fut: Future<Output = ResultOrError<T>> {}
