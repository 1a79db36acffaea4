//! Combinator algebra of [`ResultOrError`](crate::ResultOrError).
//!
//! - [`then`]: transform the value, short-circuiting on errors.
//! - [`recover`]: `else_*` handling of the error state.
//! - [`fail_if`]: turn a value into an error when a predicate holds.
//!
//! Every combinator consumes the container and returns a new one; async forms
//! are plain `async fn`s awaiting the supplied future only in the branch that
//! needs it.

pub mod fail_if;
pub mod recover;
pub mod then;
