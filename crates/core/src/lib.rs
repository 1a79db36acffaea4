//! `result-or-error-core` is a value-or-errors container with a fluent
//! combinator algebra.
//!
//! A [`ResultOrError<T>`] holds either one value or an ordered, non-empty list
//! of structured [`Error`]s. Failures are data: they flow through
//! [`then`](ResultOrError::then) chains untouched until handled with an
//! `else_*` combinator or inspected directly. Misusing the container (reading
//! the value of an error state, building an error state from nothing) is a
//! [`ContractViolation`] and panics.
//!
//! ```
//! use result_or_error_core::{Error, ResultOrError};
//!
//! fn parse(s: String) -> ResultOrError<i32> {
//!     match s.parse::<i32>() {
//!         Ok(n) => ResultOrError::from_value(n),
//!         Err(_) => Error::validation().with_code("Parse.Int").into(),
//!     }
//! }
//!
//! let ten = ResultOrError::from_value("5".to_string())
//!     .then(parse)
//!     .then_map(|n| n * 2)
//!     .then_map(|n| n.to_string());
//! assert_eq!(ten.value(), "10");
//!
//! let missing = ResultOrError::<String>::from_error(Error::not_found())
//!     .then(parse)
//!     .then_map(|n| n.to_string());
//! assert_eq!(missing.first_error(), &Error::not_found());
//! ```

pub mod combinators;
pub mod convert;
pub mod error;
pub mod future_ext;
pub mod result;
pub mod violation;

pub use convert::IntoResultOrError;
pub use error::{Error, ErrorType, Metadata};
pub use future_ext::ResultOrErrorFutureExt;
pub use result::ResultOrError;
pub use violation::ContractViolation;
