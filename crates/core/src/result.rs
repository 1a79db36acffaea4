//! The value-or-errors container.

use crate::error::Error;
use crate::violation::ContractViolation;

/// Either a computed value or an ordered, non-empty list of [`Error`]s.
///
/// The container is immutable: combinators ([`then`](Self::then),
/// [`else_value`](Self::else_value), [`fail_if`](Self::fail_if), ...) consume it
/// and return a new one.
///
/// There is no `Default`; every container comes from a validated constructor:
///
/// ```compile_fail
/// use result_or_error_core::ResultOrError;
///
/// let empty: ResultOrError<u32> = Default::default();
/// ```
///
/// ```
/// use result_or_error_core::{Error, ResultOrError};
///
/// let ok = ResultOrError::from_value(7);
/// assert!(!ok.is_error());
/// assert_eq!(*ok.value(), 7);
///
/// let failed: ResultOrError<u32> = Error::not_found().into();
/// assert!(failed.is_error());
/// assert_eq!(failed.first_error(), &Error::not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct ResultOrError<T> {
    state: State<T>,
}

/// Private so an error state can only be built through the non-empty checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Value(T),
    Errors(Vec<Error>),
}

impl<T> ResultOrError<T> {
    pub fn from_value(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Value state from an optional value.
    ///
    /// Fails with [`ContractViolation::MissingValue`] on `None`.
    pub fn try_from_option(value: Option<T>) -> Result<Self, ContractViolation> {
        value.map(Self::from_value).ok_or(ContractViolation::MissingValue)
    }

    pub fn from_error(error: Error) -> Self {
        Self {
            state: State::Errors(vec![error]),
        }
    }

    /// Error state holding `errors` in their original order.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyErrors`] if `errors` is empty.
    #[track_caller]
    pub fn from_errors(errors: impl IntoIterator<Item = Error>) -> Self {
        match Self::try_from_errors(errors) {
            Ok(result) => result,
            Err(violation) => violation.raise(),
        }
    }

    /// Non-panicking form of [`from_errors`](Self::from_errors).
    pub fn try_from_errors(
        errors: impl IntoIterator<Item = Error>,
    ) -> Result<Self, ContractViolation> {
        let errors: Vec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(ContractViolation::EmptyErrors);
        }
        Ok(Self {
            state: State::Errors(errors),
        })
    }

    /// Error state from a collection that may be missing altogether.
    ///
    /// `None` fails with [`ContractViolation::MissingErrors`], an empty vector
    /// with [`ContractViolation::EmptyErrors`].
    pub fn try_from_optional_errors(errors: Option<Vec<Error>>) -> Result<Self, ContractViolation> {
        errors
            .ok_or(ContractViolation::MissingErrors)
            .and_then(Self::try_from_errors)
    }

    /// `true` iff the container holds errors. Check this before calling
    /// [`value`](Self::value), [`errors`](Self::errors) or
    /// [`first_error`](Self::first_error).
    pub fn is_error(&self) -> bool {
        matches!(self.state, State::Errors(_))
    }

    pub fn is_value(&self) -> bool {
        !self.is_error()
    }

    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOnError`] in error state.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Errors(_) => Err(ContractViolation::ValueOnError),
        }
    }

    /// Owned form of [`value`](Self::value).
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOnError`] in error state.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Value(value) => value,
            State::Errors(_) => ContractViolation::ValueOnError.raise(),
        }
    }

    /// Read-only view of the recorded errors.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ErrorsOnValue`] in value state.
    #[track_caller]
    pub fn errors(&self) -> &[Error] {
        match self.try_errors() {
            Ok(errors) => errors,
            Err(violation) => violation.raise(),
        }
    }

    pub fn try_errors(&self) -> Result<&[Error], ContractViolation> {
        match &self.state {
            State::Errors(errors) => Ok(errors),
            State::Value(_) => Err(ContractViolation::ErrorsOnValue),
        }
    }

    /// The recorded errors, or an empty slice in value state.
    pub fn errors_or_empty(&self) -> &[Error] {
        match &self.state {
            State::Errors(errors) => errors,
            State::Value(_) => &[],
        }
    }

    /// The primary (first recorded) error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::FirstErrorOnValue`] in value state.
    #[track_caller]
    pub fn first_error(&self) -> &Error {
        match self.try_first_error() {
            Ok(error) => error,
            Err(violation) => violation.raise(),
        }
    }

    pub fn try_first_error(&self) -> Result<&Error, ContractViolation> {
        match &self.state {
            // Non-empty by construction.
            State::Errors(errors) => Ok(&errors[0]),
            State::Value(_) => Err(ContractViolation::FirstErrorOnValue),
        }
    }

    /// Borrowing view as a standard `Result`.
    pub fn as_result(&self) -> Result<&T, &[Error]> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Errors(errors) => Err(errors),
        }
    }

    /// Convert into a standard `Result` for `?`-based code.
    pub fn into_result(self) -> Result<T, Vec<Error>> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Errors(errors) => Err(errors),
        }
    }

    /// Re-wrap an error state at another value type.
    ///
    /// Callers guarantee the container is in error state; used by the
    /// short-circuiting combinators.
    pub(crate) fn from_checked_errors(errors: Vec<Error>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            state: State::Errors(errors),
        }
    }
}
