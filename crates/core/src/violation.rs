//! Contract violations: programmer misuse of [`ResultOrError`](crate::ResultOrError).
//!
//! These are not domain failures and never travel in the error state. The
//! panicking entry points raise them; the `try_*` entry points return them.

use thiserror::Error;

/// Misuse of the container's construction or accessor contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// Value state requested from an absent value.
    #[error("cannot create a ResultOrError from an absent value")]
    MissingValue,

    /// Error state requested from an absent collection of errors.
    #[error("cannot create a ResultOrError from an absent collection of errors")]
    MissingErrors,

    /// Error state requested from an empty collection of errors.
    #[error(
        "cannot create a ResultOrError from an empty collection of errors; provide at least one error"
    )]
    EmptyErrors,

    /// Value read from a container in error state.
    #[error(
        "the value cannot be accessed when errors have been recorded; check is_error before accessing the value"
    )]
    ValueOnError,

    /// Errors read from a container in value state.
    #[error(
        "errors cannot be accessed when no errors have been recorded; check is_error before accessing errors"
    )]
    ErrorsOnValue,

    /// First error read from a container in value state.
    #[error(
        "the first error cannot be accessed when no errors have been recorded; check is_error before accessing first_error"
    )]
    FirstErrorOnValue,
}

impl ContractViolation {
    /// Log and panic. Used by every panicking entry point of the container.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(violation = ?self, "ResultOrError contract violated");
        panic!("{self}")
    }
}
