//! The two-track result threaded through every pipeline
//!
//! A pipeline result is an ordinary [`std::result::Result`] whose error arm is
//! a [`StepError`]: `Ok` is the success rail, `Err` the failure rail. The
//! [`Outcome`] extension trait adds the rail-oriented accessors.

use crate::error::StepError;

/// Result type used on both rails of a pipeline.
pub type Result<T> = std::result::Result<T, StepError>;

/// Put a value on the success rail.
pub fn success<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Put an error on the failure rail.
pub fn failure<T>(error: impl Into<StepError>) -> Result<T> {
    Err(error.into())
}

/// Which rail a result travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rail {
    Success,
    Failure,
}

impl std::fmt::Display for Rail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rail::Success => write!(f, "success"),
            Rail::Failure => write!(f, "failure"),
        }
    }
}

/// Rail-oriented accessors for [`Result`].
///
/// Reading the value of a failure, or the error of a success, yields `None`
/// rather than a placeholder or a panic.
pub trait Outcome<T> {
    fn rail(&self) -> Rail;

    fn is_success(&self) -> bool {
        self.rail() == Rail::Success
    }

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The carried value, only on the success rail.
    fn value(&self) -> Option<&T>;

    /// The carried error, only on the failure rail.
    fn error(&self) -> Option<&StepError>;

    fn into_value(self) -> Option<T>;

    fn into_error(self) -> Option<StepError>;
}

impl<T> Outcome<T> for Result<T> {
    fn rail(&self) -> Rail {
        match self {
            Ok(_) => Rail::Success,
            Err(_) => Rail::Failure,
        }
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    fn error(&self) -> Option<&StepError> {
        self.as_ref().err()
    }

    fn into_value(self) -> Option<T> {
        self.ok()
    }

    fn into_error(self) -> Option<StepError> {
        self.err()
    }
}
