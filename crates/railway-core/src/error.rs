//! Error values carried on the failure rail
//!
//! Every failure that travels through a pipeline is a [`StepError`]. It is a
//! plain value: it can be cloned, compared, and nested, so aggregated failures
//! keep both of the errors they were built from.

use thiserror::Error;

/// Category of a [`StepError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A step rejected its input on purpose (e.g. a blank field).
    Step,
    /// A step panicked and the panic was converted by `try_catch`.
    Runtime,
    /// Both branches of a `plus` failed.
    Aggregate,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Step => write!(f, "step"),
            ErrorKind::Runtime => write!(f, "runtime"),
            ErrorKind::Aggregate => write!(f, "aggregate"),
        }
    }
}

/// Error value carried on the failure rail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// Business failure returned by a step, optionally wrapping the failure
    /// that caused it.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        cause: Option<Box<StepError>>,
    },

    /// A panic caught at a `try_catch` boundary
    #[error("{message}")]
    Panicked { message: String },

    /// Two independent failures from parallel branches
    #[error("{first}; {second}")]
    Aggregate {
        first: Box<StepError>,
        second: Box<StepError>,
    },
}

impl StepError {
    /// Create a business failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        StepError::Failed {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a business failure that wraps an earlier failure.
    pub fn with_cause(message: impl Into<String>, cause: StepError) -> Self {
        StepError::Failed {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Create a runtime failure from a caught panic message.
    pub fn panicked(message: impl Into<String>) -> Self {
        StepError::Panicked {
            message: message.into(),
        }
    }

    /// Combine two failures. Usable directly as the failure aggregator of
    /// `plus` and `Pipeline::on_success_all`.
    pub fn aggregate(first: StepError, second: StepError) -> Self {
        StepError::Aggregate {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StepError::Failed { .. } => ErrorKind::Step,
            StepError::Panicked { .. } => ErrorKind::Runtime,
            StepError::Aggregate { .. } => ErrorKind::Aggregate,
        }
    }

    /// Human-readable message. Aggregates join their parts with `"; "`.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The wrapped cause of a business failure, if any.
    pub fn cause(&self) -> Option<&StepError> {
        match self {
            StepError::Failed { cause, .. } => cause.as_deref(),
            _ => None,
        }
    }

    /// Non-aggregate errors in left-to-right order.
    pub fn leaves(&self) -> Vec<&StepError> {
        match self {
            StepError::Aggregate { first, second } => {
                let mut leaves = first.leaves();
                leaves.extend(second.leaves());
                leaves
            }
            other => vec![other],
        }
    }

    /// Messages of every leaf error in left-to-right order.
    pub fn messages(&self) -> Vec<String> {
        self.leaves().into_iter().map(StepError::message).collect()
    }

    /// Check whether any leaf error carries exactly this message.
    pub fn contains(&self, message: &str) -> bool {
        self.leaves().iter().any(|leaf| leaf.message() == message)
    }
}

impl From<&str> for StepError {
    fn from(message: &str) -> Self {
        StepError::new(message)
    }
}

impl From<String> for StepError {
    fn from(message: String) -> Self {
        StepError::new(message)
    }
}

/// Keeps the whole context chain: the outermost context becomes the message
/// and each inner error becomes the cause of the one above it.
impl From<anyhow::Error> for StepError {
    fn from(err: anyhow::Error) -> Self {
        let mut messages: Vec<String> = err.chain().map(ToString::to_string).collect();
        let mut error = StepError::new(messages.pop().unwrap_or_default());
        while let Some(message) = messages.pop() {
            error = StepError::with_cause(message, error);
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kinds() {
        assert_eq!(StepError::new("blank").kind(), ErrorKind::Step);
        assert_eq!(StepError::panicked("boom").kind(), ErrorKind::Runtime);
        let aggregate = StepError::aggregate("a".into(), "b".into());
        assert_eq!(aggregate.kind(), ErrorKind::Aggregate);
        assert_eq!(ErrorKind::Aggregate.to_string(), "aggregate");
    }

    #[test]
    fn test_aggregate_message_joins_both_sides() {
        let error = StepError::aggregate(
            StepError::new("Name must not be blank"),
            StepError::new("Email must not be blank"),
        );
        assert_eq!(
            error.message(),
            "Name must not be blank; Email must not be blank"
        );
    }

    #[test]
    fn test_nested_aggregate_leaves_keep_order() {
        let error = StepError::aggregate(
            StepError::aggregate("a".into(), "b".into()),
            StepError::panicked("c"),
        );
        assert_eq!(error.messages(), vec!["a", "b", "c"]);
        assert!(error.contains("b"));
        assert!(!error.contains("a; b"));
    }

    #[test]
    fn test_cause_is_exposed_as_source() {
        let error = StepError::with_cause("request rejected", StepError::new("blank name"));
        assert_eq!(error.cause(), Some(&StepError::new("blank name")));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("blank name"));
        // causes are not leaves; only aggregates are flattened
        assert_eq!(error.messages(), vec!["request rejected"]);
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("saving request");
        let error = StepError::from(err);
        assert_eq!(error.message(), "saving request");
        assert_eq!(error.cause().map(StepError::message).as_deref(), Some("disk full"));
    }
}
