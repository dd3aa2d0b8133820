use thiserror::Error;

use crate::surface::{Constraint, SurfaceField};

/// Convenient result alias for the hinge torque library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the entered text is not a number.
    #[error("'{input}' is not a valid number for {field}")]
    Parse { field: SurfaceField, input: String },

    /// Raised when a parsed number violates the constraint for its field.
    #[error("{field} {constraint} (got {value})")]
    OutOfRange {
        field: SurfaceField,
        value: f64,
        constraint: Constraint,
    },

    /// Raised when finite inputs combine into a non-finite derived value.
    #[error("{quantity} is not a finite number for these inputs")]
    NonFiniteEstimate { quantity: &'static str },

    /// Raised when the input stream ends before a field was entered.
    #[error("input stream closed while waiting for {field}")]
    StreamClosed { field: SurfaceField },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the prompt for the same field should be shown again.
    ///
    /// Only validation errors are recoverable; a closed stream or an IO
    /// failure ends the run.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::OutOfRange { .. } | Error::NonFiniteEstimate { .. }
        )
    }
}
