//! Stats error types
//!
//! Every fallible routine reports one of two kinds of failure: a bad argument
//! (wrong size, out-of-range parameter, too few points) or an undefined
//! arithmetic result.

use thiserror::Error;

/// Result type alias for numeric operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Coarse classification of a [`StatsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad size or range: empty input, window/strata out of bounds, n < 2
    InvalidArgument,
    /// Mathematically undefined result
    Arithmetic,
}

/// Errors that can occur during numeric operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Invalid parameter or argument value
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Undefined arithmetic result
    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),
}

impl StatsError {
    /// Shorthand for an [`StatsError::InvalidArgument`]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Which side of the taxonomy this error falls on.
    ///
    /// Too-short input is a caller mistake, so [`StatsError::InsufficientData`]
    /// reports as [`ErrorKind::InvalidArgument`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::InsufficientData { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::ArithmeticError(_) => ErrorKind::Arithmetic,
        }
    }
}
