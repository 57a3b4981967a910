use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the chorus workspace.
///
/// Alignment itself never fails: malformed points are dropped and bad values
/// become null. Errors are reserved for input that cannot be interpreted at
/// all and for failures at the export boundary.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChorusError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues converting aligned data into another representation.
    #[error("data issue: {0}")]
    Data(String),
}

impl ChorusError {
    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
