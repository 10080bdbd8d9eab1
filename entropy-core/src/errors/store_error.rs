//! Decay store errors.

use super::error_code::{self, EntropyErrorCode};

/// Errors returned by store operations.
///
/// None of these leave the store in a partially written state: argument
/// errors and interruptions happen before the state is touched, and a
/// failed inbound transfer rolls the store back to empty.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("transfer fault during {operation}: {reason}")]
    TransferFault {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} interrupted while waiting for exclusive access")]
    Interrupted { operation: &'static str },
}

impl StoreError {
    /// Whether the caller may simply retry the same call.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}

impl EntropyErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::TransferFault { .. } => error_code::TRANSFER_FAULT,
            Self::Interrupted { .. } => error_code::INTERRUPTED,
        }
    }
}

impl From<StoreError> for std::io::Error {
    fn from(err: StoreError) -> Self {
        let kind = match &err {
            StoreError::InvalidArgument { .. } => std::io::ErrorKind::InvalidInput,
            StoreError::TransferFault { .. } => std::io::ErrorKind::Other,
            StoreError::Interrupted { .. } => std::io::ErrorKind::Interrupted,
        };
        std::io::Error::new(kind, err)
    }
}
