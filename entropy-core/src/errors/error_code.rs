//! EntropyErrorCode trait for host-boundary conversion.

/// Every error enum implements this to provide a structured error code
/// string for hosts that cannot match on Rust types.
pub trait EntropyErrorCode {
    /// Returns the error code string (e.g., "TRANSFER_FAULT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const TRANSFER_FAULT: &str = "TRANSFER_FAULT";
pub const INTERRUPTED: &str = "INTERRUPTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
