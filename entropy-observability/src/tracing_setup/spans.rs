//! Span definitions per store operation: write, read, decay.

/// Create a write span.
#[macro_export]
macro_rules! store_write_span {
    ($payload_len:expr) => {
        tracing::debug_span!("entropy.write", payload_len = $payload_len)
    };
}

/// Create a read span.
#[macro_export]
macro_rules! store_read_span {
    ($offset:expr, $max_len:expr) => {
        tracing::debug_span!("entropy.read", offset = $offset, max_len = $max_len)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($data_len:expr, $decayed_count:expr) => {
        tracing::trace_span!(
            "entropy.decay",
            data_len = $data_len,
            decayed_count = $decayed_count
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const WRITE: &str = "entropy.write";
    pub const READ: &str = "entropy.read";
    pub const DECAY: &str = "entropy.decay";
}
