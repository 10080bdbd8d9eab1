/// Entropy store version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bytes reserved at the end of the buffer as a terminator slot.
/// The usable payload is always `capacity - RESERVED_TERMINATOR_BYTES`.
pub const RESERVED_TERMINATOR_BYTES: usize = 1;

/// Lowest byte value written by a corruption step (`!`).
pub const PRINTABLE_LOW: u8 = 33;

/// Highest byte value written by a corruption step (`~`).
pub const PRINTABLE_HIGH: u8 = 126;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "ENTROPY_LOG";
