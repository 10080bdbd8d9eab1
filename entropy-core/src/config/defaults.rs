// Single source of truth for all default values.

// --- Store ---
pub const DEFAULT_CAPACITY: usize = 1024;
pub const DEFAULT_TICKS_PER_SECOND: u64 = 1_000; // millisecond resolution
pub const DEFAULT_CORRUPTION_LOW: u8 = crate::constants::PRINTABLE_LOW;
pub const DEFAULT_CORRUPTION_HIGH: u8 = crate::constants::PRINTABLE_HIGH;
pub const DEFAULT_LOCK_POLL_INTERVAL_MS: u64 = 10;

// --- String wrapper ---
pub const DEFAULT_FORCE_SIMULATION: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
