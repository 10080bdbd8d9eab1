use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::RESERVED_TERMINATOR_BYTES;
use crate::models::CorruptionRange;

/// Decay store configuration. Fixed at construction, not runtime-mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Total buffer size in bytes, including the reserved terminator slot.
    pub capacity: usize,
    /// Clock resolution used to convert elapsed ticks into decay steps.
    pub ticks_per_second: u64,
    /// Byte values written by corruption steps (inclusive).
    pub corruption_range: CorruptionRange,
    /// How often an interruptible lock wait re-checks its cancellation token.
    pub lock_poll_interval_ms: u64,
}

impl StoreConfig {
    /// Largest payload the store will keep; longer writes are truncated.
    pub fn max_payload_len(&self) -> usize {
        self.capacity.saturating_sub(RESERVED_TERMINATOR_BYTES)
    }

    pub fn lock_poll_interval(&self) -> Duration {
        Duration::from_millis(self.lock_poll_interval_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CAPACITY,
            ticks_per_second: defaults::DEFAULT_TICKS_PER_SECOND,
            corruption_range: CorruptionRange::default(),
            lock_poll_interval_ms: defaults::DEFAULT_LOCK_POLL_INTERVAL_MS,
        }
    }
}
