//! Lock-free operation counters for a decay store.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counters updated by the store on every operation.
#[derive(Debug, Default)]
pub struct StoreMetrics {
    writes: AtomicU64,
    clears: AtomicU64,
    reads: AtomicU64,
    decay_steps: AtomicU64,
    transfer_faults: AtomicU64,
    interruptions: AtomicU64,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_decay_steps(&self, steps: usize) {
        self.decay_steps.fetch_add(steps as u64, Ordering::Relaxed);
    }

    pub fn record_transfer_fault(&self) {
        self.transfer_faults.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_interruption(&self) {
        self.interruptions.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            writes: self.writes.load(Ordering::Relaxed),
            clears: self.clears.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            decay_steps: self.decay_steps.load(Ordering::Relaxed),
            transfer_faults: self.transfer_faults.load(Ordering::Relaxed),
            interruptions: self.interruptions.load(Ordering::Relaxed),
        }
    }
}

/// Serializable counter values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Non-empty writes that installed a payload.
    pub writes: u64,
    /// Empty writes and rollbacks that left the store empty.
    pub clears: u64,
    /// Reads that reached the store state (zero-length requests are not counted).
    pub reads: u64,
    /// Total corruption steps applied.
    pub decay_steps: u64,
    pub transfer_faults: u64,
    pub interruptions: u64,
}
