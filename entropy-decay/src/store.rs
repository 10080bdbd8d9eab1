//! DecayStore: owns the decaying buffer and serializes every access to it.

use std::io::{Read, Write};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

use entropy_core::config::StoreConfig;
use entropy_core::errors::{EntropyResult, StoreError};
use entropy_core::models::{CorruptionRange, DecayStatus};
use entropy_core::traits::{Cancellable, IClock, IRandomSource, NeverCancelled};
use entropy_observability::{decay_span, store_read_span, store_write_span};
use entropy_observability::{MetricsSnapshot, StoreMetrics};

use crate::clock::MonotonicClock;
use crate::decay;
use crate::random::OsRandom;
use crate::state::DecayState;

/// A single-slot byte store whose payload decays with time since the last write.
///
/// One lock guards the whole state, so every `write` and `read` is
/// linearizable. Reads advance decay before copying out; writes reset it.
/// Share between threads with `Arc<DecayStore>`.
pub struct DecayStore {
    state: Mutex<DecayState>,
    capacity: usize,
    max_payload_len: usize,
    clock: Arc<dyn IClock>,
    random: Arc<dyn IRandomSource>,
    corruption_range: CorruptionRange,
    lock_poll_interval: Duration,
    metrics: StoreMetrics,
}

impl DecayStore {
    /// Create a store with injected clock and randomness.
    ///
    /// Decay time is measured in the clock's own `ticks_per_second`;
    /// `config.ticks_per_second` is only used by [`DecayStore::from_config`]
    /// to build the default clock.
    pub fn new(
        config: &StoreConfig,
        clock: Arc<dyn IClock>,
        random: Arc<dyn IRandomSource>,
    ) -> Self {
        let state = DecayState::new(config.capacity, clock.now());
        Self {
            capacity: state.capacity(),
            max_payload_len: state.max_payload_len(),
            state: Mutex::new(state),
            clock,
            random,
            corruption_range: config.corruption_range,
            lock_poll_interval: config.lock_poll_interval().max(Duration::from_millis(1)),
            metrics: StoreMetrics::new(),
        }
    }

    /// Create a store backed by the monotonic system clock and OS randomness.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            config,
            Arc::new(MonotonicClock::new(config.ticks_per_second)),
            Arc::new(OsRandom),
        )
    }

    /// Buffer size including the reserved terminator slot.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest payload a write will keep.
    pub fn max_payload_len(&self) -> usize {
        self.max_payload_len
    }

    /// Current payload length. Blocks until the lock is free.
    pub fn len(&self) -> usize {
        self.state.lock().data_len()
    }

    /// [`len`](Self::len) whose wait for the lock can be abandoned via `cancel`.
    pub fn len_interruptible(&self, cancel: &dyn Cancellable) -> EntropyResult<usize> {
        Ok(self.lock("status", cancel)?.data_len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the decay state. Does not advance decay.
    pub fn status(&self) -> DecayStatus {
        let state = self.state.lock();
        let now = self.clock.now();
        DecayStatus {
            capacity: state.capacity(),
            data_len: state.data_len(),
            decayed_count: state.decayed_count(),
            elapsed_ticks: now.saturating_sub(state.write_tick()),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    // --- Write ---

    /// Replace the stored payload. Returns the number of bytes kept.
    ///
    /// Input longer than [`max_payload_len`](Self::max_payload_len) is
    /// silently truncated. An empty payload clears the store.
    pub fn write(&self, payload: &[u8]) -> EntropyResult<usize> {
        self.write_interruptible(payload, &NeverCancelled)
    }

    /// [`write`](Self::write) whose wait for the lock can be abandoned via `cancel`.
    pub fn write_interruptible(
        &self,
        payload: &[u8],
        cancel: &dyn Cancellable,
    ) -> EntropyResult<usize> {
        let _span = store_write_span!(payload.len()).entered();
        if payload.is_empty() {
            self.clear_interruptible(cancel)?;
            return Ok(0);
        }

        let mut state = self.lock("write", cancel)?;
        let stored = state.install(payload, self.clock.now());
        drop(state);

        self.metrics.record_write();
        Ok(stored)
    }

    /// Replace the stored payload with the next `len` bytes of `source`.
    ///
    /// Only `min(len, max_payload_len)` bytes are consumed. They are staged
    /// before the lock is taken, so a slow source never stalls other callers.
    /// If `source` fails or ends early the store is left empty and a
    /// `TransferFault` is returned.
    pub fn write_from<R: Read>(
        &self,
        mut source: R,
        len: usize,
        cancel: &dyn Cancellable,
    ) -> EntropyResult<usize> {
        let _span = store_write_span!(len).entered();
        if len == 0 {
            self.clear_interruptible(cancel)?;
            return Ok(0);
        }

        let mut staged = vec![0u8; len.min(self.max_payload_len)];
        if let Err(e) = source.read_exact(&mut staged) {
            staged.fill(0);
            // Rollback is not cancellable.
            self.clear_interruptible(&NeverCancelled)?;
            tracing::debug!(error = %e, "inbound transfer failed, store rolled back to empty");
            self.metrics.record_transfer_fault();
            return Err(StoreError::TransferFault {
                operation: "write",
                reason: e.to_string(),
            }
            .into());
        }

        let mut state = self.lock("write", cancel)?;
        let stored = state.install(&staged, self.clock.now());
        drop(state);
        staged.fill(0);

        self.metrics.record_write();
        Ok(stored)
    }

    /// Zero the buffer and reset to the empty state.
    pub fn clear(&self) -> EntropyResult<()> {
        self.clear_interruptible(&NeverCancelled)
    }

    fn clear_interruptible(&self, cancel: &dyn Cancellable) -> EntropyResult<()> {
        let mut state = self.lock("write", cancel)?;
        state.clear(self.clock.now());
        drop(state);
        self.metrics.record_clear();
        Ok(())
    }

    // --- Read ---

    /// Read up to `max_len` bytes starting at `offset`, after advancing decay.
    ///
    /// An empty result means end of data, an empty store, or `max_len == 0`.
    /// A negative `offset` is rejected without touching the store.
    pub fn read(&self, offset: i64, max_len: usize) -> EntropyResult<Vec<u8>> {
        self.read_interruptible(offset, max_len, &NeverCancelled)
    }

    /// [`read`](Self::read) whose wait for the lock can be abandoned via `cancel`.
    pub fn read_interruptible(
        &self,
        offset: i64,
        max_len: usize,
        cancel: &dyn Cancellable,
    ) -> EntropyResult<Vec<u8>> {
        let _span = store_read_span!(offset, max_len).entered();
        self.read_window(offset, max_len, cancel)
    }

    /// Copy up to `max_len` bytes starting at `offset` into `sink`, after
    /// advancing decay. Returns the number of bytes copied.
    ///
    /// `sink` is written after the lock is released. If it fails the error
    /// is a `TransferFault`; decay applied by this call is kept.
    pub fn read_into<W: Write>(
        &self,
        offset: i64,
        max_len: usize,
        mut sink: W,
        cancel: &dyn Cancellable,
    ) -> EntropyResult<usize> {
        let _span = store_read_span!(offset, max_len).entered();
        let window = self.read_window(offset, max_len, cancel)?;
        if window.is_empty() {
            return Ok(0);
        }

        if let Err(e) = sink.write_all(&window) {
            self.metrics.record_transfer_fault();
            return Err(StoreError::TransferFault {
                operation: "read",
                reason: e.to_string(),
            }
            .into());
        }
        Ok(window.len())
    }

    /// Advance decay and copy the requested window out under the lock.
    fn read_window(
        &self,
        offset: i64,
        max_len: usize,
        cancel: &dyn Cancellable,
    ) -> EntropyResult<Vec<u8>> {
        if max_len == 0 {
            return Ok(Vec::new());
        }
        if offset < 0 {
            return Err(StoreError::InvalidArgument {
                reason: format!("negative read offset {offset}"),
            }
            .into());
        }

        let mut state = self.lock("read", cancel)?;
        self.metrics.record_read();
        if state.is_empty() {
            return Ok(Vec::new());
        }

        self.apply_decay(&mut state);

        // An offset that does not fit in usize is past any buffer.
        let Ok(offset) = usize::try_from(offset) else {
            return Ok(Vec::new());
        };
        Ok(state.window(offset, max_len).to_vec())
    }

    fn apply_decay(&self, state: &mut DecayState) {
        let _span = decay_span!(state.data_len(), state.decayed_count()).entered();
        let steps = decay::apply_decay(
            state,
            self.clock.now(),
            self.clock.ticks_per_second(),
            self.corruption_range,
            self.random.as_ref(),
        );
        if steps > 0 {
            self.metrics.record_decay_steps(steps);
        }
    }

    /// Acquire the state lock, giving up if `cancel` fires while waiting.
    fn lock(
        &self,
        operation: &'static str,
        cancel: &dyn Cancellable,
    ) -> Result<MutexGuard<'_, DecayState>, StoreError> {
        if let Some(guard) = self.state.try_lock() {
            return Ok(guard);
        }
        loop {
            if cancel.is_cancelled() {
                self.metrics.record_interruption();
                return Err(StoreError::Interrupted { operation });
            }
            if let Some(guard) = self.state.try_lock_for(self.lock_poll_interval) {
                return Ok(guard);
            }
        }
    }
}

impl std::fmt::Debug for DecayStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecayStore")
            .field("corruption_range", &self.corruption_range)
            .field("lock_poll_interval", &self.lock_poll_interval)
            .finish_non_exhaustive()
    }
}

