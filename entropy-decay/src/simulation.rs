//! In-process decay for a single value, without a shared store.
//!
//! The corruption pattern is reproducible: the steps that bring decay up to
//! target `t` come from a generator seeded with `salt ^ t`, and the salt is
//! derived from the content and the creation tick. Two simulations of the
//! same content created at the same tick decay identically when read at
//! the same times.

use std::sync::Arc;

use entropy_core::models::CorruptionRange;
use entropy_core::traits::{IClock, Tick};

use crate::decay;
use crate::random::SeededRandom;

pub struct SimulatedDecay {
    state: Vec<u8>,
    started: Tick,
    salt: u64,
    decayed_count: usize,
    closed: bool,
    clock: Arc<dyn IClock>,
    range: CorruptionRange,
}

impl SimulatedDecay {
    pub fn new(content: &[u8], clock: Arc<dyn IClock>) -> Self {
        Self::with_range(content, clock, CorruptionRange::default())
    }

    pub fn with_range(content: &[u8], clock: Arc<dyn IClock>, range: CorruptionRange) -> Self {
        let started = clock.now();
        Self {
            state: content.to_vec(),
            started,
            salt: derive_salt(content, started),
            decayed_count: 0,
            closed: false,
            clock,
            range,
        }
    }

    /// Current content, after applying any decay due since the last read.
    /// Empty once closed.
    pub fn read(&mut self) -> Vec<u8> {
        if self.closed || self.state.is_empty() {
            return Vec::new();
        }

        let elapsed = self.clock.now().saturating_sub(self.started);
        let target = decay::decay_target(elapsed, self.clock.ticks_per_second(), self.state.len());
        if target > self.decayed_count {
            let random = SeededRandom::new(self.salt ^ target as u64);
            decay::corrupt(&mut self.state, target - self.decayed_count, self.range, &random);
            self.decayed_count = target;
        }

        self.state.clone()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn decayed_count(&self) -> usize {
        self.decayed_count
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Zero and drop the content. Later reads return nothing.
    pub fn close(&mut self) {
        self.state.fill(0);
        self.state.clear();
        self.decayed_count = 0;
        self.closed = true;
    }
}

impl std::fmt::Debug for SimulatedDecay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedDecay")
            .field("len", &self.state.len())
            .field("decayed_count", &self.decayed_count)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

fn derive_salt(content: &[u8], started: Tick) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(content);
    hasher.update(&started.to_le_bytes());
    let hash = hasher.finalize();
    let mut salt = [0u8; 8];
    salt.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(salt)
}
