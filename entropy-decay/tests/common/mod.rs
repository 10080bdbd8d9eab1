//! Shared fixtures for the decay store integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use entropy_core::config::StoreConfig;
use entropy_core::traits::IRandomSource;
use entropy_decay::{DecayStore, ManualClock, SeededRandom};

/// Replays a fixed script of `random_u32` values, then returns 0.
#[derive(Default)]
pub struct ScriptedRandom {
    values: Mutex<VecDeque<u32>>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }
}

impl IRandomSource for ScriptedRandom {
    fn random_u32(&self) -> u32 {
        self.values.lock().pop_front().unwrap_or(0)
    }
}

/// Wraps another source and counts corruption steps (one byte draw per step).
pub struct CountingRandom<R> {
    inner: R,
    steps: AtomicUsize,
}

impl<R: IRandomSource> CountingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            steps: AtomicUsize::new(0),
        }
    }

    pub fn steps(&self) -> usize {
        self.steps.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.steps.store(0, Ordering::SeqCst);
    }
}

impl<R: IRandomSource> IRandomSource for CountingRandom<R> {
    fn random_u32(&self) -> u32 {
        self.inner.random_u32()
    }

    fn random_byte_in_range(&self, low: u8, high: u8) -> u8 {
        self.steps.fetch_add(1, Ordering::SeqCst);
        self.inner.random_byte_in_range(low, high)
    }
}

pub fn config(capacity: usize, ticks_per_second: u64) -> StoreConfig {
    StoreConfig {
        capacity,
        ticks_per_second,
        ..StoreConfig::default()
    }
}

/// Store on a manual clock with a seeded random source.
pub fn seeded_store(capacity: usize, ticks_per_second: u64) -> (Arc<DecayStore>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(ticks_per_second));
    let store = DecayStore::new(
        &config(capacity, ticks_per_second),
        clock.clone(),
        Arc::new(SeededRandom::new(7)),
    );
    (Arc::new(store), clock)
}

/// Store on a manual clock that also exposes its step-counting random source.
pub fn counting_store(
    capacity: usize,
) -> (
    Arc<DecayStore>,
    Arc<ManualClock>,
    Arc<CountingRandom<SeededRandom>>,
) {
    let clock = Arc::new(ManualClock::new(1));
    let random = Arc::new(CountingRandom::new(SeededRandom::new(99)));
    let store = DecayStore::new(&config(capacity, 1), clock.clone(), random.clone());
    (Arc::new(store), clock, random)
}
