//! Random sources for the `IRandomSource` capability.

use entropy_core::traits::IRandomSource;
use parking_lot::Mutex;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Operating-system randomness. Stateless; every call reads from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl IRandomSource for OsRandom {
    fn random_u32(&self) -> u32 {
        OsRng.next_u32()
    }
}

/// Deterministic generator for reproducible decay patterns.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IRandomSource for SeededRandom {
    fn random_u32(&self) -> u32 {
        self.rng.lock().next_u32()
    }
}
