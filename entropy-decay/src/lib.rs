//! # entropy-decay
//!
//! Single-slot storage engine whose payload decays with elapsed time since
//! the last write: every second corrupts one more byte, until the whole
//! payload is randomized. Decay is computed lazily on read, cumulative, and
//! bounded by the payload length.
//!
//! Hosts: [`DecayFile`] for stream-style access with a caller-owned cursor,
//! [`DecayString`] for text values with a simulation fallback.

pub mod clock;
pub mod decay;
pub mod random;
pub mod simulation;
pub mod state;
pub mod store;
pub mod stream;
pub mod string;

pub use clock::{ManualClock, MonotonicClock};
pub use random::{OsRandom, SeededRandom};
pub use simulation::SimulatedDecay;
pub use store::DecayStore;
pub use stream::DecayFile;
pub use string::DecayString;
