//! # entropy-core
//!
//! Foundation crate for the entropy decay store.
//! Defines the shared types, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EntropyConfig;
pub use errors::{EntropyError, EntropyResult};
pub use models::{CorruptionRange, DecayStatus};
pub use traits::{Cancellable, CancellationToken, IClock, IRandomSource, Tick};
