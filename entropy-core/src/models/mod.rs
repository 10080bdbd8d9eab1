pub mod corruption_range;
pub mod decay_status;

pub use corruption_range::CorruptionRange;
pub use decay_status::{DecayPhase, DecayStatus};
