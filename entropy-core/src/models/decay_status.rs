use serde::{Deserialize, Serialize};

/// Whether the store currently holds a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecayPhase {
    Empty,
    Populated,
}

/// Point-in-time snapshot of a store's decay state.
///
/// Taking a snapshot does not advance decay; `decayed_count` reflects the
/// progress applied by the most recent read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayStatus {
    pub capacity: usize,
    pub data_len: usize,
    pub decayed_count: usize,
    /// Ticks elapsed since the last write, as seen by the store's clock.
    pub elapsed_ticks: u64,
}

impl DecayStatus {
    pub fn phase(&self) -> DecayPhase {
        if self.data_len == 0 {
            DecayPhase::Empty
        } else {
            DecayPhase::Populated
        }
    }

    /// True once the decay count has reached the payload length. Steps may hit
    /// the same position twice, so some original bytes can still survive.
    pub fn is_fully_decayed(&self) -> bool {
        self.data_len > 0 && self.decayed_count >= self.data_len
    }
}
