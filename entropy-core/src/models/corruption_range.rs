use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Inclusive range of byte values a corruption step may write.
///
/// Defaults to printable ASCII without space (`33..=126`, 94 values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptionRange {
    pub low: u8,
    pub high: u8,
}

impl CorruptionRange {
    pub fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, byte: u8) -> bool {
        (self.low..=self.high).contains(&byte)
    }

    /// Number of distinct values in the range.
    pub fn len(&self) -> usize {
        if self.high < self.low {
            0
        } else {
            usize::from(self.high - self.low) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CorruptionRange {
    fn default() -> Self {
        Self {
            low: defaults::DEFAULT_CORRUPTION_LOW,
            high: defaults::DEFAULT_CORRUPTION_HIGH,
        }
    }
}
