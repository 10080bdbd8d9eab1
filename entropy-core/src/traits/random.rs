/// Randomness capability injected into the store.
///
/// Implementations must be safe to call from any thread.
pub trait IRandomSource: Send + Sync {
    fn random_u32(&self) -> u32;

    /// A value in `low..=high`, derived from [`random_u32`](Self::random_u32)
    /// modulo the span. Returns `low` when the range is empty or inverted.
    fn random_byte_in_range(&self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        let span = u32::from(high - low) + 1;
        low + (self.random_u32() % span) as u8
    }
}
