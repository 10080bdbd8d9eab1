/// Abstract monotonic clock reading.
pub type Tick = u64;

/// Monotonic clock capability injected into the store.
pub trait IClock: Send + Sync {
    /// Current reading. Never decreases between calls.
    fn now(&self) -> Tick;

    /// Number of ticks in one second of decay time.
    fn ticks_per_second(&self) -> u64;
}
