//! Clock implementations for the `IClock` capability.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use entropy_core::traits::{IClock, Tick};

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Wall-clock backed monotonic clock. Tick 0 is the moment of construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
    ticks_per_second: u64,
}

impl MonotonicClock {
    pub fn new(ticks_per_second: u64) -> Self {
        Self {
            origin: Instant::now(),
            ticks_per_second: ticks_per_second.max(1),
        }
    }
}

impl IClock for MonotonicClock {
    fn now(&self) -> Tick {
        let ticks =
            self.origin.elapsed().as_nanos() * u128::from(self.ticks_per_second) / NANOS_PER_SECOND;
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }

    fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }
}

/// Clock that only moves when told to. Used by tests and by hosts that
/// drive decay time themselves.
#[derive(Debug)]
pub struct ManualClock {
    ticks: AtomicU64,
    ticks_per_second: u64,
}

impl ManualClock {
    pub fn new(ticks_per_second: u64) -> Self {
        Self {
            ticks: AtomicU64::new(0),
            ticks_per_second: ticks_per_second.max(1),
        }
    }

    pub fn advance(&self, ticks: u64) {
        // fetch_update keeps the clock saturating instead of wrapping.
        let _ = self
            .ticks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |t| {
                Some(t.saturating_add(ticks))
            });
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(secs.saturating_mul(self.ticks_per_second));
    }

    /// Move the clock to `tick`. Ignored if that would move it backwards.
    pub fn set(&self, tick: Tick) {
        self.ticks.fetch_max(tick, Ordering::AcqRel);
    }
}

impl IClock for ManualClock {
    fn now(&self) -> Tick {
        self.ticks.load(Ordering::Acquire)
    }

    fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_in_seconds() {
        let clock = ManualClock::new(100);
        clock.advance_secs(3);
        clock.advance(50);
        assert_eq!(clock.now(), 350);
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new(1);
        clock.set(10);
        clock.set(4);
        assert_eq!(clock.now(), 10);
        clock.advance(u64::MAX);
        assert_eq!(clock.now(), u64::MAX);
    }

    #[test]
    fn monotonic_clock_is_non_decreasing() {
        let clock = MonotonicClock::new(1_000_000);
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert_eq!(clock.ticks_per_second(), 1_000_000);
    }

    #[test]
    fn zero_resolution_is_clamped() {
        assert_eq!(MonotonicClock::new(0).ticks_per_second(), 1);
        assert_eq!(ManualClock::new(0).ticks_per_second(), 1);
    }
}
