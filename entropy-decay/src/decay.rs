//! Cumulative, bounded decay.
//!
//! ```text
//! target = min((now - write_tick) / ticks_per_second, data_len)
//! delta  = target - decayed_count      (nothing to do when <= 0)
//! ```
//!
//! Each of the `delta` steps overwrites one uniformly chosen position with a
//! value from the corruption range. Positions are not deduplicated. The cap
//! on `target` bounds the work of a single call by `data_len`, however long
//! the store has been idle.

use entropy_core::models::CorruptionRange;
use entropy_core::traits::{IRandomSource, Tick};

use crate::state::DecayState;

/// Number of bytes that should have decayed after `elapsed_ticks`.
/// Partial seconds do not count.
pub fn decay_target(elapsed_ticks: u64, ticks_per_second: u64, data_len: usize) -> usize {
    let elapsed_units = elapsed_ticks.checked_div(ticks_per_second).unwrap_or(0);
    usize::try_from(elapsed_units).map_or(data_len, |units| units.min(data_len))
}

/// Apply `steps` corruption steps to `payload`.
pub fn corrupt(
    payload: &mut [u8],
    steps: usize,
    range: CorruptionRange,
    random: &dyn IRandomSource,
) {
    if payload.is_empty() {
        return;
    }
    for _ in 0..steps {
        let pos = random.random_u32() as usize % payload.len();
        payload[pos] = random.random_byte_in_range(range.low, range.high);
    }
}

/// Advance `state` to the decay level due at `now`. Returns the number of
/// corruption steps applied; 0 when decay has already caught up.
pub fn apply_decay(
    state: &mut DecayState,
    now: Tick,
    ticks_per_second: u64,
    range: CorruptionRange,
    random: &dyn IRandomSource,
) -> usize {
    let data_len = state.data_len();
    if data_len == 0 {
        return 0;
    }

    let elapsed = now.saturating_sub(state.write_tick());
    let target = decay_target(elapsed, ticks_per_second, data_len);
    let done = state.decayed_count();
    if done >= target {
        return 0;
    }

    let delta = target - done;
    corrupt(state.payload_mut(), delta, range, random);
    state.set_decayed_count(target);

    tracing::trace!(delta, target, data_len, "applied decay");
    delta
}
