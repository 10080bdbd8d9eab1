//! The guarded state of a decay store: buffer, length, write tick, progress.

use entropy_core::constants::RESERVED_TERMINATOR_BYTES;
use entropy_core::traits::Tick;

/// Buffer plus metadata, always accessed under the store's lock.
///
/// Invariants:
/// - `data_len <= capacity - 1`; `buffer[data_len]` is always zero.
/// - `decayed_count <= data_len`.
/// - Every byte at or past `data_len` is zero.
#[derive(Debug)]
pub struct DecayState {
    buffer: Box<[u8]>,
    data_len: usize,
    write_tick: Tick,
    decayed_count: usize,
}

impl DecayState {
    pub fn new(capacity: usize, now: Tick) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            data_len: 0,
            write_tick: now,
            decayed_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn max_payload_len(&self) -> usize {
        self.buffer.len().saturating_sub(RESERVED_TERMINATOR_BYTES)
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn write_tick(&self) -> Tick {
        self.write_tick
    }

    pub fn decayed_count(&self) -> usize {
        self.decayed_count
    }

    pub fn is_empty(&self) -> bool {
        self.data_len == 0
    }

    /// The currently valid payload.
    pub fn payload(&self) -> &[u8] {
        &self.buffer[..self.data_len]
    }

    pub(crate) fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[..self.data_len]
    }

    /// Zero the whole buffer and reset to the empty state.
    pub fn clear(&mut self, now: Tick) {
        self.buffer.fill(0);
        self.data_len = 0;
        self.write_tick = now;
        self.decayed_count = 0;
    }

    /// Replace the contents with `payload`, truncated to the maximum payload
    /// length. Returns the number of bytes kept.
    pub fn install(&mut self, payload: &[u8], now: Tick) -> usize {
        let copy_len = payload.len().min(self.max_payload_len());
        self.buffer.fill(0);
        self.buffer[..copy_len].copy_from_slice(&payload[..copy_len]);
        self.data_len = copy_len;
        self.write_tick = now;
        self.decayed_count = 0;
        copy_len
    }

    /// Up to `max_len` bytes starting at `offset`, empty at or past the end.
    pub fn window(&self, offset: usize, max_len: usize) -> &[u8] {
        if offset >= self.data_len {
            return &[];
        }
        let to_copy = max_len.min(self.data_len - offset);
        &self.buffer[offset..offset + to_copy]
    }

    pub(crate) fn set_decayed_count(&mut self, count: usize) {
        debug_assert!(count >= self.decayed_count && count <= self.data_len);
        self.decayed_count = count;
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &[u8] {
        &self.buffer
    }
}
