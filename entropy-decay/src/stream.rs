//! File-like access to a shared store with a host-owned cursor.

use std::io::{self, Read, Seek, SeekFrom, Write};
use std::sync::Arc;

use entropy_core::errors::EntropyResult;
use entropy_core::traits::CancellationToken;

use crate::store::DecayStore;

/// An open handle on a [`DecayStore`], usable wherever `Read`, `Write`, and
/// `Seek` are expected.
///
/// The handle owns the cursor. Reads advance it by the number of bytes
/// returned; every write replaces the stored payload and rewinds to 0.
/// Cancelling the handle's token aborts any lock wait with
/// `io::ErrorKind::Interrupted`.
#[derive(Debug)]
pub struct DecayFile {
    store: Arc<DecayStore>,
    position: u64,
    last_stored: usize,
    cancel: CancellationToken,
}

impl DecayFile {
    pub fn open(store: Arc<DecayStore>) -> Self {
        Self::with_cancellation(store, CancellationToken::new())
    }

    pub fn with_cancellation(store: Arc<DecayStore>, cancel: CancellationToken) -> Self {
        Self {
            store,
            position: 0,
            last_stored: 0,
            cancel,
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes the store kept on the most recent write through this handle.
    /// Smaller than the written buffer when the payload was truncated.
    pub fn last_stored(&self) -> usize {
        self.last_stored
    }

    pub fn store(&self) -> &Arc<DecayStore> {
        &self.store
    }

    /// Token that interrupts this handle's pending lock waits.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Empty the store and rewind.
    pub fn clear(&mut self) -> EntropyResult<()> {
        self.store.write_interruptible(&[], &self.cancel)?;
        self.position = 0;
        self.last_stored = 0;
        Ok(())
    }
}

impl Read for DecayFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let offset = i64::try_from(self.position).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "cursor position exceeds i64::MAX")
        })?;
        let len = buf.len();
        let copied = self.store.read_into(offset, len, buf, &self.cancel)?;
        self.position += copied as u64;
        Ok(copied)
    }
}

impl Write for DecayFile {
    /// Replaces the stored payload with `buf`.
    ///
    /// Reports the whole buffer as consumed: bytes past the store's maximum
    /// payload length are discarded rather than left for a follow-up write,
    /// which would otherwise replace the payload again. The kept count is
    /// available from [`DecayFile::last_stored`].
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let stored = self.store.write_interruptible(buf, &self.cancel)?;
        if stored < buf.len() {
            tracing::debug!(
                requested = buf.len(),
                stored,
                "stream write truncated to store capacity"
            );
        }
        self.position = 0;
        self.last_stored = stored;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for DecayFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(n) => Some(n),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
            SeekFrom::End(delta) => {
                let len = self.store.len_interruptible(&self.cancel)?;
                (len as u64).checked_add_signed(delta)
            }
        };
        match target {
            Some(position) => {
                self.position = position;
                Ok(position)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )),
        }
    }
}
