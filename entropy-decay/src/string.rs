//! A text value that decays over time.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use entropy_core::config::StringConfig;
use entropy_core::errors::EntropyResult;
use entropy_core::traits::IClock;

use crate::simulation::SimulatedDecay;
use crate::store::DecayStore;

enum Backend {
    /// Content lives in a shared store.
    Store(Arc<DecayStore>),
    /// Content lives in a private simulation.
    Simulated(Mutex<SimulatedDecay>),
}

/// A string whose value decays with time since it was created.
///
/// Backed by a shared [`DecayStore`] when one is supplied, otherwise (or when
/// `force_simulation` is set, or the initial write fails) by a
/// [`SimulatedDecay`]. Decayed bytes may break UTF-8 sequences; values are
/// decoded lossily.
///
/// A store-backed string clears the store when closed or dropped.
pub struct DecayString {
    backend: Option<Backend>,
}

impl DecayString {
    pub fn new(
        content: &str,
        store: Option<Arc<DecayStore>>,
        config: &StringConfig,
        clock: Arc<dyn IClock>,
    ) -> Self {
        if !config.force_simulation {
            if let Some(store) = store {
                match Self::attach(content, store) {
                    Ok(string) => return string,
                    Err(e) => {
                        tracing::warn!(error = %e, "decay store unavailable, using simulation");
                    }
                }
            }
        }
        Self::simulated(content, clock)
    }

    /// Store-backed string. Fails instead of falling back to simulation.
    pub fn attach(content: &str, store: Arc<DecayStore>) -> EntropyResult<Self> {
        store.write(content.as_bytes())?;
        Ok(Self {
            backend: Some(Backend::Store(store)),
        })
    }

    pub fn simulated(content: &str, clock: Arc<dyn IClock>) -> Self {
        Self {
            backend: Some(Backend::Simulated(Mutex::new(SimulatedDecay::new(
                content.as_bytes(),
                clock,
            )))),
        }
    }

    /// Current, possibly decayed, value. Empty once closed.
    pub fn value(&self) -> EntropyResult<String> {
        let bytes = match &self.backend {
            Some(Backend::Store(store)) => store.read(0, store.max_payload_len())?,
            Some(Backend::Simulated(sim)) => sim.lock().read(),
            None => return Ok(String::new()),
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn is_store_backed(&self) -> bool {
        matches!(self.backend, Some(Backend::Store(_)))
    }

    pub fn is_closed(&self) -> bool {
        self.backend.is_none()
    }

    /// Release the value. A store-backed string clears the store; a simulated
    /// one drops its content. Closing twice is a no-op.
    pub fn close(&mut self) -> EntropyResult<()> {
        match self.backend.take() {
            Some(Backend::Store(store)) => store.clear(),
            Some(Backend::Simulated(sim)) => {
                sim.lock().close();
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Drop for DecayString {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::debug!(error = %e, "failed to clear decay store on drop");
        }
    }
}

impl fmt::Display for DecayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(value) => f.write_str(&value),
            Err(e) => write!(f, "<decay error: {e}>"),
        }
    }
}

impl fmt::Debug for DecayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match &self.backend {
            Some(Backend::Store(_)) => "store",
            Some(Backend::Simulated(_)) => "simulated",
            None => "closed",
        };
        f.debug_struct("DecayString").field("mode", &mode).finish()
    }
}
