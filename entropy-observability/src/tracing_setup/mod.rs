//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use entropy_core::config::ObservabilityConfig;
use entropy_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Respects the `ENTROPY_LOG` environment variable for filtering and falls
/// back to the configured level. Idempotent; later calls are no-ops, and an
/// already-installed global subscriber is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json_output);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    // try_init: a host may already own the global subscriber.
    let _ = if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
}
