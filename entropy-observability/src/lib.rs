//! # entropy-observability
//!
//! Tracing setup, span definitions, and lock-free store metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, StoreMetrics};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
