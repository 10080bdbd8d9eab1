//! Configuration for the entropy store, loaded from TOML with env overrides.

pub mod defaults;
pub mod entropy_config;
pub mod observability_config;
pub mod store_config;
pub mod string_config;

pub use entropy_config::EntropyConfig;
pub use observability_config::ObservabilityConfig;
pub use store_config::StoreConfig;
pub use string_config::StringConfig;
