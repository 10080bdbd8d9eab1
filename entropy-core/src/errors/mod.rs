//! Error handling for the entropy store.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod entropy_error;
pub mod error_code;
pub mod store_error;

pub use config_error::ConfigError;
pub use entropy_error::{EntropyError, EntropyResult};
pub use error_code::EntropyErrorCode;
pub use store_error::StoreError;
