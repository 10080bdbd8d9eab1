use super::{ConfigError, EntropyErrorCode, StoreError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type EntropyResult<T> = Result<T, EntropyError>;

impl EntropyError {
    /// The underlying store error, if this is one.
    pub fn as_store(&self) -> Option<&StoreError> {
        match self {
            Self::Store(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl EntropyErrorCode for EntropyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

impl From<EntropyError> for std::io::Error {
    fn from(err: EntropyError) -> Self {
        match err {
            EntropyError::Store(e) => e.into(),
            EntropyError::Config(e) => std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    }
}
