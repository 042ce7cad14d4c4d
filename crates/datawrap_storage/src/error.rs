//! Error types for data source construction.

use thiserror::Error;

/// Result type for data source operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while assembling a data source chain.
///
/// Reads and writes through an assembled chain are total; only
/// construction can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The chain was configured in a way that cannot produce a data source.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl StorageError {
    /// Shorthand for an [`StorageError::InvalidConfiguration`] error.
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = StorageError::invalid_config("chain has no storage endpoint");
        assert_eq!(
            err.to_string(),
            "invalid configuration: chain has no storage endpoint"
        );
    }
}
