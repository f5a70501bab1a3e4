//! Storage-specific error type for the in-memory adapter.

use department_registry_domain::error::RegistryError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The id counter reached `i64::MAX`; no new identifier can be handed out.
    #[error("department id space exhausted")]
    IdSpaceExhausted,
}

impl From<StorageError> for RegistryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
