//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RegistryError`] via `From`, so callers only ever match on one enum.

use std::error::Error;

/// Workspace-wide error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A lookup by identifier matched no record.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed; the source is adapter specific.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// A record with the given identifier does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct FakeStoreError;

    #[test]
    fn should_render_not_found_message() {
        let err: RegistryError = NotFoundError {
            entity: "Department",
            id: "999".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Department 999 not found");
    }

    #[test]
    fn should_keep_storage_source() {
        let err = RegistryError::Storage(Box::new(FakeStoreError));
        assert_eq!(err.to_string(), "storage error");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk on fire"));
    }
}
