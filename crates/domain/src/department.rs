//! Department — a named organisational unit owned by the repository.

use serde::{Deserialize, Serialize};

use crate::id::DepartmentId;

/// A department record.
///
/// `id` is `None` until the record has been saved once; the repository
/// assigns it and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DepartmentId>,
    pub name: String,
}

impl Department {
    /// Build a department that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Build a department carrying an identifier, as read back from a store.
    #[must_use]
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Whether the store has assigned an identifier to this record.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
