//! # department-registry-adapter-storage-memory
//!
//! In-process persistence adapter backed by a `BTreeMap`.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `department-registry-app::ports::storage`
//! - Hand out identifiers from a monotonically increasing counter
//!
//! Nothing survives the process; use the `SQLite` adapter for durable storage.
//!
//! ## Dependency rule
//! Depends on `department-registry-app` (for port traits) and
//! `department-registry-domain` (for domain types).

mod department_repo;
mod error;

pub use department_repo::InMemoryDepartmentRepository;
pub use error::StorageError;
