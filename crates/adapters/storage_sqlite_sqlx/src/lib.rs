//! # department-registry-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `department-registry-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `departments` table (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `department-registry-app` (for port traits) and
//! `department-registry-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod department_repo;
mod error;
mod pool;

pub use department_repo::SqliteDepartmentRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
