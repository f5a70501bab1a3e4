//! Storage port — repository traits for persistence.

use std::future::Future;

use department_registry_domain::department::Department;
use department_registry_domain::error::RegistryError;
use department_registry_domain::id::DepartmentId;

/// Persistence operations over [`Department`] records.
///
/// The repository owns the authoritative copy of every department and is
/// responsible for assigning identifiers.
pub trait DepartmentRepository {
    /// Return every stored department, in the store's natural order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Department>, RegistryError>> + Send;

    /// Look up a single department.
    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RegistryError>> + Send;

    /// Persist `department` and return the stored representation.
    ///
    /// A department without an id is inserted and receives a fresh one;
    /// a department with an id replaces (or recreates) that record.
    fn save(
        &self,
        department: Department,
    ) -> impl Future<Output = Result<Department, RegistryError>> + Send;

    /// Remove the department with `id`. Removing a missing id is not an error.
    fn delete_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<(), RegistryError>> + Send;
}
