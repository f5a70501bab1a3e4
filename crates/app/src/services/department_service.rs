//! Department service — use-cases for managing departments.

use department_registry_domain::department::Department;
use department_registry_domain::error::{NotFoundError, RegistryError};
use department_registry_domain::id::DepartmentId;

use crate::ports::DepartmentRepository;

/// Application service for department CRUD operations.
///
/// Every operation maps to exactly one repository call. Repository failures
/// are returned as-is.
pub struct DepartmentService<R> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all departments in the order the repository yields them.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_departments(&self) -> Result<Vec<Department>, RegistryError> {
        self.repo.find_all().await
    }

    /// Look up a department by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no department with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_department_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Department, RegistryError> {
        match self.repo.find_by_id(id).await? {
            Some(department) => Ok(department),
            None => {
                tracing::debug!("department not found");
                Err(NotFoundError {
                    entity: "Department",
                    id: id.to_string(),
                }
                .into())
            }
        }
    }

    /// Insert or update a department and return what the repository stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, department), fields(department_name = %department.name))]
    pub async fn save_department(
        &self,
        department: Department,
    ) -> Result<Department, RegistryError> {
        self.repo.save(department).await
    }

    /// Delete a department by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_department(&self, id: DepartmentId) -> Result<(), RegistryError> {
        self.repo.delete_by_id(id).await
    }
}
