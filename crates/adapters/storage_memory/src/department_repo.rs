//! In-memory implementation of [`DepartmentRepository`].

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use department_registry_app::ports::DepartmentRepository;
use department_registry_domain::department::Department;
use department_registry_domain::error::RegistryError;
use department_registry_domain::id::DepartmentId;

use crate::error::StorageError;

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<DepartmentId, String>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> Result<DepartmentId, StorageError> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or(StorageError::IdSpaceExhausted)?;
        Ok(DepartmentId::new(self.last_id))
    }

    fn upsert(&mut self, department: Department) -> Result<Department, StorageError> {
        let id = match department.id {
            Some(id) => {
                self.last_id = self.last_id.max(id.get());
                id
            }
            None => self.next_id()?,
        };
        self.rows.insert(id, department.name.clone());
        Ok(Department::with_id(id, department.name))
    }
}

/// Department repository that keeps records in process memory, ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryDepartmentRepository {
    store: Mutex<Store>,
}

impl InMemoryDepartmentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `departments`.
    ///
    /// Entries without an id are assigned one, exactly as [`save`] would.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::IdSpaceExhausted`] if no identifier is left
    /// for an entry without one.
    ///
    /// [`save`]: DepartmentRepository::save
    pub fn with_departments(
        departments: impl IntoIterator<Item = Department>,
    ) -> Result<Self, StorageError> {
        let mut store = Store::default();
        for department in departments {
            store.upsert(department)?;
        }
        Ok(Self {
            store: Mutex::new(store),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panic while holding the guard cannot leave `Store` half-written.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DepartmentRepository for InMemoryDepartmentRepository {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Department>, RegistryError>> + Send {
        let result: Vec<Department> = self
            .lock()
            .rows
            .iter()
            .map(|(id, name)| Department::with_id(*id, name.clone()))
            .collect();
        async { Ok(result) }
    }

    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RegistryError>> + Send {
        let result = self
            .lock()
            .rows
            .get(&id)
            .map(|name| Department::with_id(id, name.clone()));
        async { Ok(result) }
    }

    fn save(
        &self,
        department: Department,
    ) -> impl Future<Output = Result<Department, RegistryError>> + Send {
        let result = self.lock().upsert(department);
        match &result {
            Ok(saved) => tracing::debug!(department_id = ?saved.id, "department saved"),
            Err(err) => tracing::warn!(error = %err, "department not saved"),
        }
        async { result.map_err(RegistryError::from) }
    }

    fn delete_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<(), RegistryError>> + Send {
        if self.lock().rows.remove(&id).is_none() {
            tracing::debug!(%id, "delete of unknown department ignored");
        }
        async { Ok(()) }
    }
}
