//! `SQLite` implementation of [`DepartmentRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use department_registry_app::ports::DepartmentRepository;
use department_registry_domain::department::Department;
use department_registry_domain::error::RegistryError;
use department_registry_domain::id::DepartmentId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Department`].
struct Wrapper(Department);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Department> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Department::with_id(DepartmentId::new(id), name)))
    }
}

const INSERT: &str = "INSERT INTO departments (name) VALUES (?) RETURNING id";
const UPSERT: &str = "INSERT INTO departments (id, name) VALUES (?, ?) \
     ON CONFLICT (id) DO UPDATE SET name = excluded.name";
const SELECT_BY_ID: &str = "SELECT id, name FROM departments WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name FROM departments ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM departments WHERE id = ?";

/// `SQLite`-backed department repository.
pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Department>, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn save(
        &self,
        department: Department,
    ) -> impl Future<Output = Result<Department, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = match department.id {
                Some(id) => {
                    sqlx::query(UPSERT)
                        .bind(id.get())
                        .bind(&department.name)
                        .execute(&pool)
                        .await
                        .map_err(StorageError::from)?;
                    id
                }
                None => {
                    let id: i64 = sqlx::query_scalar(INSERT)
                        .bind(&department.name)
                        .fetch_one(&pool)
                        .await
                        .map_err(StorageError::from)?;
                    DepartmentId::new(id)
                }
            };

            Ok(Department::with_id(id, department.name))
        }
    }

    fn delete_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<(), RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::debug!(%id, "delete of unknown department ignored");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteDepartmentRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteDepartmentRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_assign_id_when_saving_new_department() {
        let repo = setup().await;

        let saved = repo.save(Department::new("R&D")).await.unwrap();

        assert!(saved.is_persisted());
        assert_eq!(saved.name, "R&D");
        let fetched = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn should_return_none_when_department_not_found() {
        let repo = setup().await;
        let result = repo.find_by_id(DepartmentId::new(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_departments_in_id_order() {
        let repo = setup().await;
        repo.save(Department::new("IT")).await.unwrap();
        repo.save(Department::new("HR")).await.unwrap();

        let all = repo.find_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["IT", "HR"]);
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn should_update_department_when_id_is_set() {
        let repo = setup().await;
        let mut saved = repo.save(Department::new("Finance")).await.unwrap();
        let id = saved.id.unwrap();

        saved.name = "Accounting".to_string();
        let updated = repo.save(saved).await.unwrap();

        assert_eq!(updated, Department::with_id(id, "Accounting"));
        let fetched = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Accounting");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_insert_department_with_explicit_id() {
        let repo = setup().await;

        let saved = repo
            .save(Department::with_id(DepartmentId::new(10), "Finance"))
            .await
            .unwrap();
        let next = repo.save(Department::new("Legal")).await.unwrap();

        assert_eq!(saved.id, Some(DepartmentId::new(10)));
        assert_eq!(next.id, Some(DepartmentId::new(11)));
    }

    #[tokio::test]
    async fn should_delete_department_when_exists() {
        let repo = setup().await;
        let saved = repo.save(Department::new("IT")).await.unwrap();
        let id = saved.id.unwrap();

        repo.delete_by_id(id).await.unwrap();

        let result = repo.find_by_id(id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_ignore_delete_when_department_missing() {
        let repo = setup().await;
        repo.save(Department::new("IT")).await.unwrap();

        repo.delete_by_id(DepartmentId::new(3)).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_surface_storage_error_when_pool_closed() {
        let repo = setup().await;
        repo.pool.close().await;

        let result = repo.find_all().await;

        assert!(matches!(result, Err(RegistryError::Storage(_))));
    }

    #[tokio::test]
    async fn should_fail_when_id_space_exhausted() {
        let repo = setup().await;
        repo.save(Department::with_id(DepartmentId::new(i64::MAX), "Edge"))
            .await
            .unwrap();

        let result = repo.save(Department::new("Next")).await;

        assert!(matches!(result, Err(RegistryError::Storage(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
