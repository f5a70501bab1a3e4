//! # departments — department registry CLI
//!
//! Composition root that wires a storage adapter into the department service
//! and runs one command against it.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via the port trait
//! - Render results as JSON on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod cli;
pub mod config;
pub mod logging;

use std::io::Write;

use anyhow::Context;
use department_registry_adapter_storage_memory::InMemoryDepartmentRepository;
use department_registry_adapter_storage_sqlite_sqlx::{
    Config as SqliteConfig, SqliteDepartmentRepository,
};
use department_registry_app::ports::DepartmentRepository;
use department_registry_app::services::department_service::DepartmentService;
use department_registry_domain::department::Department;
use serde::Serialize;

use crate::cli::Command;
use crate::config::{Backend, Config};

/// Build the configured backend and run `command` against it.
///
/// [`Backend::Memory`] starts from an empty store on every call, so it only
/// serves as a dry run: `save` reports the id it would assign, nothing persists.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the command fails,
/// or writing to `out` fails.
pub async fn run<W: Write>(
    config: &Config,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match config.storage.backend {
        Backend::Memory => {
            tracing::warn!("memory backend is a dry run; changes are discarded on exit");
            let service = DepartmentService::new(InMemoryDepartmentRepository::new());
            execute(&service, command, out).await
        }
        Backend::Sqlite => {
            let db = SqliteConfig {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await
            .with_context(|| format!("failed to open database {}", config.database_url()))?;
            let repo = SqliteDepartmentRepository::new(db.pool().clone());
            let service = DepartmentService::new(repo);
            execute(&service, command, out).await
        }
    }
}

/// Run a single command against `service`, writing JSON results to `out`.
///
/// # Errors
///
/// Returns the service error (including not-found on `get`) or an I/O error.
pub async fn execute<R, W>(
    service: &DepartmentService<R>,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: DepartmentRepository,
    W: Write,
{
    match command {
        Command::List => {
            let departments = service.get_all_departments().await?;
            write_json(out, &departments)?;
        }
        Command::Get { id } => {
            let department = service.get_department_by_id(id).await?;
            write_json(out, &department)?;
        }
        Command::Save { name, id } => {
            let saved = service.save_department(Department { id, name }).await?;
            tracing::info!(department_id = ?saved.id, "department saved");
            write_json(out, &saved)?;
        }
        Command::Delete { id } => {
            service.delete_department(id).await?;
            tracing::info!(%id, "department deleted");
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode output")?;
    writeln!(out)?;
    Ok(())
}
