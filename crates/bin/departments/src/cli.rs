//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use department_registry_domain::id::DepartmentId;

#[derive(Debug, Parser)]
#[command(name = "departments")]
#[command(about = "Manage department records")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "departments.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every department as a JSON array
    List,
    /// Print one department; fails when the id is unknown
    Get { id: DepartmentId },
    /// Create a department, or update it when --id is given
    Save {
        #[arg(long)]
        name: String,
        #[arg(long)]
        id: Option<DepartmentId>,
    },
    /// Delete a department; unknown ids are ignored
    Delete { id: DepartmentId },
}
