//! Role command implementation.
//!
//! Responsibilities:
//! - Read a single role by name or id through the lookup shim
//! - List, create, update and delete roles
//! - Format output via shared formatters
//!
//! Does NOT handle:
//! - Direct API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Delete operations require confirmation unless --force is used
//! - Unknown privileges produce a warning but are still sent to the server

use anyhow::Result;
use clap::Subcommand;
use tracing::{info, warn};
use vsphere_client::{AuthorizationManager, CachedRoleDirectory, RoleQuery, privileges, read_role};

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter};

#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Read one role by name or id
    Get {
        /// Role name
        #[arg(long, conflicts_with = "role_id", required_unless_present = "role_id")]
        name: Option<String>,
        /// Role id (system roles have negative ids)
        #[arg(long, allow_negative_numbers = true)]
        role_id: Option<i32>,
    },
    /// List all roles, system roles included
    List,
    /// Create a new role
    Create {
        /// Role name
        name: String,
        /// Privileges to grant (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        privileges: Vec<String>,
    },
    /// Replace the name and privileges of a role
    Update {
        /// Role id
        #[arg(allow_negative_numbers = true)]
        id: i32,
        /// New role name
        name: String,
        /// Privileges to grant (comma-separated, replaces existing)
        #[arg(short, long, value_delimiter = ',')]
        privileges: Vec<String>,
    },
    /// Delete a role; refused while permissions still use it
    Delete {
        /// Role id
        #[arg(allow_negative_numbers = true)]
        id: i32,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run<M: AuthorizationManager>(
    directory: &CachedRoleDirectory<M>,
    command: RoleCommand,
    output_format: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    match command {
        RoleCommand::Get { name, role_id } => {
            run_get(directory, RoleQuery { name, role_id }, format, cancel).await
        }
        RoleCommand::List => run_list(directory, format, cancel).await,
        RoleCommand::Create { name, privileges } => {
            run_create(directory, &name, &privileges, format, cancel).await
        }
        RoleCommand::Update {
            id,
            name,
            privileges,
        } => run_update(directory, id, &name, &privileges, cancel).await,
        RoleCommand::Delete { id, force } => run_delete(directory, id, force, cancel).await,
    }
}

async fn run_get<M: AuthorizationManager>(
    directory: &CachedRoleDirectory<M>,
    query: RoleQuery,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Reading role");

    let record = cancellable!(read_role(directory, &query), cancel)?;

    let output = get_formatter(format).format_role_record(&record)?;
    print!("{}", output);
    Ok(())
}

async fn run_list<M: AuthorizationManager>(
    directory: &CachedRoleDirectory<M>,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing roles");

    let roles = cancellable!(directory.list(), cancel)?;

    let output = get_formatter(format).format_roles(&roles)?;
    print!("{}", output);
    Ok(())
}

async fn run_create<M: AuthorizationManager>(
    directory: &CachedRoleDirectory<M>,
    name: &str,
    privileges: &[String],
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Creating role: {}", name);
    warn_unknown_privileges(privileges);

    let id = cancellable!(directory.create(name, privileges), cancel)?;

    let output = get_formatter(format).format_created(id, name)?;
    print!("{}", output);
    Ok(())
}

async fn run_update<M: AuthorizationManager>(
    directory: &CachedRoleDirectory<M>,
    id: i32,
    name: &str,
    privileges: &[String],
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Updating role: {}", id);
    warn_unknown_privileges(privileges);

    cancellable!(directory.update(id, name, privileges), cancel)?;

    println!("Role {} updated successfully.", id);
    Ok(())
}

async fn run_delete<M: AuthorizationManager>(
    directory: &CachedRoleDirectory<M>,
    id: i32,
    force: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if !force && !crate::interactive::confirm_delete(&id.to_string(), "role")? {
        return Ok(());
    }

    info!("Deleting role: {}", id);

    cancellable!(directory.remove(id), cancel)?;

    println!("Role {} deleted successfully.", id);
    Ok(())
}

/// Print a warning for privileges missing from the built-in catalog.
///
/// The server remains the authority on which privileges exist.
fn warn_unknown_privileges(requested: &[String]) {
    let unknown = privileges::unknown(requested);
    if unknown.is_empty() {
        return;
    }
    warn!(unknown = ?unknown, "Privileges not in the built-in catalog");
    eprintln!(
        "Warning: unknown privilege(s): {}. Sending anyway.",
        unknown.join(", ")
    );
}
