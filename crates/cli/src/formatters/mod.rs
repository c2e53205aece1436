//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output formats.
//! - Implement the `Formatter` trait for roles, role records and the privilege catalog.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `No roles found.` |

use anyhow::Result;
use vsphere_client::{Role, RoleRecord};

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for role command output.
pub trait Formatter {
    /// Format a role listing.
    fn format_roles(&self, roles: &[Role]) -> Result<String>;

    /// Format the result of a single-role read.
    fn format_role_record(&self, record: &RoleRecord) -> Result<String>;

    /// Format the id assigned to a newly created role.
    fn format_created(&self, role_id: i32, name: &str) -> Result<String>;

    /// Format privilege identifiers.
    fn format_privileges(&self, privileges: &[&str]) -> Result<String>;

    /// Format privilege functional areas.
    fn format_groups(&self, groups: &[&str]) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
