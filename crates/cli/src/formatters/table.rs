//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format role listings as aligned columns.
//! - Format single roles and catalog listings for terminal reading.
//!
//! Does NOT handle:
//! - Machine-readable output (see `json`).

use anyhow::Result;
use vsphere_client::{Role, RoleRecord};

use crate::formatters::Formatter;

/// Table formatter.
pub struct TableFormatter;

const PRIVILEGES_WIDTH: usize = 50;

/// Truncate a field for display, marking the cut with `...`.
fn truncate_field(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

impl Formatter for TableFormatter {
    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        let mut output = String::new();

        if roles.is_empty() {
            output.push_str("No roles found.\n");
            return Ok(output);
        }

        let name_width = roles
            .iter()
            .map(|role| role.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("NAME".len());

        output.push_str(&format!(
            "{:>6} {:<name_width$} {:<6} {}\n",
            "ID", "NAME", "SYSTEM", "PRIVILEGES"
        ));
        output.push_str(&format!(
            "{:>6} {:<name_width$} {:<6} {}\n",
            "==", "====", "======", "=========="
        ));

        for role in roles {
            let privileges = join_or_dash(&role.privileges);
            output.push_str(&format!(
                "{:>6} {:<name_width$} {:<6} {}\n",
                role.id,
                role.name,
                if role.system { "yes" } else { "no" },
                truncate_field(&privileges, PRIVILEGES_WIDTH)
            ));
        }

        Ok(output)
    }

    fn format_role_record(&self, record: &RoleRecord) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", record.role_id));
        output.push_str(&format!("Name:        {}\n", record.name));
        if record.permissions.is_empty() {
            output.push_str("Permissions: -\n");
        } else {
            output.push_str(&format!("Permissions: ({})\n", record.permissions.len()));
            for permission in &record.permissions {
                output.push_str(&format!("  {}\n", permission));
            }
        }

        Ok(output)
    }

    fn format_created(&self, role_id: i32, name: &str) -> Result<String> {
        Ok(format!("Role '{}' created with id {}.\n", name, role_id))
    }

    fn format_privileges(&self, privileges: &[&str]) -> Result<String> {
        let mut output = String::new();

        if privileges.is_empty() {
            output.push_str("No privileges found.\n");
            return Ok(output);
        }

        output.push_str("PRIVILEGE\n");
        output.push_str("=========\n");
        for privilege in privileges {
            output.push_str(privilege);
            output.push('\n');
        }

        Ok(output)
    }

    fn format_groups(&self, groups: &[&str]) -> Result<String> {
        let mut output = String::new();

        if groups.is_empty() {
            output.push_str("No privilege groups found.\n");
            return Ok(output);
        }

        output.push_str("GROUP\n");
        output.push_str("=====\n");
        for group in groups {
            output.push_str(group);
            output.push('\n');
        }

        Ok(output)
    }
}
