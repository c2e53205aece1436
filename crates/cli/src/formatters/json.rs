//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format roles, role records and the privilege catalog as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use serde::Serialize;
use vsphere_client::{Role, RoleRecord};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct Created<'a> {
    role_id: i32,
    name: &'a str,
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

impl Formatter for JsonFormatter {
    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        pretty(roles)
    }

    fn format_role_record(&self, record: &RoleRecord) -> Result<String> {
        pretty(record)
    }

    fn format_created(&self, role_id: i32, name: &str) -> Result<String> {
        pretty(&Created { role_id, name })
    }

    fn format_privileges(&self, privileges: &[&str]) -> Result<String> {
        pretty(privileges)
    }

    fn format_groups(&self, groups: &[&str]) -> Result<String> {
        pretty(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roles_is_valid_json() {
        let output = JsonFormatter.format_roles(&[]).unwrap();
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_role_record_fields() {
        let record = RoleRecord {
            resource_id: "500".to_string(),
            role_id: 500,
            name: "auditor".to_string(),
            permissions: vec!["System.Read".to_string(), "System.View".to_string()],
        };
        let output = JsonFormatter.format_role_record(&record).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["resource_id"], "500");
        assert_eq!(parsed["role_id"], 500);
        assert_eq!(parsed["name"], "auditor");
        assert_eq!(
            parsed["permissions"],
            serde_json::json!(["System.Read", "System.View"])
        );
    }

    #[test]
    fn test_created_output() {
        let output = JsonFormatter.format_created(500, "auditor").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, serde_json::json!({"role_id": 500, "name": "auditor"}));
    }

    #[test]
    fn test_role_label_omitted_when_absent() {
        let roles = super::super::tests::sample_roles();
        let output = JsonFormatter.format_roles(&roles).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["label"], "Administrator");
        assert!(parsed[1].get("label").is_none());
    }
}
