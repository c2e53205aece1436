//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `VSPHERE_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the connection configuration (see `main()`).

use clap::{Parser, Subcommand};

use crate::commands::privileges::PrivilegesArgs;
use crate::commands::roles::RoleCommand;

#[derive(Parser)]
#[command(name = "vsphere-roles")]
#[command(about = "Look up and manage vSphere authorization roles", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vsphere-roles get --name ReadOnly\n  vsphere-roles get --role-id -1 -o json\n  vsphere-roles create auditor -p System.Read,System.View\n  vsphere-roles update 500 auditor -p System.Read\n  vsphere-roles delete 500 --force\n  vsphere-roles privileges --group VirtualMachine.Config\n"
)]
pub struct Cli {
    /// vCenter host name or URL (e.g., vcenter.example.com)
    #[arg(short, long, global = true, env = "VSPHERE_SERVER")]
    pub server: Option<String>,

    /// Username for the vSphere session
    #[arg(short, long, global = true, env = "VSPHERE_USER")]
    pub user: Option<String>,

    /// Password for the vSphere session
    #[arg(long, global = true, env = "VSPHERE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "VSPHERE_ALLOW_UNVERIFIED_SSL")]
    pub allow_unverified_ssl: bool,

    /// Per-call timeout in seconds
    #[arg(long, global = true, env = "VSPHERE_API_TIMEOUT", value_name = "SECS")]
    pub api_timeout: Option<u64>,

    /// VI/JSON API release (e.g., 8.0.1.0)
    #[arg(long, global = true, env = "VSPHERE_API_RELEASE")]
    pub api_release: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Role operations against the vCenter server
    #[command(flatten)]
    Role(RoleCommand),

    /// Browse the built-in privilege catalog (no server needed)
    Privileges(PrivilegesArgs),
}

impl Commands {
    /// Whether the command talks to a vCenter server.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Privileges(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_by_negative_role_id() {
        let cli = Cli::try_parse_from(["vsphere-roles", "get", "--role-id", "-1"]).unwrap();
        match cli.command {
            Commands::Role(RoleCommand::Get { name, role_id }) => {
                assert_eq!(name, None);
                assert_eq!(role_id, Some(-1));
            }
            _ => panic!("expected get command"),
        }
    }

    #[test]
    fn test_get_rejects_both_keys() {
        let result =
            Cli::try_parse_from(["vsphere-roles", "get", "--name", "Admin", "--role-id", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_requires_a_key() {
        let result = Cli::try_parse_from(["vsphere-roles", "get"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_splits_privileges() {
        let cli = Cli::try_parse_from([
            "vsphere-roles",
            "create",
            "auditor",
            "-p",
            "System.Read,System.View",
        ])
        .unwrap();
        match cli.command {
            Commands::Role(RoleCommand::Create { name, privileges }) => {
                assert_eq!(name, "auditor");
                assert_eq!(privileges, vec!["System.Read", "System.View"]);
            }
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn test_privileges_does_not_need_connection() {
        let cli = Cli::try_parse_from(["vsphere-roles", "privileges", "--groups"]).unwrap();
        assert!(!cli.command.needs_connection());

        let cli = Cli::try_parse_from(["vsphere-roles", "list"]).unwrap();
        assert!(cli.command.needs_connection());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vsphere-roles",
            "list",
            "--server",
            "vcenter.example.com",
            "-o",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.server.as_deref(), Some("vcenter.example.com"));
        assert_eq!(cli.output, "json");
    }
}
