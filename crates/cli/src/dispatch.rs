//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Own the vSphere session for the lifetime of one command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - A session opened for a command is logged out afterwards, whether the
//!   command succeeded or not. Logout failures only produce a warning.

use anyhow::{Context, Result};
use tracing::warn;
use vsphere_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
///
/// `config` is `None` only for commands that work offline.
pub(crate) async fn run_command(
    cli: Cli,
    config: Option<Config>,
    cancel_token: &CancellationToken,
) -> Result<()> {
    match cli.command {
        Commands::Privileges(args) => commands::privileges::run(args, &cli.output),
        Commands::Role(command) => {
            let config = config.context("vSphere connection configuration is required")?;
            let client = commands::build_client_from_config(&config)?;
            let directory = commands::build_directory(client.clone(), &config);

            let result = commands::roles::run(&directory, command, &cli.output, cancel_token).await;

            if let Err(e) = client.logout().await {
                warn!(error = %e, "Failed to log out of vSphere session");
            }

            result
        }
    }
}
