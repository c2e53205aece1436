//! vsphere-roles - Command-line interface for vSphere authorization roles.
//!
//! Responsibilities:
//! - Parse command-line arguments and `VSPHERE_*` environment variables.
//! - Build the connection configuration and run role commands through the client library.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - VI/JSON API details (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
#[macro_use]
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod interactive;

use std::time::Duration;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vsphere_config::{Config, ConfigLoader};

/// Layer CLI flags over environment variables and defaults.
fn build_config(cli: &Cli) -> Result<Config, vsphere_config::ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref server) = cli.server {
        loader = loader.with_server(server.clone());
    }
    if let Some(ref user) = cli.user {
        loader = loader.with_username(user.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if cli.allow_unverified_ssl {
        loader = loader.with_allow_unverified_ssl(true);
    }
    if let Some(secs) = cli.api_timeout {
        loader = loader.with_api_timeout(Duration::from_secs(secs));
    }
    if let Some(ref release) = cli.api_release {
        loader = loader.with_api_release(release.clone());
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Initialize metrics exporter if --metrics-bind is provided
    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match vsphere_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = if cli.command.needs_connection() {
        match build_config(&cli) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Failed to build configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
