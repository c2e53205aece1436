//! CLI command implementations.

pub mod privileges;
pub mod roles;

use std::sync::Arc;

use anyhow::{Context, Result};
use vsphere_client::{CachedRoleDirectory, MetricsCollector, RoleDirectory, VsphereClient};
use vsphere_config::Config;

/// Build a vSphere client from configuration.
pub fn build_client_from_config(config: &Config) -> Result<Arc<VsphereClient>> {
    let client = VsphereClient::builder()
        .from_config(config)
        .metrics(MetricsCollector::new())
        .build()
        .context("Failed to build vSphere client")?;
    Ok(Arc::new(client))
}

/// Wrap a client in the role directory used by all role commands.
pub fn build_directory(
    client: Arc<VsphereClient>,
    config: &Config,
) -> CachedRoleDirectory<Arc<VsphereClient>> {
    let directory = RoleDirectory::new(client, config.connection.api_timeout)
        .with_metrics(MetricsCollector::new());
    CachedRoleDirectory::from_config(directory, &config.role_cache)
        .with_metrics(MetricsCollector::new())
}
