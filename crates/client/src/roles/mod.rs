//! Role directory: bounded role operations over an [`AuthorizationManager`].
//!
//! Lookups fetch the full role catalog and filter it locally. Every remote
//! call is wrapped in `tokio::time::timeout`; expiry is reported as
//! [`ClientError::Timeout`] and never retried.
//!
//! # Submodules
//! - [`lookup`]: the single read entry point (`read_role`) and its record
//! - [`cache`]: optional TTL cache in front of the lookups

pub mod cache;
pub mod lookup;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::endpoints::{ADD_ROLE_PATH, REMOVE_ROLE_PATH, ROLE_LIST_PATH, UPDATE_ROLE_PATH};
use crate::error::{ClientError, Result};
use crate::manager::AuthorizationManager;
use crate::metrics::MetricsCollector;
use crate::models::Role;

pub use cache::CachedRoleDirectory;
pub use lookup::{RoleLookup, RoleQuery, RoleRecord, read_role};

/// Access layer for role definitions held by the remote authority.
#[derive(Debug, Clone)]
pub struct RoleDirectory<M> {
    manager: M,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl<M: AuthorizationManager> RoleDirectory<M> {
    /// Create a directory whose calls are each bounded by `timeout`.
    pub fn new(manager: M, timeout: Duration) -> Self {
        Self {
            manager,
            timeout,
            metrics: None,
        }
    }

    /// Set the metrics collector used to count expired calls.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Upper bound for a single remote call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `call` under the timeout. An expired call is dropped mid-flight,
    /// so the error sample is recorded here under the call's endpoint labels.
    async fn bounded<T>(
        &self,
        endpoint: &str,
        method: &str,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let err = ClientError::Timeout(self.timeout);
                warn!(endpoint, timeout = ?self.timeout, "Role call timed out");
                if let Some(m) = &self.metrics {
                    m.record_client_error(endpoint, method, &err);
                }
                Err(err)
            }
        }
    }

    /// The unfiltered role catalog in remote order.
    pub async fn list(&self) -> Result<Vec<Role>> {
        debug!("Listing roles");
        let roles: Vec<Role> = self
            .bounded(ROLE_LIST_PATH, "GET", self.manager.role_list())
            .await?
            .into_iter()
            .map(Role::from)
            .collect();
        debug!(count = roles.len(), "Listed roles");
        Ok(roles)
    }

    /// Find a role by id. `Ok(None)` when the list holds no such role.
    pub async fn lookup_by_id(&self, id: i32) -> Result<Option<Role>> {
        debug!(role_id = id, "Looking up role by id");
        let role = self
            .bounded(ROLE_LIST_PATH, "GET", self.manager.role_list())
            .await?
            .into_iter()
            .find(|r| r.role_id == id)
            .map(Role::from);
        debug!(role_id = id, found = role.is_some(), "Role lookup by id finished");
        Ok(role)
    }

    /// Find a role by exact, case-sensitive name.
    pub async fn lookup_by_name(&self, name: &str) -> Result<Option<Role>> {
        debug!(role_name = name, "Looking up role by name");
        let role = self
            .bounded(ROLE_LIST_PATH, "GET", self.manager.role_list())
            .await?
            .into_iter()
            .find(|r| r.name == name)
            .map(Role::from);
        debug!(role_name = name, found = role.is_some(), "Role lookup by name finished");
        Ok(role)
    }

    /// Create a role and return its remote-assigned id. Never retried.
    pub async fn create(&self, name: &str, privileges: &[String]) -> Result<i32> {
        debug!(role_name = name, privileges = privileges.len(), "Creating role");
        let id = self
            .bounded(ADD_ROLE_PATH, "POST", self.manager.add_role(name, privileges))
            .await?;
        debug!(role_id = id, role_name = name, "Created role");
        Ok(id)
    }

    /// Replace name and privileges of a role. The new set is not merged
    /// with the old one.
    pub async fn update(&self, id: i32, name: &str, privileges: &[String]) -> Result<()> {
        debug!(role_id = id, role_name = name, "Updating role");
        self.bounded(
            UPDATE_ROLE_PATH,
            "POST",
            self.manager.update_role(id, name, privileges),
        )
        .await?;
        debug!(role_id = id, "Updated role");
        Ok(())
    }

    /// Remove a role. Fails while permissions still reference it.
    pub async fn remove(&self, id: i32) -> Result<()> {
        debug!(role_id = id, "Removing role");
        self.bounded(REMOVE_ROLE_PATH, "POST", self.manager.remove_role(id, true))
            .await?;
        debug!(role_id = id, "Removed role");
        Ok(())
    }
}

#[async_trait]
impl<M: AuthorizationManager> RoleLookup for RoleDirectory<M> {
    async fn lookup_by_id(&self, id: i32) -> Result<Option<Role>> {
        RoleDirectory::lookup_by_id(self, id).await
    }

    async fn lookup_by_name(&self, name: &str) -> Result<Option<Role>> {
        RoleDirectory::lookup_by_name(self, name).await
    }
}
