//! TTL cache in front of role lookups.
//!
//! # Invariants
//! - Only found roles are cached; absence always goes back to the remote
//! - A role is cached under both its id and its name
//! - `update` and `remove` drop every entry holding the affected id
//! - A lookup that overlapped an `update` or `remove` leaves nothing cached;
//!   its role list may predate the change

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use tracing::{debug, trace};
use vsphere_config::RoleCacheConfig;

use crate::error::Result;
use crate::manager::AuthorizationManager;
use crate::metrics::MetricsCollector;
use crate::models::{Role, RoleKey};
use crate::roles::RoleDirectory;
use crate::roles::lookup::RoleLookup;

/// A [`RoleDirectory`] with cached lookups.
#[derive(Debug, Clone)]
pub struct CachedRoleDirectory<M> {
    directory: RoleDirectory<M>,
    inner: MokaCache<RoleKey, Role>,
    metrics: Option<MetricsCollector>,
    /// Bumped on every invalidation.
    epoch: Arc<AtomicU64>,
}

impl<M: AuthorizationManager> CachedRoleDirectory<M> {
    /// Wrap a directory with a cache of `capacity` entries living `ttl` each.
    pub fn new(directory: RoleDirectory<M>, ttl: Duration, capacity: u64) -> Self {
        let inner = MokaCache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .support_invalidation_closures()
            .build();

        Self {
            directory,
            inner,
            metrics: None,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Build from the `role_cache` section of the configuration.
    pub fn from_config(directory: RoleDirectory<M>, config: &RoleCacheConfig) -> Self {
        Self::new(directory, config.ttl, config.capacity)
    }

    /// Set the metrics collector.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    async fn cached(&self, key: &RoleKey) -> Option<Role> {
        let hit = self.inner.get(key).await;
        match (&hit, &self.metrics) {
            (Some(_), Some(m)) => m.record_cache_hit(),
            (None, Some(m)) => m.record_cache_miss(),
            _ => {}
        }
        trace!(key = %key, hit = hit.is_some(), "Role cache lookup");
        hit
    }

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Cache `role` unless an invalidation ran since `seen` was read.
    async fn remember(&self, role: &Role, seen: u64) {
        if self.epoch() != seen {
            trace!(role_id = role.id, "Role changed during lookup, not caching");
            return;
        }
        let id_key = RoleKey::Id(role.id);
        let name_key = RoleKey::Name(role.name.clone());
        self.inner.insert(id_key.clone(), role.clone()).await;
        self.inner.insert(name_key.clone(), role.clone()).await;

        // An invalidation that raced the inserts may have missed them.
        if self.epoch() != seen {
            self.inner.invalidate(&id_key).await;
            self.inner.invalidate(&name_key).await;
        }
    }

    fn forget(&self, id: i32) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        // Name entries are found by value since the old name is not known here.
        if let Err(e) = self.inner.invalidate_entries_if(move |_, role| role.id == id) {
            debug!(role_id = id, error = %e, "Could not invalidate cached role");
            self.inner.invalidate_all();
        }
    }

    /// Find a role by id, consulting the cache first.
    pub async fn lookup_by_id(&self, id: i32) -> Result<Option<Role>> {
        if let Some(role) = self.cached(&RoleKey::Id(id)).await {
            return Ok(Some(role));
        }
        let seen = self.epoch();
        let found = self.directory.lookup_by_id(id).await?;
        if let Some(role) = &found {
            self.remember(role, seen).await;
        }
        Ok(found)
    }

    /// Find a role by name, consulting the cache first.
    pub async fn lookup_by_name(&self, name: &str) -> Result<Option<Role>> {
        if let Some(role) = self.cached(&RoleKey::Name(name.to_string())).await {
            return Ok(Some(role));
        }
        let seen = self.epoch();
        let found = self.directory.lookup_by_name(name).await?;
        if let Some(role) = &found {
            self.remember(role, seen).await;
        }
        Ok(found)
    }

    /// The unfiltered catalog; always fetched, never cached.
    pub async fn list(&self) -> Result<Vec<Role>> {
        self.directory.list().await
    }

    /// Create a role; forwarded unchanged.
    pub async fn create(&self, name: &str, privileges: &[String]) -> Result<i32> {
        self.directory.create(name, privileges).await
    }

    /// Update a role and drop its cached entries.
    pub async fn update(&self, id: i32, name: &str, privileges: &[String]) -> Result<()> {
        let result = self.directory.update(id, name, privileges).await;
        self.forget(id);
        result
    }

    /// Remove a role and drop its cached entries.
    pub async fn remove(&self, id: i32) -> Result<()> {
        let result = self.directory.remove(id).await;
        self.forget(id);
        result
    }

    /// Clear the cache.
    pub fn invalidate_all(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.invalidate_all();
        debug!("Invalidated all cached roles");
    }
}

#[async_trait]
impl<M: AuthorizationManager> RoleLookup for CachedRoleDirectory<M> {
    async fn lookup_by_id(&self, id: i32) -> Result<Option<Role>> {
        CachedRoleDirectory::lookup_by_id(self, id).await
    }

    async fn lookup_by_name(&self, name: &str) -> Result<Option<Role>> {
        CachedRoleDirectory::lookup_by_name(self, name).await
    }
}
