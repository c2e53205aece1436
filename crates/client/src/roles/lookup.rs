//! Consumer-facing role read.
//!
//! [`read_role`] accepts either a name or an id, never both, and projects
//! the found role into a flat [`RoleRecord`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{Role, RoleKey};

/// Anything that can find a role by id or name.
///
/// Implemented by [`super::RoleDirectory`] and [`super::CachedRoleDirectory`].
#[async_trait]
pub trait RoleLookup: Send + Sync {
    async fn lookup_by_id(&self, id: i32) -> Result<Option<Role>>;
    async fn lookup_by_name(&self, name: &str) -> Result<Option<Role>>;
}

/// Read request: exactly one of `name` or `role_id`.
///
/// An empty name and a zero id both count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleQuery {
    pub name: Option<String>,
    pub role_id: Option<i32>,
}

impl RoleQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            role_id: None,
        }
    }

    pub fn by_id(role_id: i32) -> Self {
        Self {
            name: None,
            role_id: Some(role_id),
        }
    }

    /// Resolve to the single key to search by.
    pub fn key(&self) -> Result<RoleKey> {
        let name = self.name.as_deref().filter(|n| !n.is_empty());
        let role_id = self.role_id.filter(|id| *id != 0);

        match (name, role_id) {
            (Some(_), Some(_)) => Err(ClientError::InvalidRequest(
                "name and role_id are mutually exclusive".to_string(),
            )),
            (None, None) => Err(ClientError::InvalidRequest(
                "either name or role_id must be specified".to_string(),
            )),
            (Some(name), None) => Ok(RoleKey::Name(name.to_string())),
            (None, Some(id)) => Ok(RoleKey::Id(id)),
        }
    }
}

/// Flat projection of a found role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Decimal rendering of the role id, the caller's durable handle
    pub resource_id: String,
    pub role_id: i32,
    pub name: String,
    /// Privileges in remote order
    pub permissions: Vec<String>,
}

impl From<Role> for RoleRecord {
    fn from(role: Role) -> Self {
        Self {
            resource_id: role.id.to_string(),
            role_id: role.id,
            name: role.name,
            permissions: role.privileges,
        }
    }
}

/// Resolve a [`RoleQuery`] to a [`RoleRecord`].
///
/// # Errors
///
/// - [`ClientError::InvalidRequest`] for neither or both keys; nothing is sent
/// - [`ClientError::RoleNotFound`] when the lookup succeeds without a match
/// - Transport errors propagate unchanged
pub async fn read_role<L: RoleLookup + ?Sized>(lookup: &L, query: &RoleQuery) -> Result<RoleRecord> {
    let key = query.key()?;
    debug!(key = %key, "Reading role");

    let found = match &key {
        RoleKey::Id(id) => lookup.lookup_by_id(*id).await?,
        RoleKey::Name(name) => lookup.lookup_by_name(name).await?,
    };

    found
        .map(RoleRecord::from)
        .ok_or(ClientError::RoleNotFound(key))
}
