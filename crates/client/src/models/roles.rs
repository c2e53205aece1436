//! Role models for the vSphere AuthorizationManager API.
//!
//! This module contains the wire shape of `AuthorizationRole`, the flat
//! [`Role`] record handed to callers, and the request bodies of the role
//! mutation methods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Localized description attached to a role.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Description {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub summary: String,
}

/// `AuthorizationRole` as returned by the `roleList` property.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRole {
    /// Remote-assigned id; negative for built-in roles
    pub role_id: i32,
    /// Built-in role that cannot be modified or removed
    #[serde(default)]
    pub system: bool,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Description>,
    /// Privilege ids granted by this role
    #[serde(default)]
    pub privilege: Vec<String>,
}

/// A role definition: id, name and ordered privilege list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    /// Privileges in the order the remote authority returned them
    pub privileges: Vec<String>,
    /// Built-in role flag (informational)
    #[serde(default)]
    pub system: bool,
    /// Human-readable label (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<AuthorizationRole> for Role {
    fn from(role: AuthorizationRole) -> Self {
        Self {
            id: role.role_id,
            name: role.name,
            privileges: role.privilege,
            system: role.system,
            label: role
                .info
                .map(|info| info.label)
                .filter(|label| !label.is_empty()),
        }
    }
}

/// The key a role was searched by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleKey {
    Id(i32),
    Name(String),
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "ID {id}"),
            Self::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

/// Body of `AddAuthorizationRole`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRoleRequest<'a> {
    pub name: &'a str,
    pub priv_ids: &'a [String],
}

/// Body of `UpdateAuthorizationRole`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest<'a> {
    pub role_id: i32,
    pub new_name: &'a str,
    pub priv_ids: &'a [String],
}

/// Body of `RemoveAuthorizationRole`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRoleRequest {
    pub role_id: i32,
    pub fail_if_used: bool,
}
