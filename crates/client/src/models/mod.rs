//! Data models for vSphere VI/JSON requests and responses.
//!
//! Types are organized by managed object in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod common;
pub mod roles;

pub use auth::LoginRequest;
pub use common::{LocalizableMessage, MethodFault};
pub use roles::{
    AddRoleRequest, AuthorizationRole, Description, RemoveRoleRequest, Role, RoleKey,
    UpdateRoleRequest,
};
