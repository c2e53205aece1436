//! vSphere role management client.
//!
//! This crate manages authorization role definitions (name plus privilege
//! list) held by a vCenter `AuthorizationManager`. It provides:
//!
//! - [`privileges`]: the compiled-in privilege catalog
//! - [`AuthorizationManager`]: the seam to the remote authority, implemented
//!   over the VI/JSON API by [`VsphereClient`]
//! - [`RoleDirectory`]: bounded list-and-filter lookups and role mutations
//! - [`read_role`]: the single read entry point taking a name or an id
//! - [`CachedRoleDirectory`]: an optional TTL cache in front of lookups

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod manager;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod privileges;
pub mod roles;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::SessionManager;
pub use client::VsphereClient;
pub use client::builder::VsphereClientBuilder;
pub use error::{ClientError, Result};
pub use manager::AuthorizationManager;
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{AuthorizationRole, Role, RoleKey};
pub use roles::{CachedRoleDirectory, RoleDirectory, RoleLookup, RoleQuery, RoleRecord, read_role};
