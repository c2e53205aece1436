//! The remote authorization authority seam.
//!
//! [`AuthorizationManager`] is the narrow surface the role directory needs
//! from vSphere's `AuthorizationManager` managed object. The HTTP client
//! implements it against the VI/JSON API; tests use the in-memory fake in
//! [`crate::testing`] or the generated `MockAuthorizationManager`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::AuthorizationRole;

/// Role operations of the remote authorization authority.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationManager: Send + Sync {
    /// The full role catalog, system roles included.
    async fn role_list(&self) -> Result<Vec<AuthorizationRole>>;

    /// Create a role and return the id assigned by the authority.
    async fn add_role(&self, name: &str, privileges: &[String]) -> Result<i32>;

    /// Replace name and privilege set of an existing role.
    async fn update_role(&self, role_id: i32, new_name: &str, privileges: &[String])
    -> Result<()>;

    /// Delete a role. With `fail_if_used` the authority refuses while
    /// permissions still reference the role.
    async fn remove_role(&self, role_id: i32, fail_if_used: bool) -> Result<()>;
}

#[async_trait]
impl<T: AuthorizationManager + ?Sized> AuthorizationManager for Arc<T> {
    async fn role_list(&self) -> Result<Vec<AuthorizationRole>> {
        (**self).role_list().await
    }

    async fn add_role(&self, name: &str, privileges: &[String]) -> Result<i32> {
        (**self).add_role(name, privileges).await
    }

    async fn update_role(
        &self,
        role_id: i32,
        new_name: &str,
        privileges: &[String],
    ) -> Result<()> {
        (**self).update_role(role_id, new_name, privileges).await
    }

    async fn remove_role(&self, role_id: i32, fail_if_used: bool) -> Result<()> {
        (**self).remove_role(role_id, fail_if_used).await
    }
}
