//! [`AuthorizationManager`] over the VI/JSON API.

use async_trait::async_trait;

use crate::client::VsphereClient;
use crate::endpoints;
use crate::error::Result;
use crate::manager::AuthorizationManager;
use crate::models::AuthorizationRole;

#[async_trait]
impl AuthorizationManager for VsphereClient {
    async fn role_list(&self) -> Result<Vec<AuthorizationRole>> {
        crate::session_call!(
            self,
            __session,
            endpoints::role_list(&self.http, &self.api_root, &__session, self.metrics.as_ref())
                .await
        )
    }

    async fn add_role(&self, name: &str, privileges: &[String]) -> Result<i32> {
        crate::session_call!(
            self,
            __session,
            endpoints::add_authorization_role(
                &self.http,
                &self.api_root,
                &__session,
                name,
                privileges,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    async fn update_role(
        &self,
        role_id: i32,
        new_name: &str,
        privileges: &[String],
    ) -> Result<()> {
        crate::session_call!(
            self,
            __session,
            endpoints::update_authorization_role(
                &self.http,
                &self.api_root,
                &__session,
                role_id,
                new_name,
                privileges,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    async fn remove_role(&self, role_id: i32, fail_if_used: bool) -> Result<()> {
        crate::session_call!(
            self,
            __session,
            endpoints::remove_authorization_role(
                &self.http,
                &self.api_root,
                &__session,
                role_id,
                fail_if_used,
                self.metrics.as_ref(),
            )
            .await
        )
    }
}
