//! Client-level session management helpers.
//!
//! # Invariants
//! - The session mutex is held across a login so concurrent callers do not
//!   open several sessions
//! - Session ids never leave this module except as the request header value

use crate::client::VsphereClient;
use crate::endpoints;
use crate::error::Result;

impl VsphereClient {
    /// Get the current session id, logging in if necessary.
    pub(crate) async fn session_id(&self) -> Result<String> {
        let mut manager = self.session_manager.lock().await;
        if let Some(id) = manager.session_id() {
            return Ok(id.to_string());
        }

        let id = endpoints::login(
            &self.http,
            &self.api_root,
            manager.username(),
            manager.password(),
            self.metrics.as_ref(),
        )
        .await?;
        manager.set_session(id.clone());
        Ok(id)
    }

    /// Drop the stored session and return the username it belonged to.
    pub(crate) async fn clear_session(&self) -> String {
        let mut manager = self.session_manager.lock().await;
        manager.clear_session();
        manager.username().to_string()
    }

    /// Open a session now instead of on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::AuthFailed`] on rejected credentials.
    pub async fn login(&self) -> Result<()> {
        self.clear_session().await;
        self.session_id().await.map(|_| ())
    }

    /// Terminate the session if one is open.
    pub async fn logout(&self) -> Result<()> {
        let mut manager = self.session_manager.lock().await;
        let Some(id) = manager.session_id().map(str::to_string) else {
            return Ok(());
        };
        manager.clear_session();
        endpoints::logout(&self.http, &self.api_root, &id, self.metrics.as_ref()).await
    }

    /// Whether a session id is currently held.
    pub async fn has_session(&self) -> bool {
        self.session_manager.lock().await.has_session()
    }
}
