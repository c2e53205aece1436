//! vSphere VI/JSON API client.
//!
//! This module provides [`VsphereClient`], the production implementation of
//! [`crate::manager::AuthorizationManager`]. It logs in lazily and sends the
//! session id on every call.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login, logout and session id handling (private module)
//! - `authorization`: The `AuthorizationManager` implementation
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Bounding calls by the API timeout (done by [`crate::roles::RoleDirectory`])
//!
//! # Invariants
//! - A 401 response clears the stored session and surfaces as
//!   [`crate::error::ClientError::SessionExpired`]; the call is not retried
//! - The `session_call!` macro centralizes this pattern across all API methods

pub mod builder;
mod authorization;
mod session;

use std::time::Duration;

use tokio::sync::Mutex;

use crate::auth::SessionManager;
use crate::metrics::MetricsCollector;

/// Wrap an API call with the current session id.
///
/// Logs in when no session is held. A 401 from the call clears the session
/// so the next call logs in again, and is reported as `SessionExpired`.
///
/// ```ignore
/// session_call!(self, __session, endpoints::role_list(&self.http, &self.api_root, &__session, m).await)
/// ```
#[macro_export]
macro_rules! session_call {
    ($self:expr, $session:ident, $call:expr) => {{
        let $session = $self.session_id().await?;
        match $call {
            Err($crate::error::ClientError::ApiError { status: 401, .. }) => {
                ::tracing::debug!("Session rejected (status 401), clearing stored session");
                let username = $self.clear_session().await;
                Err($crate::error::ClientError::SessionExpired { username })
            }
            other => other,
        }
    }};
}

/// vSphere VI/JSON API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use vsphere_client::VsphereClient;
///
/// let client = VsphereClient::builder()
///     .base_url("https://vcenter.example.com".to_string())
///     .credentials("administrator@vsphere.local".to_string(), password)
///     .build()?;
/// ```
#[derive(Debug)]
pub struct VsphereClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_root: String,
    pub(crate) session_manager: Mutex<SessionManager>,
    pub(crate) api_timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl VsphereClient {
    /// Create a new client builder.
    pub fn builder() -> builder::VsphereClientBuilder {
        builder::VsphereClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root of the VI/JSON API, `{base_url}/sdk/vim25/{release}`.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Upper bound for a single remote call.
    pub fn api_timeout(&self) -> Duration {
        self.api_timeout
    }
}
