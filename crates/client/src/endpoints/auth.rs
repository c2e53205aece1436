//! SessionManager endpoints.

use reqwest::Client;
use tracing::debug;
use vsphere_config::constants::SESSION_HEADER;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::LoginRequest;

const LOGIN_PATH: &str = "/SessionManager/SessionManager/Login";
const LOGOUT_PATH: &str = "/SessionManager/SessionManager/Logout";

/// Log in with username and password and return the session id.
///
/// An `InvalidLogin` fault becomes [`ClientError::AuthFailed`].
pub async fn login(
    client: &Client,
    api_root: &str,
    username: &str,
    password: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    debug!("Logging in to vSphere as {}", username);

    let url = format!("{}{}", api_root, LOGIN_PATH);
    let builder = client.post(&url).json(&LoginRequest {
        user_name: username,
        password,
    });

    let response = match send_request(builder, LOGIN_PATH, "POST", metrics).await {
        Ok(response) => response,
        Err(e) if e.fault() == Some("InvalidLogin") || e.is_auth_error() => {
            return Err(ClientError::AuthFailed(format!(
                "cannot complete login for {username}: {e}"
            )));
        }
        Err(e) => return Err(e),
    };

    response
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!("Missing {SESSION_HEADER} header in login response"))
        })
}

/// Terminate the session.
pub async fn logout(
    client: &Client,
    api_root: &str,
    session_id: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    debug!("Logging out of vSphere");

    let url = format!("{}{}", api_root, LOGOUT_PATH);
    let builder = client.post(&url).header(SESSION_HEADER, session_id);
    send_request(builder, LOGOUT_PATH, "POST", metrics).await?;
    Ok(())
}
