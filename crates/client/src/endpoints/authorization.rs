//! AuthorizationManager endpoints.

use reqwest::Client;
use vsphere_config::constants::SESSION_HEADER;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{AddRoleRequest, AuthorizationRole, RemoveRoleRequest, UpdateRoleRequest};

pub(crate) const ROLE_LIST_PATH: &str = "/AuthorizationManager/AuthorizationManager/roleList";
pub(crate) const ADD_ROLE_PATH: &str =
    "/AuthorizationManager/AuthorizationManager/AddAuthorizationRole";
pub(crate) const UPDATE_ROLE_PATH: &str =
    "/AuthorizationManager/AuthorizationManager/UpdateAuthorizationRole";
pub(crate) const REMOVE_ROLE_PATH: &str =
    "/AuthorizationManager/AuthorizationManager/RemoveAuthorizationRole";

/// Read the `roleList` property.
pub async fn role_list(
    client: &Client,
    api_root: &str,
    session_id: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<AuthorizationRole>> {
    let url = format!("{}{}", api_root, ROLE_LIST_PATH);
    let builder = client.get(&url).header(SESSION_HEADER, session_id);
    let response = send_request(builder, ROLE_LIST_PATH, "GET", metrics).await?;

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse roleList: {e}")))
}

/// Invoke `AddAuthorizationRole`; the response body is the new role id.
pub async fn add_authorization_role(
    client: &Client,
    api_root: &str,
    session_id: &str,
    name: &str,
    privileges: &[String],
    metrics: Option<&MetricsCollector>,
) -> Result<i32> {
    let url = format!("{}{}", api_root, ADD_ROLE_PATH);
    let builder = client
        .post(&url)
        .header(SESSION_HEADER, session_id)
        .json(&AddRoleRequest {
            name,
            priv_ids: privileges,
        });
    let response = send_request(builder, ADD_ROLE_PATH, "POST", metrics).await?;

    let body = response.text().await?;
    body.trim().parse::<i32>().map_err(|_| {
        ClientError::InvalidResponse(format!(
            "AddAuthorizationRole returned a non-integer role id: {body:?}"
        ))
    })
}

/// Invoke `UpdateAuthorizationRole`.
pub async fn update_authorization_role(
    client: &Client,
    api_root: &str,
    session_id: &str,
    role_id: i32,
    new_name: &str,
    privileges: &[String],
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}{}", api_root, UPDATE_ROLE_PATH);
    let builder = client
        .post(&url)
        .header(SESSION_HEADER, session_id)
        .json(&UpdateRoleRequest {
            role_id,
            new_name,
            priv_ids: privileges,
        });
    send_request(builder, UPDATE_ROLE_PATH, "POST", metrics).await?;
    Ok(())
}

/// Invoke `RemoveAuthorizationRole`.
pub async fn remove_authorization_role(
    client: &Client,
    api_root: &str,
    session_id: &str,
    role_id: i32,
    fail_if_used: bool,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}{}", api_root, REMOVE_ROLE_PATH);
    let builder = client
        .post(&url)
        .header(SESSION_HEADER, session_id)
        .json(&RemoveRoleRequest {
            role_id,
            fail_if_used,
        });
    send_request(builder, REMOVE_ROLE_PATH, "POST", metrics).await?;
    Ok(())
}
