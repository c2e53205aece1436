//! Session models for the vSphere SessionManager API.
//!
//! Login answers with a `UserSession` body, but only the
//! `vmware-api-session-id` response header is read.

use serde::Serialize;

/// Body of `SessionManager.Login`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
}
