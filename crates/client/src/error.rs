//! Error types for the vSphere client.

use std::time::Duration;
use thiserror::Error;

use crate::models::RoleKey;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during vSphere client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Fault or error status returned by the vSphere API.
    #[error("API error ({status}) at {url}: {message}{}", .fault.as_ref().map(|f| format!(" [{f}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        /// `_typeName` of the returned method fault, when present.
        fault: Option<String>,
        message: String,
    },

    /// Session was rejected by the server; the next call logs in again.
    #[error("Session for {username} expired, please re-authenticate")]
    SessionExpired { username: String },

    /// Invalid response format from vSphere.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A bounded remote call did not finish in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The caller supplied an unusable request; nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The remote catalog holds no role for the searched key.
    #[error("couldn't find the specified role: {0}")]
    RoleNotFound(RoleKey),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::SessionExpired { .. })
            || matches!(self, Self::ApiError { status: 401, .. })
    }

    /// Check if this error is the shim's "no such role" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoleNotFound(_))
    }

    /// The method fault type carried by an API error, if any.
    pub fn fault(&self) -> Option<&str> {
        match self {
            Self::ApiError { fault, .. } => fault.as_deref(),
            _ => None,
        }
    }
}
