//! Client builder for constructing [`VsphereClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Deriving the VI/JSON API root from base URL and release
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - `allow_unverified_ssl` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::Mutex;
use vsphere_config::{
    Config,
    constants::{DEFAULT_API_RELEASE, DEFAULT_API_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS},
};

use crate::auth::SessionManager;
use crate::client::VsphereClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`VsphereClient`].
pub struct VsphereClientBuilder {
    base_url: Option<String>,
    credentials: Option<(String, SecretString)>,
    allow_unverified_ssl: bool,
    api_timeout: Duration,
    api_release: String,
    metrics: Option<MetricsCollector>,
}

impl Default for VsphereClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            allow_unverified_ssl: false,
            api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            api_release: DEFAULT_API_RELEASE.to_string(),
            metrics: None,
        }
    }
}

impl VsphereClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the vCenter or ESXi host, e.g. `https://vcenter.example.com`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the login credentials.
    pub fn credentials(mut self, username: String, password: SecretString) -> Self {
        self.credentials = Some((username, password));
        self
    }

    /// Accept self-signed or otherwise unverifiable TLS certificates.
    ///
    /// # Security Warning
    /// Only use this against lab hosts. Disabling TLS verification makes the
    /// connection vulnerable to man-in-the-middle attacks.
    pub fn allow_unverified_ssl(mut self, allow: bool) -> Self {
        self.allow_unverified_ssl = allow;
        self
    }

    /// Set the per-call timeout. Default is 300 seconds.
    pub fn api_timeout(mut self, timeout: Duration) -> Self {
        self.api_timeout = timeout;
        self
    }

    /// Set the VI/JSON API release used in request paths.
    pub fn api_release(mut self, release: String) -> Self {
        self.api_release = release;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some((config.auth.username.clone(), config.auth.password.clone()));
        self.allow_unverified_ssl = config.connection.allow_unverified_ssl;
        self.api_timeout = config.connection.api_timeout;
        self.api_release = config.connection.api_release.clone();
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`VsphereClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is empty.
    /// Returns [`ClientError::AuthFailed`] if credentials were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<VsphereClient> {
        let base_url = self
            .base_url
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let (username, password) = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.api_timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.allow_unverified_ssl {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "allow_unverified_ssl=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let api_root = format!("{}/sdk/vim25/{}", base_url, self.api_release);

        Ok(VsphereClient {
            http,
            base_url,
            api_root,
            session_manager: Mutex::new(SessionManager::new(username, password)),
            api_timeout: self.api_timeout,
            metrics: self.metrics,
        })
    }
}
