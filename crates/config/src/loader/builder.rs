//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Support loading from environment variables and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods applied after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_API_RELEASE, DEFAULT_API_TIMEOUT_SECS, DEFAULT_ROLE_CACHE_CAPACITY,
    DEFAULT_ROLE_CACHE_TTL_SECS, MAX_API_TIMEOUT_SECS, MAX_ROLE_CACHE_TTL_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig, RoleCacheConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    server: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    allow_unverified_ssl: Option<bool>,
    api_timeout: Option<Duration>,
    api_release: Option<String>,
    role_cache_ttl: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `VSPHERE_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the vSphere server (host name or URL).
    pub fn with_server(mut self, server: String) -> Self {
        self.server = Some(server);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_allow_unverified_ssl(mut self, allow: bool) -> Self {
        self.allow_unverified_ssl = Some(allow);
        self
    }

    /// Set the per-call API timeout.
    pub fn with_api_timeout(mut self, timeout: Duration) -> Self {
        self.api_timeout = Some(timeout);
        self
    }

    /// Set the VI/JSON API release.
    pub fn with_api_release(mut self, release: String) -> Self {
        self.api_release = Some(release);
        self
    }

    /// Set the role lookup cache TTL.
    pub fn with_role_cache_ttl(mut self, ttl: Duration) -> Self {
        self.role_cache_ttl = Some(ttl);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .server
            .as_deref()
            .map(normalize_server)
            .transpose()?
            .ok_or(ConfigError::MissingServer)?;

        let (Some(username), Some(password)) = (self.username, self.password) else {
            return Err(ConfigError::MissingAuth);
        };

        let connection = ConnectionConfig {
            base_url,
            allow_unverified_ssl: self.allow_unverified_ssl.unwrap_or(false),
            api_timeout: self
                .api_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_API_TIMEOUT_SECS)),
            api_release: self
                .api_release
                .unwrap_or_else(|| DEFAULT_API_RELEASE.to_string()),
        };
        Self::validate_timeout(connection.api_timeout)?;

        let role_cache = RoleCacheConfig {
            ttl: self
                .role_cache_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_ROLE_CACHE_TTL_SECS)),
            capacity: DEFAULT_ROLE_CACHE_CAPACITY,
        };
        Self::validate_cache_ttl(role_cache.ttl)?;

        tracing::debug!(
            server = %connection.base_url,
            api_release = %connection.api_release,
            "Built vSphere configuration"
        );

        Ok(Config {
            connection,
            auth: AuthConfig { username, password },
            role_cache,
        })
    }

    /// Checks that the API timeout is in `1..=MAX_API_TIMEOUT_SECS` seconds.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_API_TIMEOUT_SECS
                ),
            });
        }
        Ok(())
    }

    fn validate_cache_ttl(ttl: Duration) -> Result<(), ConfigError> {
        let secs = ttl.as_secs();
        if secs == 0 || secs > MAX_ROLE_CACHE_TTL_SECS {
            return Err(ConfigError::InvalidCacheTtl {
                message: format!(
                    "TTL must be between 1 and {} seconds (got {})",
                    MAX_ROLE_CACHE_TTL_SECS, secs
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn set_server(&mut self, server: Option<String>) {
        self.server = server;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_allow_unverified_ssl(&mut self, allow: Option<bool>) {
        self.allow_unverified_ssl = allow;
    }

    pub(crate) fn set_api_timeout(&mut self, timeout: Option<Duration>) {
        self.api_timeout = timeout;
    }

    pub(crate) fn set_api_release(&mut self, release: Option<String>) {
        self.api_release = release;
    }

    pub(crate) fn set_role_cache_ttl(&mut self, ttl: Option<Duration>) {
        self.role_cache_ttl = ttl;
    }
}

/// Turn a server setting into a normalized base URL.
///
/// A bare host (`vcenter.example.com`) becomes `https://vcenter.example.com`;
/// full URLs must be http(s) with a host. Trailing slashes are stripped.
pub(crate) fn normalize_server(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingServer);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidValue {
        var: "server".into(),
        message: format!("must be a host name or an absolute http(s) URL: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "server".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "server".into(),
            message: "host is required (e.g. vcenter.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
