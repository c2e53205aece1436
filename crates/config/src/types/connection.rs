//! Connection configuration types for vSphere.
//!
//! Responsibilities:
//! - Define connection settings (server URL, TLS verification, API timeout, release).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_API_RELEASE, DEFAULT_API_TIMEOUT_SECS, DEFAULT_ROLE_CACHE_CAPACITY,
    DEFAULT_ROLE_CACHE_TTL_SECS,
};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a vCenter or ESXi endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the vSphere server (e.g., https://vcenter.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub allow_unverified_ssl: bool,
    /// Upper bound for every remote call (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub api_timeout: Duration,
    /// VI/JSON API release segment, e.g. `8.0.1.0`
    #[serde(default = "default_api_release")]
    pub api_release: String,
}

pub(crate) fn default_api_release() -> String {
    DEFAULT_API_RELEASE.to_string()
}

/// Settings for the optional role lookup cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCacheConfig {
    /// Entry time-to-live (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub ttl: Duration,
    /// Maximum number of cached entries
    pub capacity: u64,
}

impl Default for RoleCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_ROLE_CACHE_TTL_SECS),
            capacity: DEFAULT_ROLE_CACHE_CAPACITY,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Session credentials
    pub auth: AuthConfig,
    /// Lookup cache settings
    #[serde(default)]
    pub role_cache: RoleCacheConfig,
}

impl Config {
    /// Create a config with default connection settings for the given server
    /// and credentials.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                allow_unverified_ssl: false,
                api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
                api_release: default_api_release(),
            },
            auth: AuthConfig { username, password },
            role_cache: RoleCacheConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_credentials_uses_defaults() {
        let config = Config::with_credentials(
            "https://vcenter.example.com".to_string(),
            "admin".to_string(),
            SecretString::new("pw".to_string().into()),
        );

        assert_eq!(config.connection.base_url, "https://vcenter.example.com");
        assert!(!config.connection.allow_unverified_ssl);
        assert_eq!(config.connection.api_timeout, Duration::from_secs(300));
        assert_eq!(config.connection.api_release, "8.0.1.0");
        assert_eq!(config.role_cache.ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_connection_serializes_timeout_as_seconds() {
        let connection = ConnectionConfig {
            base_url: "https://vc".to_string(),
            allow_unverified_ssl: true,
            api_timeout: Duration::from_secs(45),
            api_release: "8.0.2.0".to_string(),
        };

        let json = serde_json::to_value(&connection).unwrap();
        assert_eq!(json["api_timeout"], 45);
        assert_eq!(json["allow_unverified_ssl"], true);
    }

    #[test]
    fn test_connection_missing_release_uses_default() {
        let json = r#"{"base_url":"https://vc","allow_unverified_ssl":false,"api_timeout":10}"#;
        let connection: ConnectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(connection.api_release, "8.0.1.0");
        assert_eq!(connection.api_timeout, Duration::from_secs(10));
    }
}
