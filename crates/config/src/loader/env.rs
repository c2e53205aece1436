//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `VSPHERE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub(crate) const ENV_SERVER: &str = "VSPHERE_SERVER";
pub(crate) const ENV_USER: &str = "VSPHERE_USER";
pub(crate) const ENV_PASSWORD: &str = "VSPHERE_PASSWORD";
pub(crate) const ENV_ALLOW_UNVERIFIED_SSL: &str = "VSPHERE_ALLOW_UNVERIFIED_SSL";
pub(crate) const ENV_API_TIMEOUT: &str = "VSPHERE_API_TIMEOUT";
pub(crate) const ENV_API_RELEASE: &str = "VSPHERE_API_RELEASE";
pub(crate) const ENV_ROLE_CACHE_TTL: &str = "VSPHERE_ROLE_CACHE_TTL";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, raw: &str, expected: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("must be {expected}"),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(server) = env_var_or_none(ENV_SERVER) {
        loader.set_server(Some(server));
    }
    if let Some(username) = env_var_or_none(ENV_USER) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = env_var_or_none(ENV_ALLOW_UNVERIFIED_SSL) {
        let skip: bool = parse_env(ENV_ALLOW_UNVERIFIED_SSL, &skip, "true or false")?;
        loader.set_allow_unverified_ssl(Some(skip));
    }
    if let Some(timeout) = env_var_or_none(ENV_API_TIMEOUT) {
        let secs: u64 = parse_env(ENV_API_TIMEOUT, &timeout, "a number of seconds")?;
        loader.set_api_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(release) = env_var_or_none(ENV_API_RELEASE) {
        loader.set_api_release(Some(release));
    }
    if let Some(ttl) = env_var_or_none(ENV_ROLE_CACHE_TTL) {
        let secs: u64 = parse_env(ENV_ROLE_CACHE_TTL, &ttl, "a number of seconds")?;
        loader.set_role_cache_ttl(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
