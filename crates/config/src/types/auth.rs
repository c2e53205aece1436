//! Authentication types for vSphere configuration.
//!
//! Responsibilities:
//! - Define the credentials used to open a vSphere session.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - The login exchange itself (see client crate).
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Username/password credentials for the vSphere SessionManager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// vSphere user, e.g. `administrator@vsphere.local`.
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}
