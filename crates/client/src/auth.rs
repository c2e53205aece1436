//! Credentials and vSphere session state.

use secrecy::{ExposeSecret, SecretString};

/// Holds the login credentials and the current `vmware-api-session-id`.
///
/// Both the password and the session id are kept in [`SecretString`] so they
/// never show up in `Debug` output or logs.
#[derive(Debug)]
pub struct SessionManager {
    username: String,
    password: SecretString,
    session_id: Option<SecretString>,
}

impl SessionManager {
    /// Create a session manager with no active session.
    pub fn new(username: String, password: SecretString) -> Self {
        Self {
            username,
            password,
            session_id: None,
        }
    }

    /// The user the session is opened for.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The login password.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// The current session id, if logged in.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_ref().map(|s| s.expose_secret())
    }

    /// Store the session id returned by `Login`.
    pub fn set_session(&mut self, session_id: String) {
        self.session_id = Some(SecretString::new(session_id.into()));
    }

    /// Forget the current session; the next call logs in again.
    pub fn clear_session(&mut self) {
        self.session_id = None;
    }

    /// Whether a session id is held.
    pub fn has_session(&self) -> bool {
        self.session_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new(
            "administrator@vsphere.local".to_string(),
            SecretString::new("secret-password-45678".to_string().into()),
        )
    }

    #[test]
    fn test_new_manager_has_no_session() {
        let manager = manager();
        assert!(!manager.has_session());
        assert!(manager.session_id().is_none());
        assert_eq!(manager.username(), "administrator@vsphere.local");
        assert_eq!(manager.password(), "secret-password-45678");
    }

    #[test]
    fn test_set_and_clear_session() {
        let mut manager = manager();
        manager.set_session("52c4d1b8-session".to_string());
        assert!(manager.has_session());
        assert_eq!(manager.session_id(), Some("52c4d1b8-session"));

        manager.clear_session();
        assert!(!manager.has_session());
    }

    // ============================================================================
    // Security-focused tests for secret handling
    // ============================================================================

    /// Password must not appear in Debug output, username may.
    #[test]
    fn test_password_not_exposed_in_debug() {
        let manager = manager();
        let debug_output = format!("{:?}", manager);

        assert!(
            !debug_output.contains("secret-password-45678"),
            "Debug output should not contain the password"
        );
        assert!(debug_output.contains("administrator@vsphere.local"));
    }

    /// Session ids set after login are not exposed in Debug output.
    #[test]
    fn test_session_id_not_exposed_in_debug() {
        let mut manager = manager();
        let session_id = "new-session-id-after-login-123";
        manager.set_session(session_id.to_string());

        let debug_output = format!("{:?}", manager);
        assert!(
            !debug_output.contains(session_id),
            "Debug output should not contain the session id"
        );
    }
}
