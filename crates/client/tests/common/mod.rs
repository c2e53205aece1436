//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::sync::Arc;
use std::time::Duration;

// Re-export test utilities from vsphere-client
#[allow(unused_imports)]
pub use vsphere_client::testing::{InMemoryAuthorizationManager, load_fixture};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use vsphere_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session id handed out by mocked logins.
#[allow(dead_code)]
pub const SESSION_ID: &str = "52e1c1d0-8a8f-4c2b-b0d4-2d3a9e2f7b11";

/// VI/JSON API root served by a mock server.
#[allow(dead_code)]
pub fn api_root(server: &MockServer) -> String {
    format!("{}/sdk/vim25/8.0.1.0", server.uri())
}

/// Path of a VI/JSON method or property below the API root.
#[allow(dead_code)]
pub fn api_path(suffix: &str) -> String {
    format!("/sdk/vim25/8.0.1.0{suffix}")
}

/// Strings from string literals.
#[allow(dead_code)]
pub fn privs(privileges: &[&str]) -> Vec<String> {
    privileges.iter().map(|p| p.to_string()).collect()
}

/// A shared fake authority plus a directory over it.
#[allow(dead_code)]
pub fn fake_directory(
    fake: InMemoryAuthorizationManager,
) -> (
    Arc<InMemoryAuthorizationManager>,
    vsphere_client::RoleDirectory<Arc<InMemoryAuthorizationManager>>,
) {
    let fake = Arc::new(fake);
    let directory = vsphere_client::RoleDirectory::new(fake.clone(), Duration::from_secs(5));
    (fake, directory)
}
