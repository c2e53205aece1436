//! Testing utilities for vSphere client tests.
//!
//! This module provides fixture loading, an in-memory stand-in for the
//! remote authorization authority and a capturing metrics recorder.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use vsphere_client::testing::{InMemoryAuthorizationManager, load_fixture};
//!
//! let fixture = load_fixture("roles/role_list.json");
//! let fake = InMemoryAuthorizationManager::new().with_next_id(500);
//! ```

mod fake;
mod recorder;

pub use fake::InMemoryAuthorizationManager;
pub use recorder::{CapturingRecorder, Description, Sample};

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "roles/role_list.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
