//! Shared test utilities for vsphere-roles integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the session and role-list endpoints of a mocked vCenter.
//!
//! Invariants / Assumptions:
//! - No `VSPHERE_*` variable leaks in from the host environment.
//! - Credentials are set to dummy values; the server address is per test.

use assert_cmd::Command;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const SESSION_ID: &str = "52e1c1d0-8a8f-4c2b-b0d4-2d3a9e2f7b11";

/// Returns a hermetic `vsphere-roles` command for integration testing.
pub fn vsphere_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vsphere-roles");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("VSPHERE_SERVER")
        .env_remove("VSPHERE_ALLOW_UNVERIFIED_SSL")
        .env_remove("VSPHERE_API_TIMEOUT")
        .env_remove("VSPHERE_API_RELEASE")
        .env_remove("VSPHERE_ROLE_CACHE_TTL");

    cmd.env("VSPHERE_USER", "administrator@vsphere.local");
    cmd.env("VSPHERE_PASSWORD", "test-password");

    cmd
}

/// Returns a hermetic `vsphere-roles` command pointed at a mock server.
#[allow(dead_code)]
pub fn vsphere_cmd_for(server: &MockServer) -> Command {
    let mut cmd = vsphere_cmd();
    cmd.env("VSPHERE_SERVER", server.uri());
    cmd
}

/// Path of a VI/JSON method below the default API root.
#[allow(dead_code)]
pub fn api_path(suffix: &str) -> String {
    format!("/sdk/vim25/8.0.1.0{suffix}")
}

/// Accept any login and hand out [`SESSION_ID`]; accept the logout.
#[allow(dead_code)]
pub async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(api_path("/SessionManager/SessionManager/Login")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("vmware-api-session-id", SESSION_ID)
                .set_body_json(serde_json::json!({
                    "_typeName": "UserSession",
                    "key": SESSION_ID,
                    "userName": "VSPHERE.LOCAL\\Administrator"
                })),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("/SessionManager/SessionManager/Logout")))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

/// Serve a role catalog with ReadOnly (-2), Admin (-1) and auditor (500).
#[allow(dead_code)]
pub async fn mount_role_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(api_path(
            "/AuthorizationManager/AuthorizationManager/roleList",
        )))
        .and(header("vmware-api-session-id", SESSION_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_typeName": "AuthorizationRole",
                "roleId": -2,
                "system": true,
                "name": "ReadOnly",
                "info": { "label": "Read-only", "summary": "See details of objects" },
                "privilege": ["System.Anonymous", "System.Read", "System.View"]
            },
            {
                "_typeName": "AuthorizationRole",
                "roleId": -1,
                "system": true,
                "name": "Admin",
                "info": { "label": "Administrator", "summary": "Full access rights" },
                "privilege": ["System.Anonymous", "System.Read", "System.View", "Global.Settings"]
            },
            {
                "_typeName": "AuthorizationRole",
                "roleId": 500,
                "system": false,
                "name": "auditor",
                "privilege": ["System.Read", "System.View"]
            }
        ])))
        .mount(server)
        .await;
}

/// A VI/JSON method fault body.
#[allow(dead_code)]
pub fn fault(type_name: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "_typeName": type_name,
        "faultMessage": [{
            "_typeName": "LocalizableMessage",
            "key": format!("vim.fault.{type_name}"),
            "message": message
        }]
    })
}
