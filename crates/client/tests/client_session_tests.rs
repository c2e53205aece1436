//! Session handling of `VsphereClient` against a mocked vCenter.

mod common;

use std::time::Duration;

use common::*;
use secrecy::SecretString;
use vsphere_client::{AuthorizationManager, ClientError, RoleDirectory, VsphereClient};
use wiremock::matchers::{header, method, path};

const LOGIN: &str = "/SessionManager/SessionManager/Login";
const ROLE_LIST: &str = "/AuthorizationManager/AuthorizationManager/roleList";

fn client(server: &MockServer) -> VsphereClient {
    VsphereClient::builder()
        .base_url(server.uri())
        .credentials(
            "administrator@vsphere.local".to_string(),
            SecretString::new("pw".to_string().into()),
        )
        .api_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn mount_login(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(api_path(LOGIN)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("vmware-api-session-id", SESSION_ID)
                .set_body_json(load_fixture("session/user_session.json")),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_logs_in_once_and_reuses_session() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path(api_path(ROLE_LIST)))
        .and(header("vmware-api-session-id", SESSION_ID))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/role_list.json")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    assert!(!client.has_session().await);

    assert_eq!(client.role_list().await.unwrap().len(), 5);
    assert!(client.has_session().await);
    assert_eq!(client.role_list().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_unauthorized_clears_session_without_retry() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, 2).await;

    Mock::given(method("GET"))
        .and(path(api_path(ROLE_LIST)))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(load_fixture("faults/not_authenticated.json")),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path(ROLE_LIST)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/role_list.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    let err = client.role_list().await.unwrap_err();
    assert!(
        matches!(&err, ClientError::SessionExpired { username } if username == "administrator@vsphere.local")
    );
    assert!(err.is_auth_error());
    assert!(!client.has_session().await);

    // The next call opens a fresh session.
    assert_eq!(client.role_list().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_rejected_login_surfaces_auth_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path(LOGIN)))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(load_fixture("faults/invalid_login.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client.role_list().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthFailed(_)));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path(api_path("/SessionManager/SessionManager/Logout")))
        .and(header("vmware-api-session-id", SESSION_ID))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client.login().await.unwrap();
    assert!(client.has_session().await);

    client.logout().await.unwrap();
    assert!(!client.has_session().await);

    // Without a session, logout is a no-op.
    client.logout().await.unwrap();
}

#[tokio::test]
async fn test_directory_over_http_client() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path(api_path(ROLE_LIST)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/role_list.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let timeout = client.api_timeout();
    let directory = RoleDirectory::new(client, timeout);

    let by_id = directory.lookup_by_id(-2).await.unwrap().unwrap();
    let by_name = directory.lookup_by_name("ReadOnly").await.unwrap().unwrap();
    assert_eq!(by_id, by_name);
    assert_eq!(by_id.label.as_deref(), Some("Read-only"));
    assert!(directory.lookup_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_slow_server_hits_directory_timeout() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path(api_path(ROLE_LIST)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("roles/role_list.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let directory = RoleDirectory::new(client, Duration::from_millis(300));

    let err = directory.lookup_by_id(500).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)));
}
