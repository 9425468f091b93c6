use crate::common::{LogCapture, api_path, client_for, config_for};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use tdx_client::application::auth::{Session, extract_token};
use tdx_client::prelude::*;

#[test]
fn extract_token_trims_plain_body() {
    assert_eq!(extract_token("  abc.def.ghi \r\n"), Some("abc.def.ghi".to_string()));
}

#[test]
fn extract_token_unwraps_json_string() {
    assert_eq!(extract_token("\"abc.def.ghi\""), Some("abc.def.ghi".to_string()));
}

#[test]
fn extract_token_rejects_blank_bodies() {
    assert_eq!(extract_token(""), None);
    assert_eq!(extract_token("   \n\t"), None);
    assert_eq!(extract_token("\"  \""), None);
}

#[test]
fn session_authorization_header_and_redacted_debug() {
    let session = Session::new("tok-123", AuthMode::User);
    assert_eq!(session.token(), "tok-123");
    assert_eq!(session.authorization_header(), "Bearer tok-123");
    assert_eq!(session.mode, AuthMode::User);

    let debug = format!("{session:?}");
    assert!(!debug.contains("tok-123"));
}

#[tokio::test]
async fn admin_login_posts_credentials_and_stores_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("api/auth/loginadmin").as_str())
        .match_header("accept", "application/json, text/json")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "BEID": "BEID-1234",
            "WebServicesKey": "KEY-5678"
        })))
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("admin-token\n")
        .create_async()
        .await;

    let logs = LogCapture::default();
    let _guard = logs.install();

    let client = client_for(&server.url());
    assert!(!client.is_authenticated().await);

    let session = client
        .login_admin("BEID-1234", "KEY-5678")
        .await
        .expect("login should succeed");

    assert_eq!(session.token(), "admin-token");
    assert_eq!(session.mode, AuthMode::Admin);
    assert!(client.is_authenticated().await);
    assert_eq!(client.session().await, Some(session));
    assert!(logs.contains("Successfully authenticated against the TeamDynamix Web API."));
    assert!(!logs.contains("admin-token"));
    mock.assert_async().await;
}

#[tokio::test]
async fn user_login_posts_credentials_and_stores_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("api/auth/login").as_str())
        .match_body(Matcher::Json(json!({
            "UserName": "jdoe",
            "Password": "s3cret"
        })))
        .with_status(200)
        .with_body("user-token")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let session = client
        .login_user("jdoe", "s3cret")
        .await
        .expect("login should succeed");

    assert_eq!(session.token(), "user-token");
    assert_eq!(session.mode, AuthMode::User);
    mock.assert_async().await;
}

#[tokio::test]
async fn configured_login_uses_auth_mode() {
    let mut server = Server::new_async().await;
    let admin = server
        .mock("POST", api_path("api/auth/loginadmin").as_str())
        .expect(0)
        .create_async()
        .await;
    let user = server
        .mock("POST", api_path("api/auth/login").as_str())
        .match_body(Matcher::PartialJson(json!({ "UserName": "jdoe" })))
        .with_status(200)
        .with_body("user-token")
        .create_async()
        .await;

    let mut config = config_for(&server.url());
    config.auth_mode = AuthMode::User;
    let client = Client::new(config).expect("client should build");

    let session = client.login().await.expect("login should succeed");
    assert_eq!(session.mode, AuthMode::User);

    user.assert_async().await;
    admin.assert_async().await;
}

#[tokio::test]
async fn failed_login_reports_status_reason_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("api/auth/loginadmin").as_str())
        .with_status(401)
        .with_body("Invalid web services key")
        .create_async()
        .await;

    let logs = LogCapture::default();
    let _guard = logs.install();

    let client = client_for(&server.url());
    let err = client
        .login_admin("BEID-1234", "wrong")
        .await
        .expect_err("login should fail");

    match err {
        AppError::AuthenticationFailed {
            status,
            reason,
            body,
        } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(reason, "Unauthorized");
            assert_eq!(body, "Invalid web services key");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(!client.is_authenticated().await);

    assert!(logs.contains(
        "Error authenticating against the TeamDynamix Web API. See error details below."
    ));
    assert!(logs.contains("Authenticate: Status Code: 401"));
    assert!(logs.contains("Authenticate: Error Phrase: Unauthorized"));
    assert!(logs.contains("Authenticate: Error message: Invalid web services key"));
    assert!(!logs.contains("Successfully authenticated"));
    mock.assert_async().await;
}

#[tokio::test]
async fn blank_token_is_never_stored() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", api_path("api/auth/login").as_str())
        .with_status(200)
        .with_body("   \r\n")
        .create_async()
        .await;

    let logs = LogCapture::default();
    let _guard = logs.install();

    let client = client_for(&server.url());
    let err = client
        .login_user("jdoe", "s3cret")
        .await
        .expect_err("blank token should fail");

    assert!(matches!(err, AppError::MissingToken));
    assert!(!client.is_authenticated().await);
    assert!(logs.contains("Successfully authenticated against the TeamDynamix Web API."));
    assert!(logs.contains(
        "Authentication to the TeamDynamix Web API succeeded but a token was unable to be obtained."
    ));
}

#[tokio::test]
async fn failed_login_keeps_previous_token() {
    let mut server = Server::new_async().await;
    let _admin = server
        .mock("POST", api_path("api/auth/loginadmin").as_str())
        .with_status(200)
        .with_body("first-token")
        .create_async()
        .await;
    let _user = server
        .mock("POST", api_path("api/auth/login").as_str())
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = client_for(&server.url());
    client.login().await.expect("admin login should succeed");

    assert!(client.login_user("jdoe", "s3cret").await.is_err());
    let session = client.session().await.expect("session should remain");
    assert_eq!(session.token(), "first-token");
    assert_eq!(session.mode, AuthMode::Admin);
}

#[tokio::test]
async fn logout_clears_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", api_path("api/auth/loginadmin").as_str())
        .with_status(200)
        .with_body("admin-token")
        .create_async()
        .await;

    let client = client_for(&server.url());
    client.login().await.expect("login should succeed");
    assert!(client.is_authenticated().await);

    client.logout().await;
    assert!(!client.is_authenticated().await);
    assert!(client.session().await.is_none());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = client_for("http://127.0.0.1:1");
    let err = client
        .login_admin("BEID-1234", "KEY-5678")
        .await
        .expect_err("connection should fail");

    assert!(matches!(err, AppError::Network(_)));
}
