mod common;

use common::{forbid_requests, logged_in_client, TOKEN};
use fody_client::{ClientConfig, FodyClient, FodyClientBuilder, FodyError};
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_sent_with_every_request() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    assert!(client.is_authenticated());

    Mock::given(method("GET"))
        .and(path("/api/contactdb/ping"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ping": "pong" })))
        .expect(2)
        .mount(&server)
        .await;

    let first = assert_ok!(client.contactdb().ping().await);
    let second = assert_ok!(client.contactdb().ping().await);
    assert_eq!(first, json!({ "ping": "pong" }));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = FodyClient::new(server.uri()).unwrap();
    let err = assert_err!(client.login("alice", "wrong").await);

    assert!(matches!(err, FodyError::Http { status: 403, ref body } if body == "Forbidden"));
    assert!(err.is_auth_error());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_login_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = assert_err!(FodyClient::connect(server.uri(), "alice", "secret").await);
    assert!(matches!(err, FodyError::MissingToken));
}

#[tokio::test]
async fn test_login_with_garbage_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = assert_err!(FodyClient::connect(server.uri(), "alice", "secret").await);
    assert!(matches!(err, FodyError::Decode(_)));
}

#[tokio::test]
async fn test_failed_login_keeps_previous_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/contactdb/ping"))
        .and(header("Authorization", "old-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = FodyClient::builder(server.uri())
        .token("old-token")
        .build()
        .unwrap();
    assert_err!(client.login("alice", "wrong").await);
    assert_ok!(client.contactdb().ping().await);
}

#[tokio::test]
async fn test_builder_without_credentials_skips_login() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let client = assert_ok!(FodyClientBuilder::new(server.uri()).connect().await);
    assert!(!client.is_authenticated());
    client.close();
}

#[tokio::test]
async fn test_connect_from_config() {
    let server = MockServer::start().await;
    let mut config = ClientConfig::new(format!("{}/", server.uri()));
    config.username = Some("alice".into());
    config.password = Some("secret".into());

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login_token": "xyz" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(FodyClientBuilder::from_config(&config).connect().await);
    assert_eq!(client.base_url(), server.uri());
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contactdb/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!("pong"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = FodyClient::builder(server.uri())
        .token(TOKEN)
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = assert_err!(client.contactdb().ping().await);
    assert!(matches!(err, FodyError::Timeout));
}

#[tokio::test]
async fn test_api_documentation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "api": ["contactdb", "events"] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FodyClient::new(server.uri()).unwrap();
    let docs = assert_ok!(client.api_documentation().await);
    assert_eq!(docs["api"][0], "contactdb");
}

#[tokio::test]
async fn test_clone_outlives_closed_original() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contactdb/ping"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let client = FodyClient::builder(server.uri()).token(TOKEN).build().unwrap();
    let clone = client.clone();
    client.close();

    assert_eq!(assert_ok!(clone.contactdb().ping().await), "pong");
}
