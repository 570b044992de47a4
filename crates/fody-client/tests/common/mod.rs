#![allow(dead_code)]

use fody_client::FodyClient;
use serde_json::json;
use wiremock::matchers::{any, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "abc";

/// Log in against `server` with a mocked login endpoint handing out [`TOKEN`]
pub async fn logged_in_client(server: &MockServer) -> FodyClient {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_string("username=alice&password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login_token": TOKEN })))
        .expect(1)
        .mount(server)
        .await;

    FodyClient::connect(server.uri(), "alice", "secret")
        .await
        .expect("login against mock server")
}

/// Fail the test if any request reaches `server`
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
