mod common;

use common::{logged_in_client, TOKEN};
use fody_client::FodyError;
use fody_core::Subquery;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_event_returns_first_element() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("id", "5"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 5 }])))
        .expect(1)
        .mount(&server)
        .await;

    let event = assert_ok!(client.events().get(5).await);
    assert_eq!(event, json!({ "id": 5 }));
}

#[tokio::test]
async fn test_get_event_empty_array() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = assert_err!(client.events().get(42).await);
    assert!(matches!(err, FodyError::Decode(_)));
}

#[tokio::test]
async fn test_get_event_not_found() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such event"))
        .mount(&server)
        .await;

    let err = assert_err!(client.events().get(7).await);
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_event_search_stats_export() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    let form = "source.asn=64496&time-observation_after=2024-01-01";

    for (endpoint, body) in [
        ("search", json!([{ "id": 1 }, { "id": 2 }])),
        ("stats", json!({ "total": 2 })),
        ("export", json!({ "events": [] })),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/api/events/{endpoint}")))
            .and(body_string(form))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let subquery = Subquery::try_from(json!({
        "source.asn": 64496,
        "time-observation_after": "2024-01-01",
    }))
    .unwrap();

    let events = client.events();
    assert_eq!(assert_ok!(events.search(&subquery).await).as_array().map(Vec::len), Some(2));
    assert_eq!(assert_ok!(events.stats(&subquery).await)["total"], 2);
    assert_eq!(assert_ok!(events.export(&subquery).await), json!({ "events": [] }));
}

#[tokio::test]
async fn test_event_subqueries() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/events/subqueries"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "source.ip": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let subqueries = assert_ok!(client.events().subqueries().await);
    assert!(subqueries.get("source.ip").is_some());
}
