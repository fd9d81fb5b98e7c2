#![allow(clippy::unwrap_used)]
// Integration tests for `DeliveryClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use breathwork_api::{DeliveryClient, EntryQuery, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const ENTRIES_PATH: &str = "/spaces/space1/environments/master/entries";

async fn setup() -> (MockServer, DeliveryClient) {
    let server = MockServer::start().await;
    let client =
        DeliveryClient::from_reqwest(&server.uri(), "space1", "master", reqwest::Client::new())
            .unwrap();
    (server, client)
}

// ── Happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_entries_sends_query_and_bearer_token() {
    let server = MockServer::start().await;
    let token: secrecy::SecretString = "delivery-token".to_string().into();
    let client = DeliveryClient::new(
        &server.uri(),
        "space1",
        "master",
        &token,
        &TransportConfig::default(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .and(header("authorization", "Bearer delivery-token"))
        .and(query_param("content_type", "hero"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": { "type": "Array" },
            "total": 1, "skip": 0, "limit": 1,
            "items": [{
                "sys": { "id": "hero-1", "type": "Entry",
                         "contentType": { "sys": { "type": "Link", "linkType": "ContentType", "id": "hero" } } },
                "fields": { "title": "Breathe Deeply", "subtitle": "Find your center" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let collection = client
        .get_entries(&EntryQuery::content_type("hero").limit(1))
        .await
        .unwrap();

    assert_eq!(collection.total, 1);
    assert_eq!(collection.items.len(), 1);
    let entry = &collection.items[0];
    assert_eq!(entry.sys.id, "hero-1");
    assert_eq!(entry.sys.content_type_id(), Some("hero"));
    assert_eq!(entry.fields["title"], json!("Breathe Deeply"));
}

#[tokio::test]
async fn test_get_entries_resolves_included_assets() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .and(query_param("content_type", "post"))
        .and(query_param("fields.slug", "box-breathing"))
        .and(query_param("include", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "items": [{
                "sys": { "id": "post-1", "type": "Entry" },
                "fields": {
                    "slug": "box-breathing",
                    "mainImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "img-1" } }
                }
            }],
            "includes": { "Asset": [{
                "sys": { "id": "img-1", "type": "Asset" },
                "fields": { "title": "Box", "file": { "url": "//images.example.net/box.png" } }
            }]}
        })))
        .mount(&server)
        .await;

    let query = EntryQuery::content_type("post")
        .field_equals("slug", "box-breathing")
        .limit(1)
        .include(2);
    let collection = client.get_entries(&query).await.unwrap();

    assert_eq!(
        collection.items[0].fields["mainImage"].pointer("/fields/file/url"),
        Some(&json!("//images.example.net/box.png"))
    );
}

#[tokio::test]
async fn test_get_entries_joins_order_keys() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .and(query_param("order", "-fields.publishedAt,sys.id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let collection = client
        .get_entries(
            &EntryQuery::content_type("post")
                .order("-fields.publishedAt")
                .order("sys.id"),
        )
        .await
        .unwrap();
    assert!(collection.items.is_empty());
}

// ── Error paths ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_token_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "sys": { "type": "Error", "id": "AccessTokenInvalid" },
            "message": "The access token you sent could not be found or is invalid.",
            "requestId": "req-1"
        })))
        .mount(&server)
        .await;

    let result = client.get_entries(&EntryQuery::content_type("hero")).await;
    match result {
        Err(Error::Authentication { message }) => {
            assert!(message.contains("access token"), "message: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_structured_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "sys": { "type": "Error", "id": "InvalidQuery" },
            "message": "The query you sent was invalid.",
            "requestId": "req-2"
        })))
        .mount(&server)
        .await;

    let err = client
        .get_entries(&EntryQuery::content_type("nope"))
        .await
        .unwrap_err();

    assert_eq!(err.api_error_code(), Some("InvalidQuery"));
    assert!(!err.is_transient());
    match err {
        Error::Api {
            status, request_id, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(request_id.as_deref(), Some("req-2"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_space() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let err = client
        .get_entries(&EntryQuery::content_type("hero"))
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "expected not found, got: {err:?}");
}

#[tokio::test]
async fn test_rate_limited_reads_reset_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .respond_with(
            ResponseTemplate::new(429).insert_header("X-Contentful-RateLimit-Reset", "7"),
        )
        .mount(&server)
        .await;

    let err = client
        .get_entries(&EntryQuery::content_type("hero"))
        .await
        .unwrap_err();
    assert!(err.is_transient());
    assert!(
        matches!(err, Error::RateLimited { retry_after_secs: 7 }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client
        .get_entries(&EntryQuery::content_type("hero"))
        .await
        .unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert!(body.contains("maintenance")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
