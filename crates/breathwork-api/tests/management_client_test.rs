#![allow(clippy::unwrap_used)]
// Integration tests for `ManagementClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use breathwork_api::{Error, LocalizedFields, ManagementClient, TransportConfig};

const ENTRIES_PATH: &str = "/spaces/space1/environments/staging/entries";

async fn setup() -> (MockServer, ManagementClient) {
    let server = MockServer::start().await;
    let token: secrecy::SecretString = "cma-token".to_string().into();
    let client = ManagementClient::new(
        &server.uri(),
        "space1",
        "staging",
        &token,
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn testimonial_fields() -> LocalizedFields {
    LocalizedFields::new("en-US")
        .set("name", "Jordan")
        .set("role", "")
        .set("message", "Life changing session.")
        .set("rating", 5)
        .set("approved", false)
}

#[tokio::test]
async fn test_create_entry_posts_localized_draft() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(ENTRIES_PATH))
        .and(header("authorization", "Bearer cma-token"))
        .and(header(
            "content-type",
            "application/vnd.contentful.management.v1+json",
        ))
        .and(header("x-contentful-content-type", "testimonial"))
        .and(body_json(json!({ "fields": {
            "name": { "en-US": "Jordan" },
            "role": { "en-US": "" },
            "message": { "en-US": "Life changing session." },
            "rating": { "en-US": 5 },
            "approved": { "en-US": false }
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sys": { "id": "draft-42", "type": "Entry", "version": 1 },
            "fields": { "name": { "en-US": "Jordan" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entry = client
        .create_entry("testimonial", &testimonial_fields())
        .await
        .unwrap();
    assert_eq!(entry.sys.id, "draft-42");
}

#[tokio::test]
async fn test_create_entry_validation_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(ENTRIES_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "sys": { "type": "Error", "id": "ValidationFailed" },
            "message": "Validation error",
            "requestId": "req-9"
        })))
        .mount(&server)
        .await;

    let err = client
        .create_entry("testimonial", &testimonial_fields())
        .await
        .unwrap_err();
    assert_eq!(err.api_error_code(), Some("ValidationFailed"));
}

#[tokio::test]
async fn test_create_entry_bad_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(ENTRIES_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client
        .create_entry("testimonial", &testimonial_fields())
        .await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}
