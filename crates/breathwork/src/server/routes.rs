//! HTTP route handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use breathwork_core::{
    BlogPost, ContentSource, DEFAULT_LIST_LIMIT, SiteContent, SubmitError, TestimonialSubmission,
};

use super::AppState;
use super::auth::AdminSession;

const CMS_EDITOR_URL: &str = "https://app.contentful.com";

// ── Error body ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// JSON error response: `{"error": ...}` plus an optional `message`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error: &'static str) -> Self {
        Self {
            status,
            body: ErrorBody {
                error,
                message: None,
            },
        }
    }

    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = Some(message.into());
        self
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::MissingFields => {
                Self::new(StatusCode::BAD_REQUEST, "Missing required fields")
            }
            SubmitError::InvalidRating => Self::new(StatusCode::BAD_REQUEST, "Invalid rating"),
            SubmitError::NotConfigured => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            ),
            SubmitError::Upstream(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to submit testimonial",
            ),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// GET /api/content
pub async fn get_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.content.site_content(ContentSource::Published).await)
}

/// POST /api/content
///
/// Editing happens in the CMS web interface; admins get pointed there.
pub async fn update_content(_session: AdminSession) -> ApiError {
    ApiError::new(
        StatusCode::NOT_IMPLEMENTED,
        "Content updates must be made through Contentful's web interface",
    )
    .with_message(format!("Visit {CMS_EDITOR_URL} to edit content"))
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// POST /api/submit-testimonial
///
/// The body is read as raw bytes: malformed JSON answers the generic 500,
/// not axum's 4xx JSON rejection.
pub async fn submit_testimonial(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ApiError> {
    let submission: TestimonialSubmission = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "unreadable testimonial payload");
        ApiError::internal()
    })?;

    state.testimonials.submit(&submission).await?;
    Ok(Json(SubmitResponse { success: true }))
}

#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub limit: Option<u32>,
}

/// GET /api/blog?limit=N
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Json<Vec<BlogPost>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Json(
        state
            .content
            .blog_posts(ContentSource::Published, limit)
            .await,
    )
}

/// GET /api/blog/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .content
        .blog_post_by_slug(&slug, ContentSource::Published)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use breathwork_api::{DeliveryClient, ManagementClient};
    use breathwork_core::{ContentClients, ContentService, TestimonialService};

    use crate::server::{AppState, create_router};

    const ENTRIES_PATH: &str = "/spaces/space1/environments/master/entries";
    const ADMIN_TOKEN: &str = "admin-secret";

    fn delivery(server: &MockServer) -> DeliveryClient {
        DeliveryClient::from_reqwest(&server.uri(), "space1", "master", reqwest::Client::new())
            .unwrap()
    }

    fn state(cms: &MockServer, management: Option<&MockServer>) -> AppState {
        let content = ContentService::new(ContentClients::new(delivery(cms), delivery(cms)));
        let client = management.map(|server| {
            ManagementClient::from_reqwest(
                &server.uri(),
                "space1",
                "master",
                reqwest::Client::new(),
            )
            .unwrap()
        });
        AppState::new(
            content,
            TestimonialService::new(client, "en-US"),
            Some(SecretString::from(ADMIN_TOKEN.to_string())),
        )
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = create_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    // ── Health / content ──

    #[tokio::test]
    async fn health_returns_ok() {
        let cms = MockServer::start().await;
        let response = create_router(state(&cms, None))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn get_content_survives_cms_outage() {
        let cms = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&cms)
            .await;

        let (status, body) = send(
            state(&cms, None),
            Request::get("/api/content").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hero"], Value::Null);
        assert_eq!(body["services"], json!([]));
        assert_eq!(body["contact"]["title"], json!("Get in Touch"));
        assert!(body["contact"].get("hours").is_none());
    }

    // ── Write stub ──

    #[tokio::test]
    async fn update_content_requires_session() {
        let cms = MockServer::start().await;
        let (status, body) = send(state(&cms, None), post_json("/api/content", "{}")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));

        let request = Request::post("/api/content")
            .header(header::AUTHORIZATION, "Bearer wrong")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(state(&cms, None), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn update_content_with_session_points_to_cms() {
        let cms = MockServer::start().await;
        let request = Request::post("/api/content")
            .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
            .body(Body::from("not even json"))
            .unwrap();

        let (status, body) = send(state(&cms, None), request).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            body,
            json!({
                "error": "Content updates must be made through Contentful's web interface",
                "message": "Visit https://app.contentful.com to edit content"
            })
        );
    }

    #[tokio::test]
    async fn no_admin_token_means_no_session() {
        let cms = MockServer::start().await;
        let mut app_state = state(&cms, None);
        app_state.admin_token = None;

        let request = Request::post("/api/content")
            .header(header::AUTHORIZATION, "Bearer ")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app_state, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // ── Testimonials ──

    #[tokio::test]
    async fn submit_testimonial_success() {
        let cms = MockServer::start().await;
        let management = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENTRIES_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "sys": { "id": "draft-1", "type": "Entry" }, "fields": {}
            })))
            .expect(1)
            .mount(&management)
            .await;

        let (status, body) = send(
            state(&cms, Some(&management)),
            post_json(
                "/api/submit-testimonial",
                r#"{"name":"A","message":"B","rating":"5","role":"Teacher"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
    }

    #[tokio::test]
    async fn submit_testimonial_accepts_non_string_name() {
        let cms = MockServer::start().await;
        let management = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENTRIES_PATH))
            .and(wiremock::matchers::body_json(json!({ "fields": {
                "name": { "en-US": 42 },
                "role": { "en-US": "" },
                "message": { "en-US": "B" },
                "rating": { "en-US": 5 },
                "approved": { "en-US": false }
            }})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "sys": { "id": "draft-2", "type": "Entry" }, "fields": {}
            })))
            .expect(1)
            .mount(&management)
            .await;

        let (status, body) = send(
            state(&cms, Some(&management)),
            post_json(
                "/api/submit-testimonial",
                r#"{"name":42,"message":"B","rating":5}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, body) = send(
            state(&cms, None),
            post_json(
                "/api/submit-testimonial",
                r#"{"name":0,"message":"B","rating":5}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields" }));
    }

    #[tokio::test]
    async fn submit_testimonial_validation_errors() {
        let cms = MockServer::start().await;

        let (status, body) = send(
            state(&cms, None),
            post_json("/api/submit-testimonial", r#"{"name":"A","message":"B"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields" }));

        let (status, body) = send(
            state(&cms, None),
            post_json(
                "/api/submit-testimonial",
                r#"{"name":"A","message":"B","rating":"lots"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid rating" }));
    }

    #[tokio::test]
    async fn submit_testimonial_server_errors() {
        let cms = MockServer::start().await;
        let valid = r#"{"name":"A","message":"B","rating":5}"#;

        let (status, body) = send(
            state(&cms, None),
            post_json("/api/submit-testimonial", valid),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server configuration error" }));

        let management = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&management)
            .await;
        let (status, body) = send(
            state(&cms, Some(&management)),
            post_json("/api/submit-testimonial", valid),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to submit testimonial" }));

        let (status, body) = send(
            state(&cms, None),
            post_json("/api/submit-testimonial", "{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    // ── Blog ──

    #[tokio::test]
    async fn blog_routes() {
        let cms = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ENTRIES_PATH))
            .and(query_param("content_type", "post"))
            .and(query_param("fields.slug", "first-breath"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "sys": { "id": "p-1", "type": "Entry" },
                            "fields": { "title": "First Breath", "slug": "first-breath",
                                        "publishedAt": "2024-02-01" } }]
            })))
            .mount(&cms)
            .await;
        Mock::given(method("GET"))
            .and(path(ENTRIES_PATH))
            .and(query_param("content_type", "post"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "sys": { "id": "p-1" }, "fields": { "slug": "older", "publishedAt": "2023-01-01" } },
                    { "sys": { "id": "p-2" }, "fields": { "slug": "newer", "publishedAt": "2024-01-01" } }
                ]
            })))
            .mount(&cms)
            .await;
        Mock::given(method("GET"))
            .and(path(ENTRIES_PATH))
            .and(query_param("fields.slug", "missing-slug"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&cms)
            .await;

        let (status, body) = send(
            state(&cms, None),
            Request::get("/api/blog/first-breath")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], json!("First Breath"));
        assert_eq!(body["publishedAt"], json!("2024-02-01"));

        let (status, body) = send(
            state(&cms, None),
            Request::get("/api/blog?limit=2").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["slug"], json!("newer"));
        assert_eq!(body[1]["slug"], json!("older"));

        let (status, body) = send(
            state(&cms, None),
            Request::get("/api/blog/missing-slug")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}
