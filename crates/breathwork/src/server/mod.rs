//! HTTP server: JSON content API for the site frontend.
//!
//! Routes:
//! - `GET  /health`                  liveness probe
//! - `GET  /api/content`             every landing-page section
//! - `POST /api/content`             admin-only write stub
//! - `POST /api/submit-testimonial`  visitor testimonial, stored as a draft
//! - `GET  /api/blog`                posts, newest first
//! - `GET  /api/blog/{slug}`         one post

pub mod auth;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use secrecy::SecretString;
use tower_http::trace::TraceLayer;
use tracing::info;

use breathwork_core::{ContentService, TestimonialService};

/// State shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub content: ContentService,
    pub testimonials: TestimonialService,
    /// Bearer token accepted as an admin session. `None` disables admin access.
    pub admin_token: Option<Arc<SecretString>>,
}

impl AppState {
    pub fn new(
        content: ContentService,
        testimonials: TestimonialService,
        admin_token: Option<SecretString>,
    ) -> Self {
        Self {
            content,
            testimonials,
            admin_token: admin_token.map(Arc::new),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/content",
            get(routes::get_content).post(routes::update_content),
        )
        .route(
            "/api/submit-testimonial",
            post(routes::submit_testimonial),
        )
        .route("/api/blog", get(routes::list_posts))
        .route("/api/blog/{slug}", get(routes::get_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `state` on `addr` until Ctrl-C.
pub async fn run(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
