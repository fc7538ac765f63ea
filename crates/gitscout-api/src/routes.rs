//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, and a request body
//! limit around the three endpoints.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS middleware: allow the configured frontend origins.
    let origins: Vec<HeaderValue> = state
        .config
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(handlers::index))
        .route("/query", post(handlers::query))
        .route("/github-status", get(handlers::github_status))
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB global limit
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
