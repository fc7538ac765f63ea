//! Gitscout API crate - axum HTTP server and route handlers.
//!
//! Exposes the conversational query endpoint, a status landing payload,
//! and the latest CI workflow run for the configured repository.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
