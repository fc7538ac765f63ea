//! Application state shared across all route handlers.
//!
//! AppState holds the immutable configuration and the upstream seams.
//! It is passed to handlers via axum's State extractor; all fields use
//! `Arc` for cheap cloning across handler tasks, and nothing in it is
//! mutable after startup.

use std::sync::Arc;

use gitscout_chat::QueryRouter;
use gitscout_core::AppConfig;
use gitscout_github::GithubService;
use gitscout_llm::TextGenerator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Read-only application configuration.
    pub config: Arc<AppConfig>,
    /// The query router handling `/query` messages.
    pub router: Arc<QueryRouter>,
    /// GitHub seam, used directly by the workflow-status endpoint.
    pub github: Arc<dyn GithubService>,
}

impl AppState {
    /// Create a new AppState over the given upstream implementations.
    pub fn new(
        config: Arc<AppConfig>,
        github: Arc<dyn GithubService>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let router = Arc::new(QueryRouter::new(
            Arc::clone(&github),
            generator,
            config.github.repo.clone(),
        ));
        Self {
            config,
            router,
            github,
        }
    }
}
