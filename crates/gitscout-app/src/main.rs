//! Gitscout application binary - composition root.
//!
//! Ties together the gitscout crates into a single executable:
//! 1. Parse CLI args and initialize tracing
//! 2. Load configuration from the environment
//! 3. Construct the GitHub and language-model clients
//! 4. Start the axum REST API server

use std::sync::Arc;

use clap::Parser;

use gitscout_api::{create_router, AppState};
use gitscout_core::AppConfig;
use gitscout_github::{GithubClient, GithubService};
use gitscout_llm::{GeminiClient, TextGenerator};

mod cli;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.resolve_log_level())),
        )
        .init();

    tracing::info!("Starting gitscout v{}", env!("CARGO_PKG_VERSION"));

    // Config. An explicit --env-file wins over the ambient .env lookup
    // that AppConfig::from_env performs.
    if let Some(ref path) = args.env_file {
        if let Err(e) = dotenvy::from_path(path) {
            tracing::error!(path = %path.display(), error = %e, "Failed to load env file");
            return Err(e.into());
        }
    }
    let config = Arc::new(AppConfig::from_env());
    config.warn_missing();
    tracing::info!(repository = %config.repo_slug(), model = %config.llm.model, "Configuration loaded");

    // Upstream clients behind their seams.
    let github: Arc<dyn GithubService> = Arc::new(GithubClient::new(&config.github));
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config.llm));

    let state = AppState::new(Arc::clone(&config), github, generator);

    // === API server ===

    let port = args.resolve_port(config.server.port);
    let addr = format!("127.0.0.1:{}", port);

    let router = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind — is another instance running?");
            tracing::error!("Try: gitscout --port {}", port + 1);
            return Err(e.into());
        }
    };

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
