//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its input via axum extractors, calls into the
//! router or the GitHub seam, and returns a JSON response.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub message: String,
}

/// Envelope of the `/query` endpoint: always HTTP 200, either a response
/// text or an error text.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QueryReply {
    Response { response: String },
    Error { error: String },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub repository: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowStatusResponse {
    pub status: String,
    pub branch: String,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET / - service status landing payload.
pub async fn index(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        service: "gitscout".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository: state.config.repo_slug(),
    })
}

/// POST /query - route one free-text message to a reply.
///
/// Never fails at the HTTP level: router errors are rendered into the
/// `{"error": ...}` envelope with status 200.
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryReply> {
    match state.router.route(&request.message).await {
        Ok(response) => Json(QueryReply::Response { response }),
        Err(e) => {
            warn!(error = %e, "Query handling failed");
            Json(QueryReply::Error {
                error: e.to_string(),
            })
        }
    }
}

/// GET /github-status - most recent CI workflow run.
pub async fn github_status(
    State(state): State<AppState>,
) -> Result<Json<WorkflowStatusResponse>, ApiError> {
    let run = state.github.latest_workflow_run().await?;
    Ok(Json(WorkflowStatusResponse {
        status: run.status,
        branch: run.head_branch,
        updated_at: run.updated_at,
        html_url: run.html_url,
    }))
}
