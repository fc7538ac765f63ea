//! Wire models for the GitHub REST v3 responses gitscout consumes.
//!
//! Only the fields the router actually reads are deserialized; everything
//! else in the upstream payloads is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit object from the commits listing or commit-by-SHA endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Full SHA of the commit.
    pub sha: String,
    /// Nested commit details.
    pub commit: CommitDetails,
}

/// The author and message for a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    pub author: CommitAuthor,
    pub message: String,
}

/// The author name and date for a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// A pull request from the pulls listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub user: PullRequestAuthor,
    pub created_at: DateTime<Utc>,
    /// Merge timestamp; `None` for unmerged (closed or open) pull requests.
    pub merged_at: Option<DateTime<Utc>>,
}

/// The author login of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestAuthor {
    pub login: String,
}

/// Projection of an open pull request for listing responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestSummary {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<PullRequest> for PullRequestSummary {
    fn from(pr: PullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            author: pr.user.login,
            created_at: pr.created_at,
        }
    }
}

/// A CI workflow run from the actions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub status: String,
    pub head_branch: String,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

/// Envelope of the workflow-runs listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct WorkflowRunsPage {
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Envelope of the issue-search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct IssueSearchPage {
    pub total_count: u64,
}
