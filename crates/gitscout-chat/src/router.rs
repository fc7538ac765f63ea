//! Query router: central dispatch from classified intent to handler.
//!
//! The router validates the incoming message, classifies it, and produces a
//! single response string. GitHub upstream failures are rendered into the
//! response text; only validation and language-model failures propagate as
//! errors, which the HTTP layer reports back as an error payload. Nothing
//! is retried and nothing outlives the request.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::debug;

use gitscout_github::GithubService;
use gitscout_llm::TextGenerator;

use crate::error::ChatError;
use crate::intent::Intent;
use crate::parser;
use crate::response;

/// Maximum accepted message length in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4000;

/// Number of commits returned by the latest-commits listing.
const LATEST_COMMITS_LIMIT: usize = 5;

/// Routes free-text messages to handlers over the upstream seams.
pub struct QueryRouter {
    github: Arc<dyn GithubService>,
    generator: Arc<dyn TextGenerator>,
    repo: String,
}

impl QueryRouter {
    /// Create a router for the named repository.
    pub fn new(
        github: Arc<dyn GithubService>,
        generator: Arc<dyn TextGenerator>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            github,
            generator,
            repo: repo.into(),
        }
    }

    /// Handle one message end to end and produce the reply text.
    pub async fn route(&self, message: &str) -> Result<String, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::MessageTooLong(MAX_MESSAGE_LENGTH));
        }

        let intent = Intent::classify(message);
        debug!(?intent, "Routing query");

        match intent {
            Intent::CurrentDateTime => Ok(current_datetime_reply(Local::now())),
            Intent::CommitActivity => Ok(self.commit_activity(message).await),
            Intent::CommitLookup(sha) => Ok(self.commit_lookup(&sha).await),
            Intent::LatestCommits => Ok(self.latest_commits().await),
            Intent::ReleaseSummary => self.release_summary(message).await,
            Intent::OpenPullRequests => Ok(self.open_pull_requests().await),
            Intent::OpenBugCount => Ok(self.open_bug_count().await),
            Intent::Fallback => Ok(self.generator.generate(message).await?),
        }
    }

    async fn commit_activity(&self, message: &str) -> String {
        let range = parser::extract_date_range(message, Local::now().date_naive());
        match self.github.commit_count(&range).await {
            Ok(count) => format!(
                "There were **{}** commits between **{}** and **{}** in the `{}` repository.",
                count, range.from, range.to, self.repo
            ),
            Err(e) => format!("Error fetching commits: {}", e),
        }
    }

    async fn commit_lookup(&self, sha: &str) -> String {
        match self.github.commit_by_sha(sha).await {
            Ok(commit) => response::format_commit_detail(&commit),
            Err(e) => {
                debug!(sha, error = %e, "Commit lookup failed");
                format!("Could not find commit `{}`.", sha)
            }
        }
    }

    async fn latest_commits(&self) -> String {
        match self.github.latest_commits(LATEST_COMMITS_LIMIT).await {
            Ok(commits) if commits.is_empty() => "No commits found.".to_string(),
            Ok(commits) => response::format_latest_commits(&commits, &self.repo),
            Err(e) => format!("Error fetching commits: {}", e),
        }
    }

    async fn release_summary(&self, message: &str) -> Result<String, ChatError> {
        let range = parser::extract_date_range(message, Local::now().date_naive());
        match self.github.merged_pull_requests(&range).await {
            Ok(pulls) if pulls.is_empty() => Ok(format!(
                "No deployments found between **{}** and **{}** in the `{}` repository.",
                range.from, range.to, self.repo
            )),
            Ok(pulls) => {
                let prompt = response::build_release_prompt(message, &range, &pulls);
                Ok(self.generator.generate(&prompt).await?)
            }
            Err(e) => Ok(format!("Error fetching pull requests: {}", e)),
        }
    }

    async fn open_pull_requests(&self) -> String {
        match self.github.open_pull_requests().await {
            Ok(pulls) if pulls.is_empty() => "No open pull requests.".to_string(),
            Ok(pulls) => response::format_open_pull_requests(&pulls),
            Err(e) => format!("Error fetching pull requests: {}", e),
        }
    }

    async fn open_bug_count(&self) -> String {
        match self.github.open_bug_count().await {
            Ok(count) => format!("There are **{}** open bugs in `{}`.", count, self.repo),
            Err(e) => format!("Error: {}", e),
        }
    }
}

/// Render the current-timestamp reply.
fn current_datetime_reply(now: DateTime<Local>) -> String {
    format!(
        "Current date and time is: {}",
        now.format("%Y-%m-%d %H:%M:%S")
    )
}
