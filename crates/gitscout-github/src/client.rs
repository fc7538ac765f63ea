//! GitHub REST client and the service trait consumed by the router.
//!
//! Every operation is a single authenticated HTTPS GET against a fixed
//! endpoint pattern (commit counting follows pagination links by page
//! number). Failures are surfaced immediately; there are no retries and no
//! caching.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use gitscout_core::{DateRange, GithubConfig};

use crate::error::GithubError;
use crate::models::{
    Commit, IssueSearchPage, PullRequest, PullRequestSummary, WorkflowRun, WorkflowRunsPage,
};

/// Production GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent sent with every request (GitHub rejects anonymous agents).
const USER_AGENT: &str = "gitscout";

/// Page size used when counting commits.
const COMMITS_PER_PAGE: usize = 100;

/// Page size when listing closed pull requests for merge filtering.
const PULLS_PER_PAGE: usize = 100;

/// Page size when listing open pull requests.
const OPEN_PULLS_PER_PAGE: usize = 50;

/// Read-only repository data operations used by the query router.
///
/// The trait seam lets tests substitute a stub upstream; the production
/// implementation is [`GithubClient`].
#[async_trait]
pub trait GithubService: Send + Sync {
    /// Count of open issues labeled "bug".
    async fn open_bug_count(&self) -> Result<u64, GithubError>;

    /// Count of commits authored within the inclusive date range.
    async fn commit_count(&self, range: &DateRange) -> Result<u64, GithubError>;

    /// A single commit by SHA (short or full form).
    async fn commit_by_sha(&self, sha: &str) -> Result<Commit, GithubError>;

    /// The most recent `limit` commits.
    async fn latest_commits(&self, limit: usize) -> Result<Vec<Commit>, GithubError>;

    /// Closed pull requests whose merge timestamp falls inside the range.
    async fn merged_pull_requests(
        &self,
        range: &DateRange,
    ) -> Result<Vec<PullRequest>, GithubError>;

    /// Open pull requests, projected for listing.
    async fn open_pull_requests(&self) -> Result<Vec<PullRequestSummary>, GithubError>;

    /// The most recent CI workflow run.
    async fn latest_workflow_run(&self) -> Result<WorkflowRun, GithubError>;
}

/// GitHub REST v3 client bound to one configured repository.
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    owner: String,
    repo: String,
}

impl GithubClient {
    /// Create a client for the configured repository.
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            token: config.token.clone(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        }
    }

    /// Override the API base URL (tests point this at a local mock server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_base, self.owner, self.repo, tail
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, GithubError> {
        debug!(url, "GitHub GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "GitHub request failed");
            return Err(GithubError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GithubService for GithubClient {
    async fn open_bug_count(&self) -> Result<u64, GithubError> {
        let url = format!("{}/search/issues", self.api_base);
        let query = format!(
            "repo:{}/{} is:issue is:open label:bug",
            self.owner, self.repo
        );
        let page: IssueSearchPage = self.get_json(&url, &[("q", query)]).await?;
        Ok(page.total_count)
    }

    async fn commit_count(&self, range: &DateRange) -> Result<u64, GithubError> {
        let url = self.repo_url("commits");
        let mut page = 1u32;
        let mut total = 0u64;

        // Follow pages until a short one; per-page size stays at 100.
        loop {
            let commits: Vec<Commit> = self
                .get_json(
                    &url,
                    &[
                        ("since", range.since_param()),
                        ("until", range.until_param()),
                        ("per_page", COMMITS_PER_PAGE.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .await?;
            total += commits.len() as u64;
            if commits.len() < COMMITS_PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(total)
    }

    async fn commit_by_sha(&self, sha: &str) -> Result<Commit, GithubError> {
        let url = self.repo_url(&format!("commits/{}", sha));
        self.get_json(&url, &[]).await
    }

    async fn latest_commits(&self, limit: usize) -> Result<Vec<Commit>, GithubError> {
        let url = self.repo_url("commits");
        self.get_json(&url, &[("per_page", limit.to_string())])
            .await
    }

    async fn merged_pull_requests(
        &self,
        range: &DateRange,
    ) -> Result<Vec<PullRequest>, GithubError> {
        let url = self.repo_url("pulls");
        let pulls: Vec<PullRequest> = self
            .get_json(
                &url,
                &[
                    ("state", "closed".to_string()),
                    ("per_page", PULLS_PER_PAGE.to_string()),
                ],
            )
            .await?;

        Ok(pulls
            .into_iter()
            .filter(|pr| {
                pr.merged_at
                    .is_some_and(|merged| range.contains(merged.date_naive()))
            })
            .collect())
    }

    async fn open_pull_requests(&self) -> Result<Vec<PullRequestSummary>, GithubError> {
        let url = self.repo_url("pulls");
        let pulls: Vec<PullRequest> = self
            .get_json(
                &url,
                &[
                    ("state", "open".to_string()),
                    ("per_page", OPEN_PULLS_PER_PAGE.to_string()),
                ],
            )
            .await?;

        Ok(pulls.into_iter().map(PullRequestSummary::from).collect())
    }

    async fn latest_workflow_run(&self) -> Result<WorkflowRun, GithubError> {
        let url = self.repo_url("actions/runs");
        let page: WorkflowRunsPage = self
            .get_json(&url, &[("per_page", "1".to_string())])
            .await?;
        page.workflow_runs
            .into_iter()
            .next()
            .ok_or(GithubError::NoWorkflowRuns)
    }
}
