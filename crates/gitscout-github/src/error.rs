//! Error types for GitHub data access.

use gitscout_core::GitscoutError;
use thiserror::Error;

/// Errors from the GitHub REST client.
///
/// A non-2xx upstream status is reported as [`GithubError::Status`], whose
/// display embeds the numeric code; callers render it as natural-language
/// error text rather than crashing. Nothing is retried.
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub API error: {0}")]
    Status(u16),

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no workflow runs found")]
    NoWorkflowRuns,
}

impl From<GithubError> for GitscoutError {
    fn from(err: GithubError) -> Self {
        GitscoutError::Github(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_embeds_code() {
        assert_eq!(GithubError::Status(404).to_string(), "GitHub API error: 404");
        assert_eq!(GithubError::Status(500).to_string(), "GitHub API error: 500");
    }

    #[test]
    fn test_no_workflow_runs_display() {
        assert_eq!(
            GithubError::NoWorkflowRuns.to_string(),
            "no workflow runs found"
        );
    }

    #[test]
    fn test_conversion_into_top_level_error() {
        let err: GitscoutError = GithubError::Status(403).into();
        assert!(matches!(err, GitscoutError::Github(_)));
        assert_eq!(err.to_string(), "GitHub error: GitHub API error: 403");
    }
}
