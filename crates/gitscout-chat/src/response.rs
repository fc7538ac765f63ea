//! Response assembly for routed queries.
//!
//! Formats GitHub data into the user-facing reply text and builds the
//! summarization prompt for merged pull requests. Everything here is
//! assembled per response and discarded.

use gitscout_core::DateRange;
use gitscout_github::{Commit, PullRequest, PullRequestSummary};

/// A commit projected for display: short SHA, author, date, subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub short_sha: String,
    pub author: String,
    pub date: String,
    pub subject: String,
}

impl From<&Commit> for CommitSummary {
    fn from(commit: &Commit) -> Self {
        Self {
            short_sha: commit.sha.chars().take(7).collect(),
            author: commit.commit.author.name.clone(),
            date: commit.commit.author.date.format("%Y-%m-%d").to_string(),
            subject: commit
                .commit
                .message
                .lines()
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Single-commit detail reply.
pub fn format_commit_detail(commit: &Commit) -> String {
    format!(
        "Commit `{}` by **{}** on {}:\n> {}",
        commit.sha,
        commit.commit.author.name,
        commit.commit.author.date.format("%Y-%m-%dT%H:%M:%SZ"),
        commit.commit.message
    )
}

/// Numbered listing of the most recent commits.
pub fn format_latest_commits(commits: &[Commit], repo: &str) -> String {
    let entries: Vec<String> = commits
        .iter()
        .enumerate()
        .map(|(idx, commit)| {
            let summary = CommitSummary::from(commit);
            format!(
                "{}. {}\n   • Commit: `{}`\n   • Author: {}\n   • Date: {}",
                idx + 1,
                summary.subject,
                summary.short_sha,
                summary.author,
                summary.date
            )
        })
        .collect();

    format!("Latest Commits in `{}`:\n\n{}", repo, entries.join("\n\n"))
}

/// Bulleted listing of open pull requests.
pub fn format_open_pull_requests(pulls: &[PullRequestSummary]) -> String {
    let lines: Vec<String> = pulls
        .iter()
        .map(|pr| {
            format!(
                "- #{} by {} on {}",
                pr.number,
                pr.author,
                pr.created_at.format("%Y-%m-%d")
            )
        })
        .collect();

    format!("Open pull requests:\n{}", lines.join("\n"))
}

/// Prompt asking the language model to summarize merged pull requests.
///
/// Lists every pull request's number, title, and author exactly once.
pub fn build_release_prompt(message: &str, range: &DateRange, pulls: &[PullRequest]) -> String {
    let summary: Vec<String> = pulls
        .iter()
        .map(|pr| format!("- PR #{}: {} by {}", pr.number, pr.title, pr.user.login))
        .collect();

    format!(
        "The user asked: {}\n\nBetween {} and {}, the following pull requests were merged:\n\n{}\n\nSummarize from user perspective.",
        message,
        range.from,
        range.to,
        summary.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use gitscout_github::{CommitAuthor, CommitDetails, PullRequestAuthor};

    fn commit(sha: &str, author: &str, message: &str) -> Commit {
        Commit {
            sha: sha.to_string(),
            commit: CommitDetails {
                author: CommitAuthor {
                    name: author.to_string(),
                    date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
                },
                message: message.to_string(),
            },
        }
    }

    fn pull(number: u64, title: &str, login: &str) -> PullRequest {
        PullRequest {
            number,
            title: title.to_string(),
            user: PullRequestAuthor {
                login: login.to_string(),
            },
            created_at: Utc.with_ymd_and_hms(2024, 4, 20, 9, 0, 0).unwrap(),
            merged_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
        )
    }

    // ---- CommitSummary ----

    #[test]
    fn test_commit_summary_projection() {
        let c = commit("abc1234def5678", "Jan Doe", "Fix login\n\nLonger body");
        let s = CommitSummary::from(&c);
        assert_eq!(s.short_sha, "abc1234");
        assert_eq!(s.author, "Jan Doe");
        assert_eq!(s.date, "2024-05-01");
        assert_eq!(s.subject, "Fix login");
    }

    #[test]
    fn test_commit_summary_short_sha_input() {
        let c = commit("ab12", "Jan", "msg");
        assert_eq!(CommitSummary::from(&c).short_sha, "ab12");
    }

    #[test]
    fn test_commit_summary_empty_message() {
        let c = commit("abc1234", "Jan", "");
        assert_eq!(CommitSummary::from(&c).subject, "");
    }

    // ---- format_commit_detail ----

    #[test]
    fn test_format_commit_detail() {
        let c = commit("abc1234def", "Jan Doe", "Fix login redirect");
        let text = format_commit_detail(&c);
        assert!(text.contains("Commit `abc1234def`"));
        assert!(text.contains("**Jan Doe**"));
        assert!(text.contains("2024-05-01T12:30:00Z"));
        assert!(text.contains("> Fix login redirect"));
    }

    // ---- format_latest_commits ----

    #[test]
    fn test_format_latest_commits_numbered() {
        let commits = vec![
            commit("aaa1111bbb", "Alice", "First change"),
            commit("ccc2222ddd", "Bob", "Second change\nbody"),
        ];
        let text = format_latest_commits(&commits, "hello-world");
        assert!(text.starts_with("Latest Commits in `hello-world`:"));
        assert!(text.contains("1. First change"));
        assert!(text.contains("2. Second change"));
        assert!(text.contains("`aaa1111`"));
        assert!(text.contains("Author: Bob"));
        assert!(!text.contains("body"));
    }

    // ---- format_open_pull_requests ----

    #[test]
    fn test_format_open_pull_requests() {
        let pulls = vec![
            PullRequestSummary {
                number: 12,
                title: "WIP".to_string(),
                author: "dave".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 5, 3, 10, 0, 0).unwrap(),
            },
            PullRequestSummary {
                number: 15,
                title: "Docs".to_string(),
                author: "erin".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 5, 4, 10, 0, 0).unwrap(),
            },
        ];
        let text = format_open_pull_requests(&pulls);
        assert_eq!(
            text,
            "Open pull requests:\n- #12 by dave on 2024-05-03\n- #15 by erin on 2024-05-04"
        );
    }

    // ---- build_release_prompt ----

    #[test]
    fn test_release_prompt_mentions_every_pr_exactly_once() {
        let pulls = vec![
            pull(1, "Add caching", "alice"),
            pull(2, "Fix deploy script", "bob"),
        ];
        let prompt = build_release_prompt("what was deployed", &range(), &pulls);

        assert!(prompt.contains("The user asked: what was deployed"));
        assert!(prompt.contains("Between 2024-05-01 and 2024-05-07"));
        assert_eq!(prompt.matches("- PR #1: Add caching by alice").count(), 1);
        assert_eq!(
            prompt.matches("- PR #2: Fix deploy script by bob").count(),
            1
        );
        assert!(prompt.ends_with("Summarize from user perspective."));
    }
}
