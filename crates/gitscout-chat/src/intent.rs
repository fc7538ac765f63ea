//! Ordered intent classification over free-text repository queries.
//!
//! An intent is selected by evaluating a fixed list of predicates against
//! the trimmed, lowercased message; the first match wins and the router
//! dispatches on the resulting variant. A message matching several
//! predicates is handled by the earliest one only.

use crate::parser;

/// The fixed phrase set answered with the current timestamp.
const DATE_TIME_PHRASES: &[&str] = &[
    "what is the date",
    "what is the current date",
    "give me current date",
    "what is the time",
    "what is the current time",
    "give me current time",
    "current date",
    "current time",
];

/// Keywords that route to the merged-PR summarization handler.
const RELEASE_KEYWORDS: &[&str] = &["deploy", "release", "feature"];

/// A classified query intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Exact date/time phrase; answered with the current local timestamp.
    CurrentDateTime,
    /// Commit count over an extracted date range.
    CommitActivity,
    /// Lookup of the single commit named by the captured SHA token.
    CommitLookup(String),
    /// Listing of the most recent commits.
    LatestCommits,
    /// Merged-PR summarization over an extracted date range.
    ReleaseSummary,
    /// Listing of open pull requests.
    OpenPullRequests,
    /// Count of open issues labeled "bug".
    OpenBugCount,
    /// No rule matched; the raw message goes to the language model.
    Fallback,
}

impl Intent {
    /// Classify a message. Checks run in fixed order; the first match wins.
    pub fn classify(message: &str) -> Intent {
        let lowered = message.trim().to_lowercase();

        if DATE_TIME_PHRASES.contains(&lowered.as_str()) {
            return Intent::CurrentDateTime;
        }

        if lowered.contains("commit")
            && (lowered.contains("yesterday")
                || lowered.contains("last")
                || parser::contains_iso_date(&lowered))
        {
            return Intent::CommitActivity;
        }

        if let Some(sha) = parser::find_commit_sha(&lowered) {
            return Intent::CommitLookup(sha);
        }

        if lowered.contains("latest commit") || lowered.contains("recent commit") {
            return Intent::LatestCommits;
        }

        if RELEASE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Intent::ReleaseSummary;
        }

        if lowered.contains("open pull") {
            return Intent::OpenPullRequests;
        }

        if lowered.contains("bug") && (lowered.contains("how many") || lowered.contains("count")) {
            return Intent::OpenBugCount;
        }

        Intent::Fallback
    }
}
