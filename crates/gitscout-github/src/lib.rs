//! Read-only GitHub REST v3 client for gitscout.
//!
//! Provides the [`GithubService`] trait consumed by the query router plus
//! the [`GithubClient`] implementation over authenticated HTTPS, and the
//! wire models for commits, pull requests, issue search, and workflow runs.

pub mod client;
pub mod error;
pub mod models;

pub use client::{GithubClient, GithubService, DEFAULT_API_BASE};
pub use error::GithubError;
pub use models::{
    Commit, CommitAuthor, CommitDetails, PullRequest, PullRequestAuthor, PullRequestSummary,
    WorkflowRun,
};
