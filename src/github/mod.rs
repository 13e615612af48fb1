//! GitHub API surface
//!
//! Provides the capability interface the orchestrator drives. The
//! eligibility core never touches this module; it only sees the typed
//! records the client produces.

mod client;

pub use client::GitHubClient;

use crate::error::Result;
use crate::types::{CheckRun, MergeMethod, MergeOutcome, PullRequestPayload, RepoConfig, Review};
use async_trait::async_trait;

/// Capability interface for every GitHub operation the bot performs
///
/// Injected into the orchestrator as `&dyn GitHubApi`, which keeps the
/// evaluation core pure and lets tests substitute a mock.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// List the repository's open pull requests
    async fn list_open_pulls(&self) -> Result<Vec<PullRequestPayload>>;

    /// List the reviews submitted for a pull request, oldest first
    async fn list_reviews(&self, pull_number: u64) -> Result<Vec<Review>>;

    /// List the check runs for a head ref
    async fn list_check_runs(&self, ref_name: &str) -> Result<Vec<CheckRun>>;

    /// Merge a pull request with the given method
    async fn merge_pull(&self, pull_number: u64, method: MergeMethod) -> Result<MergeOutcome>;

    /// Delete a git ref (`heads/<branch>`)
    async fn delete_ref(&self, git_ref: &str) -> Result<()>;

    /// Post an issue comment on a pull request
    async fn create_comment(&self, pull_number: u64, body: &str) -> Result<()>;

    /// Get the repository context this client operates on
    fn repo(&self) -> &RepoConfig;
}
