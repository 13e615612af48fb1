//! GitHub client implementation

use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::types::{CheckRun, MergeMethod, MergeOutcome, PullRequestPayload, RepoConfig, Review};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// GitHub client using octocrab for mutations and raw REST for listings
///
/// Listings go through plain reqwest with our own typed records because
/// octocrab's coverage of check runs is thin and the list-pulls payload
/// is ingested into [`PullRequestPayload`] at this boundary anyway.
pub struct GitHubClient {
    client: Octocrab,
    repo: RepoConfig,
    /// Token for raw HTTP requests
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubClient {
    /// Create a new client for one repository
    ///
    /// `host` selects a GitHub Enterprise instance (`<host>/api/v3`);
    /// None means github.com.
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("automerge-bot")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            repo: RepoConfig { owner, repo, host },
            token: token.to_string(),
            http_client,
            api_host,
        })
    }

    /// Perform a GET against the REST API and deserialize the response
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let url = format!(
            "https://{}/repos/{}/{}/{path}",
            self.api_host, self.repo.owner, self.repo.repo
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch {what}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {what}: HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse {what}: {e}")))
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_open_pulls(&self) -> Result<Vec<PullRequestPayload>> {
        debug!("listing open pull requests");

        let pulls: Vec<PullRequestPayload> = self
            .get_json("pulls?state=open&per_page=100", "pull requests")
            .await?;

        debug!(count = pulls.len(), "listed open pull requests");
        Ok(pulls)
    }

    async fn list_reviews(&self, pull_number: u64) -> Result<Vec<Review>> {
        debug!(pull_number, "listing reviews");

        #[derive(Deserialize)]
        struct WireReview {
            user: Option<WireUser>,
            state: crate::types::ReviewState,
            submitted_at: Option<DateTime<Utc>>,
        }

        #[derive(Deserialize)]
        struct WireUser {
            login: String,
        }

        let wire: Vec<WireReview> = self
            .get_json(&format!("pulls/{pull_number}/reviews"), "reviews")
            .await?;

        // Pending reviews have no submission timestamp and are not part
        // of a PR's submitted history; drop them here.
        let reviews: Vec<Review> = wire
            .into_iter()
            .filter_map(|r| {
                let user = r.user?;
                let submitted_at = r.submitted_at?;
                Some(Review {
                    reviewer: user.login,
                    state: r.state,
                    submitted_at,
                })
            })
            .collect();

        debug!(pull_number, count = reviews.len(), "listed reviews");
        Ok(reviews)
    }

    async fn list_check_runs(&self, ref_name: &str) -> Result<Vec<CheckRun>> {
        debug!(ref_name, "listing check runs");

        #[derive(Deserialize)]
        struct CheckRunsResponse {
            check_runs: Vec<CheckRun>,
        }

        let response: CheckRunsResponse = self
            .get_json(&format!("commits/{ref_name}/check-runs"), "check runs")
            .await?;

        debug!(
            ref_name,
            count = response.check_runs.len(),
            "listed check runs"
        );
        Ok(response.check_runs)
    }

    async fn merge_pull(&self, pull_number: u64, method: MergeMethod) -> Result<MergeOutcome> {
        debug!(pull_number, %method, "merging pull request");

        let octocrab_method = match method {
            MergeMethod::Merge => octocrab::params::pulls::MergeMethod::Merge,
            MergeMethod::Squash => octocrab::params::pulls::MergeMethod::Squash,
            MergeMethod::Rebase => octocrab::params::pulls::MergeMethod::Rebase,
        };

        let result = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .merge(pull_number)
            .method(octocrab_method)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let outcome = MergeOutcome {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pull_number,
            merged = outcome.merged,
            sha = ?outcome.sha,
            "merge complete"
        );
        Ok(outcome)
    }

    async fn delete_ref(&self, git_ref: &str) -> Result<()> {
        debug!(git_ref, "deleting ref");

        let url = format!(
            "https://{}/repos/{}/{}/git/refs/{git_ref}",
            self.api_host, self.repo.owner, self.repo.repo
        );

        let response = self
            .http_client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to delete ref: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to delete ref {git_ref}: HTTP {}",
                response.status()
            )));
        }

        debug!(git_ref, "deleted ref");
        Ok(())
    }

    async fn create_comment(&self, pull_number: u64, body: &str) -> Result<()> {
        debug!(pull_number, "creating comment");
        self.client
            .issues(&self.repo.owner, &self.repo.repo)
            .create_comment(pull_number, body)
            .await?;
        debug!(pull_number, "created comment");
        Ok(())
    }

    fn repo(&self) -> &RepoConfig {
        &self.repo
    }
}
