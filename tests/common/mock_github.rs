//! Mock GitHub API for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use automerge_bot::error::{Error, Result};
use automerge_bot::github::GitHubApi;
use automerge_bot::types::{
    CheckRun, MergeMethod, MergeOutcome, PullRequestPayload, RepoConfig, Review,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `merge_pull`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub pull_number: u64,
    pub method: MergeMethod,
}

/// Call record for `create_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCall {
    pub pull_number: u64,
    pub body: String,
}

/// Simple mock GitHub API for testing
///
/// Features:
/// - Configurable responses per PR / ref
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockGitHubApi {
    repo: RepoConfig,
    pulls_response: Mutex<Vec<PullRequestPayload>>,
    reviews_responses: Mutex<HashMap<u64, Vec<Review>>>,
    check_runs_responses: Mutex<HashMap<String, Vec<CheckRun>>>,
    merge_responses: Mutex<HashMap<u64, MergeOutcome>>,
    // Call tracking
    list_reviews_calls: Mutex<Vec<u64>>,
    list_check_runs_calls: Mutex<Vec<String>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    delete_ref_calls: Mutex<Vec<String>>,
    comment_calls: Mutex<Vec<CommentCall>>,
    // Error injection
    error_on_list_pulls: Mutex<Option<String>>,
    error_on_list_reviews: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
    error_on_delete_ref: Mutex<Option<String>>,
}

impl MockGitHubApi {
    /// Create a new mock for the given repository context
    pub fn with_repo(repo: RepoConfig) -> Self {
        Self {
            repo,
            pulls_response: Mutex::new(Vec::new()),
            reviews_responses: Mutex::new(HashMap::new()),
            check_runs_responses: Mutex::new(HashMap::new()),
            merge_responses: Mutex::new(HashMap::new()),
            list_reviews_calls: Mutex::new(Vec::new()),
            list_check_runs_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            delete_ref_calls: Mutex::new(Vec::new()),
            comment_calls: Mutex::new(Vec::new()),
            error_on_list_pulls: Mutex::new(None),
            error_on_list_reviews: Mutex::new(None),
            error_on_merge: Mutex::new(None),
            error_on_delete_ref: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Set the open pull request list
    pub fn set_open_pulls(&self, pulls: Vec<PullRequestPayload>) {
        *self.pulls_response.lock().unwrap() = pulls;
    }

    /// Set the review list for a specific PR
    pub fn set_reviews(&self, pull_number: u64, reviews: Vec<Review>) {
        self.reviews_responses
            .lock()
            .unwrap()
            .insert(pull_number, reviews);
    }

    /// Set the check-run list for a specific head ref
    pub fn set_check_runs(&self, ref_name: &str, checks: Vec<CheckRun>) {
        self.check_runs_responses
            .lock()
            .unwrap()
            .insert(ref_name.to_string(), checks);
    }

    /// Set the merge outcome for a specific PR
    pub fn set_merge_outcome(&self, pull_number: u64, outcome: MergeOutcome) {
        self.merge_responses
            .lock()
            .unwrap()
            .insert(pull_number, outcome);
    }

    // === Error injection methods ===

    /// Make `list_open_pulls` return an error
    pub fn fail_list_pulls(&self, msg: &str) {
        *self.error_on_list_pulls.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_reviews` return an error
    pub fn fail_list_reviews(&self, msg: &str) {
        *self.error_on_list_reviews.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pull` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `delete_ref` return an error
    pub fn fail_delete_ref(&self, msg: &str) {
        *self.error_on_delete_ref.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all PRs `list_reviews` was called with, in order
    pub fn get_list_reviews_calls(&self) -> Vec<u64> {
        self.list_reviews_calls.lock().unwrap().clone()
    }

    /// Get all refs `list_check_runs` was called with, in order
    pub fn get_list_check_runs_calls(&self) -> Vec<String> {
        self.list_check_runs_calls.lock().unwrap().clone()
    }

    /// Get all `merge_pull` calls
    pub fn get_merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Get all refs `delete_ref` was called with
    pub fn get_delete_ref_calls(&self) -> Vec<String> {
        self.delete_ref_calls.lock().unwrap().clone()
    }

    /// Get all `create_comment` calls
    pub fn get_comment_calls(&self) -> Vec<CommentCall> {
        self.comment_calls.lock().unwrap().clone()
    }

    /// Get count of `merge_pull` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Assert that `merge_pull` was called for a specific PR
    pub fn assert_merge_called(&self, pull_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.pull_number == pull_number),
            "Expected merge_pull({pull_number}) but got: {calls:?}"
        );
    }

    /// Assert that `merge_pull` was NOT called for a specific PR
    pub fn assert_merge_not_called(&self, pull_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            !calls.iter().any(|c| c.pull_number == pull_number),
            "Expected merge_pull({pull_number}) NOT to be called but it was: {calls:?}"
        );
    }

    /// Assert that `merge_pull` was called with a specific method
    pub fn assert_merge_called_with_method(&self, pull_number: u64, method: MergeMethod) {
        let calls = self.get_merge_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.pull_number == pull_number && c.method == method),
            "Expected merge_pull({pull_number}, {method:?}) but got: {calls:?}"
        );
    }

    /// Assert that `delete_ref` was called for a specific ref
    pub fn assert_ref_deleted(&self, git_ref: &str) {
        let calls = self.get_delete_ref_calls();
        assert!(
            calls.iter().any(|c| c == git_ref),
            "Expected delete_ref({git_ref}) but got: {calls:?}"
        );
    }

    /// Assert that `delete_ref` was never called
    pub fn assert_no_refs_deleted(&self) {
        let calls = self.get_delete_ref_calls();
        assert!(
            calls.is_empty(),
            "Expected no delete_ref calls but got: {calls:?}"
        );
    }

    /// Assert that a comment was posted on a specific PR
    pub fn assert_comment_posted(&self, pull_number: u64) {
        let calls = self.get_comment_calls();
        assert!(
            calls.iter().any(|c| c.pull_number == pull_number),
            "Expected a comment on PR #{pull_number} but got: {calls:?}"
        );
    }
}

#[async_trait]
impl GitHubApi for MockGitHubApi {
    async fn list_open_pulls(&self) -> Result<Vec<PullRequestPayload>> {
        // Check for injected error
        if let Some(msg) = self.error_on_list_pulls.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.pulls_response.lock().unwrap().clone())
    }

    async fn list_reviews(&self, pull_number: u64) -> Result<Vec<Review>> {
        self.list_reviews_calls.lock().unwrap().push(pull_number);

        // Check for injected error
        if let Some(msg) = self.error_on_list_reviews.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.reviews_responses.lock().unwrap();
        Ok(responses.get(&pull_number).cloned().unwrap_or_default())
    }

    async fn list_check_runs(&self, ref_name: &str) -> Result<Vec<CheckRun>> {
        self.list_check_runs_calls
            .lock()
            .unwrap()
            .push(ref_name.to_string());

        let responses = self.check_runs_responses.lock().unwrap();
        Ok(responses.get(ref_name).cloned().unwrap_or_default())
    }

    async fn merge_pull(&self, pull_number: u64, method: MergeMethod) -> Result<MergeOutcome> {
        self.merge_calls.lock().unwrap().push(MergeCall {
            pull_number,
            method,
        });

        // Check for injected error
        if let Some(msg) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        // Unconfigured PRs merge successfully by default
        let responses = self.merge_responses.lock().unwrap();
        Ok(responses
            .get(&pull_number)
            .cloned()
            .unwrap_or_else(|| MergeOutcome {
                merged: true,
                sha: Some(format!("merged_sha_{pull_number}")),
                message: None,
            }))
    }

    async fn delete_ref(&self, git_ref: &str) -> Result<()> {
        self.delete_ref_calls
            .lock()
            .unwrap()
            .push(git_ref.to_string());

        // Check for injected error
        if let Some(msg) = self.error_on_delete_ref.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(())
    }

    async fn create_comment(&self, pull_number: u64, body: &str) -> Result<()> {
        self.comment_calls.lock().unwrap().push(CommentCall {
            pull_number,
            body: body.to_string(),
        });
        Ok(())
    }

    fn repo(&self) -> &RepoConfig {
        &self.repo
    }
}
