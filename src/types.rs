//! Core types for automerge-bot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Repository context the bot operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// State of a submitted pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Reviewer approved the changes
    Approved,
    /// Reviewer requested changes
    ChangesRequested,
    /// Reviewer left comments without a verdict
    Commented,
    /// Review was dismissed
    Dismissed,
    /// Any state this bot does not act on (e.g. PENDING)
    #[serde(other)]
    Other,
}

/// A reviewer's submitted verdict on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer login
    pub reviewer: String,
    /// Review state
    pub state: ReviewState,
    /// When the review was submitted
    pub submitted_at: DateTime<Utc>,
}

/// Lifecycle status of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Not started yet
    Queued,
    /// Currently running
    InProgress,
    /// Finished, conclusion available
    Completed,
    /// Any status this bot does not act on (e.g. waiting, pending)
    #[serde(other)]
    Other,
}

/// Final outcome of a completed check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConclusion {
    /// Check passed
    Success,
    /// Check failed
    Failure,
    /// Check finished without a pass/fail signal
    Neutral,
    /// Check was cancelled
    Cancelled,
    /// Check hit its time limit
    TimedOut,
    /// Check was skipped
    Skipped,
    /// Check requires user action
    ActionRequired,
    /// Any conclusion this bot does not act on
    #[serde(other)]
    Other,
}

/// A CI check result for a commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRun {
    /// Check name (for reason strings and logs)
    pub name: String,
    /// Lifecycle status
    pub status: CheckStatus,
    /// Outcome, present once status is completed
    pub conclusion: Option<CheckConclusion>,
}

/// Raw pull request record as returned by the list-pulls endpoint
///
/// Typed once at the ingestion boundary; everything downstream works on
/// [`PullRequestSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestPayload {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR author
    pub user: PayloadUser,
    /// Head (source) side of the PR
    pub head: PayloadRef,
    /// Base (target) side of the PR
    pub base: PayloadRef,
    /// Labels attached to the PR
    #[serde(default)]
    pub labels: Vec<PayloadLabel>,
}

/// Author record inside a PR payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadUser {
    /// Account login
    pub login: String,
}

/// One side (head or base) of a PR payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Repository the branch lives in (None when the fork was deleted)
    pub repo: Option<PayloadRepo>,
}

/// Repository record inside a PR payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadRepo {
    /// Repository ID
    pub id: u64,
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: PayloadUser,
}

/// Label record inside a PR payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadLabel {
    /// Label name
    pub name: String,
}

impl PullRequestPayload {
    /// Label names carried by this PR
    pub fn label_names(&self) -> BTreeSet<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    /// Author login
    pub fn author(&self) -> &str {
        &self.user.login
    }
}

/// Aggregated review verdict for one pull request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewVerdict {
    /// Reviewers whose latest review is an approval
    pub approved_by: BTreeSet<String>,
    /// Whether any reviewer's latest review requests changes
    pub has_outstanding_change_request: bool,
}

/// Aggregated CI verdict for one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckVerdict {
    /// Whether every check run has completed
    pub all_concluded: bool,
    /// Whether every completed run concluded success/neutral/skipped
    pub all_successful: bool,
}

impl Default for CheckVerdict {
    /// Absence of CI is not a blocker
    fn default() -> Self {
        Self {
            all_concluded: true,
            all_successful: true,
        }
    }
}

/// Normalized view of one pull request, the unit the evaluator works on
///
/// Identity is `(owner, repo, pull_number)`. Immutable after construction
/// except for the two verdict fields, which [`compile_reviews`] and
/// [`compile_checks`] populate (idempotently).
///
/// [`compile_reviews`]: Self::compile_reviews
/// [`compile_checks`]: Self::compile_checks
#[derive(Debug, Clone)]
pub struct PullRequestSnapshot {
    /// PR number
    pub pull_number: u64,
    /// PR title (for logs and comments)
    pub title: String,
    /// PR author login
    pub author: String,
    /// Owner of the base repository
    pub owner: String,
    /// Name of the base repository
    pub repo: String,
    /// Head branch name
    pub branch_name: String,
    /// Full git ref path (`heads/<branch>`), used only for deletion
    pub git_ref: String,
    /// ID of the repository the head branch lives in
    pub head_repo_id: u64,
    /// ID of the repository the PR targets
    pub base_repo_id: u64,
    /// Labels attached to the PR
    pub labels: BTreeSet<String>,
    /// Aggregated review verdict, None until compiled
    pub review_verdict: Option<ReviewVerdict>,
    /// Aggregated CI verdict, None until compiled
    pub check_verdict: Option<CheckVerdict>,
}

impl PullRequestSnapshot {
    /// Build a snapshot from a raw payload
    ///
    /// Fields are extracted verbatim. `context` supplies the owner/repo
    /// when the payload omits a base repository record. Missing repo IDs
    /// default to sentinel values that can never compare equal, so fork
    /// detection stays conservative and such branches are never deleted.
    pub fn from_payload(payload: &PullRequestPayload, context: &RepoConfig) -> Self {
        let (owner, repo, base_repo_id) = payload.base.repo.as_ref().map_or_else(
            || (context.owner.clone(), context.repo.clone(), 0),
            |r| (r.owner.login.clone(), r.name.clone(), r.id),
        );
        let head_repo_id = payload.head.repo.as_ref().map_or(u64::MAX, |r| r.id);

        Self {
            pull_number: payload.number,
            title: payload.title.clone(),
            author: payload.user.login.clone(),
            owner,
            repo,
            branch_name: payload.head.ref_name.clone(),
            git_ref: format!("heads/{}", payload.head.ref_name),
            head_repo_id,
            base_repo_id,
            labels: payload.label_names(),
            review_verdict: None,
            check_verdict: None,
        }
    }

    /// Fold a raw review list into the review verdict
    ///
    /// Replaces (never accumulates) the stored verdict, so calling twice
    /// with the same input yields the same result.
    pub fn compile_reviews(&mut self, reviews: &[Review]) {
        self.review_verdict = Some(crate::eligibility::aggregate_reviews(reviews));
    }

    /// Fold a raw check-run list into the CI verdict
    ///
    /// Replaces (never accumulates) the stored verdict, so calling twice
    /// with the same input yields the same result.
    pub fn compile_checks(&mut self, checks: &[CheckRun]) {
        self.check_verdict = Some(crate::eligibility::aggregate_checks(checks));
    }

    /// Whether the head branch lives in the same repository as the base
    ///
    /// Fork branches are never deleted, regardless of configuration.
    pub const fn is_same_repo_branch(&self) -> bool {
        self.head_repo_id == self.base_repo_id
    }
}

/// Result of evaluating one pull request against policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDecision {
    /// Whether the PR may be merged
    pub eligible: bool,
    /// Human-readable reason (for comment rendering and logs)
    pub reason: String,
}

/// Result of a merge API call
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Whether the merge was performed
    pub merged: bool,
    /// SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge endpoint (especially on failure)
    pub message: Option<String>,
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeMethod {
    /// Create a merge commit
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto the base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}
