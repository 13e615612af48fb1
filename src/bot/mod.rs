//! Run orchestration
//!
//! Fetch-and-dispatch plumbing around the eligibility core: list open
//! PRs, narrow them to candidates, then for each candidate fetch its
//! reviews and checks, aggregate, evaluate, and act. Candidates are
//! processed strictly one at a time; the first upstream failure aborts
//! the whole run.

mod comment;
mod filter;

pub use comment::render_comment;
pub use filter::{filter_candidates, matches_filters};

use crate::config::Config;
use crate::eligibility::can_merge;
use crate::error::{Error, Result};
use crate::github::GitHubApi;
use crate::types::PullRequestSnapshot;
use tracing::{debug, info, warn};

/// What one run did, for logging and tests
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// PR numbers that were merged
    pub merged: Vec<u64>,
    /// PR numbers that received a dry-run comment
    pub commented: Vec<u64>,
    /// PR numbers left unmerged, with the blocking reason
    pub blocked: Vec<(u64, String)>,
    /// Git refs deleted after merging
    pub deleted_refs: Vec<String>,
    /// PR numbers whose fork branch was retained despite the delete flag
    pub retained_fork_branches: Vec<u64>,
}

/// Run the bot once against one repository
///
/// The config has already been validated; this lists and filters the
/// open PRs, then drives the per-PR sequence. Errors from any API call
/// propagate immediately, aborting candidates not yet processed.
pub async fn run(config: &Config, api: &dyn GitHubApi) -> Result<RunSummary> {
    let pulls = api.list_open_pulls().await?;
    debug!(count = pulls.len(), "fetched open pull requests");

    let candidates = filter_candidates(config, pulls);
    if candidates.is_empty() {
        return Err(Error::NoCandidates {
            labels: config.labels_display(),
            authors: config.authors_display(),
        });
    }
    info!(count = candidates.len(), "selected candidate pull requests");

    let mut summary = RunSummary::default();

    for payload in &candidates {
        let mut snapshot = PullRequestSnapshot::from_payload(payload, api.repo());
        info!(
            pr_number = snapshot.pull_number,
            title = %snapshot.title,
            "processing pull request"
        );

        let reviews = api.list_reviews(snapshot.pull_number).await?;
        let checks = api.list_check_runs(&snapshot.branch_name).await?;
        snapshot.compile_reviews(&reviews);
        snapshot.compile_checks(&checks);

        let decision = can_merge(config, &snapshot);
        info!(
            pr_number = snapshot.pull_number,
            eligible = decision.eligible,
            reason = %decision.reason,
            "evaluated pull request"
        );

        if config.test_mode {
            let body = render_comment(config, &snapshot, &decision);
            api.create_comment(snapshot.pull_number, &body).await?;
            summary.commented.push(snapshot.pull_number);
            continue;
        }

        if !decision.eligible {
            summary
                .blocked
                .push((snapshot.pull_number, decision.reason));
            continue;
        }

        let outcome = api
            .merge_pull(snapshot.pull_number, config.merge_method)
            .await?;
        if !outcome.merged {
            // The merge endpoint answered but refused (e.g. the base
            // moved underneath us); treat like any other upstream error.
            return Err(Error::GitHubApi(format!(
                "merge of PR #{} was rejected: {}",
                snapshot.pull_number,
                outcome.message.unwrap_or_else(|| "(no message)".to_string())
            )));
        }
        info!(pr_number = snapshot.pull_number, sha = ?outcome.sha, "merged pull request");
        summary.merged.push(snapshot.pull_number);

        if config.delete_source_branch {
            if snapshot.is_same_repo_branch() {
                api.delete_ref(&snapshot.git_ref).await?;
                info!(git_ref = %snapshot.git_ref, "deleted source branch");
                summary.deleted_refs.push(snapshot.git_ref.clone());
            } else {
                warn!(
                    pr_number = snapshot.pull_number,
                    "unable to delete branch from fork, branch retained"
                );
                summary.retained_fork_branches.push(snapshot.pull_number);
            }
        }
    }

    Ok(summary)
}
