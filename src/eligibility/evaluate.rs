//! The merge decision function

use crate::config::Config;
use crate::types::{MergeDecision, PullRequestSnapshot};

/// Decide whether a pull request may be merged (PURE - no I/O)
///
/// Conjunction of three conditions, checked in order with short-circuit,
/// each failure producing its own reason:
///
/// 1. no reviewer has an outstanding change request;
/// 2. every check run has concluded (a still-running check means the PR
///    is not yet decidable, which is distinct from failure);
/// 3. every concluded check succeeded.
///
/// Label/author membership is not re-checked here - it was already
/// applied upstream as a selection filter, not a merge gate. Snapshots
/// whose verdicts were never compiled are reported as not yet decidable.
pub fn can_merge(config: &Config, snapshot: &PullRequestSnapshot) -> MergeDecision {
    let Some(reviews) = snapshot.review_verdict.as_ref() else {
        return blocked("reviews not yet aggregated");
    };
    let Some(checks) = snapshot.check_verdict.as_ref() else {
        return blocked("checks not yet aggregated");
    };

    if reviews.has_outstanding_change_request {
        return blocked("a reviewer has requested changes");
    }

    if !checks.all_concluded {
        return blocked("one or more checks are still running");
    }

    if !checks.all_successful {
        return blocked("one or more checks failed, were cancelled, or timed out");
    }

    let approvals = if reviews.approved_by.is_empty() {
        "no reviews submitted".to_string()
    } else {
        format!(
            "approved by {}",
            reviews
                .approved_by
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    MergeDecision {
        eligible: true,
        reason: format!(
            "no outstanding change requests and all checks green ({approvals}); eligible for {} merge",
            config.merge_method
        ),
    }
}

fn blocked(reason: &str) -> MergeDecision {
    MergeDecision {
        eligible: false,
        reason: reason.to_string(),
    }
}
