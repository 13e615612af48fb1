//! Check-run aggregation - fold CI results into one verdict

use crate::types::{CheckConclusion, CheckRun, CheckStatus, CheckVerdict};

/// Reduce a check-run list into a single [`CheckVerdict`]
///
/// `all_concluded` holds iff every run has status `completed`; a run
/// still queued or in progress leaves the PR undecidable rather than
/// failed. `all_successful` holds iff everything concluded and every
/// conclusion is success, neutral, or skipped. A completed run with no
/// conclusion counts as unsuccessful.
///
/// No check runs at all yields the passing default: a repository without
/// CI is not treated as a blocker.
pub fn aggregate_checks(checks: &[CheckRun]) -> CheckVerdict {
    let all_concluded = checks
        .iter()
        .all(|run| run.status == CheckStatus::Completed);

    let all_successful = all_concluded
        && checks.iter().all(|run| {
            matches!(
                run.conclusion,
                Some(
                    CheckConclusion::Success | CheckConclusion::Neutral | CheckConclusion::Skipped
                )
            )
        });

    CheckVerdict {
        all_concluded,
        all_successful,
    }
}
