//! Diagnostic comment rendering for dry runs

use crate::config::Config;
use crate::types::{MergeDecision, PullRequestSnapshot};
use std::fmt::Write;

/// Render the dry-run diagnostic comment body
///
/// Posted on every candidate PR when `test_mode` is on, so authors can
/// see what the bot would have done and why.
pub fn render_comment(
    config: &Config,
    snapshot: &PullRequestSnapshot,
    decision: &MergeDecision,
) -> String {
    let mut body = String::new();

    let verdict = if decision.eligible {
        "**would merge**"
    } else {
        "**would not merge**"
    };

    let _ = writeln!(body, "## Automerge dry run");
    let _ = writeln!(body);
    let _ = writeln!(
        body,
        "PR #{} ({}): {verdict}",
        snapshot.pull_number, snapshot.title
    );
    let _ = writeln!(body, "Reason: {}", decision.reason);
    let _ = writeln!(body);

    if let Some(reviews) = snapshot.review_verdict.as_ref() {
        let approvals = if reviews.approved_by.is_empty() {
            "(none)".to_string()
        } else {
            reviews
                .approved_by
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(body, "- Approvals: {approvals}");
        let _ = writeln!(
            body,
            "- Outstanding change requests: {}",
            if reviews.has_outstanding_change_request {
                "yes"
            } else {
                "no"
            }
        );
    }

    if let Some(checks) = snapshot.check_verdict.as_ref() {
        let ci = if !checks.all_concluded {
            "still running"
        } else if checks.all_successful {
            "passing"
        } else {
            "failing"
        };
        let _ = writeln!(body, "- Checks: {ci}");
    }

    let _ = writeln!(body);
    let _ = writeln!(
        body,
        "Policy: labels [{}], authors [{}], method `{}`, delete source branch: {}",
        config.labels_display(),
        config.authors_display(),
        config.merge_method,
        config.delete_source_branch
    );

    body
}
