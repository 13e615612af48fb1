//! Candidate selection - label/author filtering (pure)

use crate::config::Config;
use crate::types::PullRequestPayload;

/// Whether a pull request matches the configured filters
///
/// OR within a list, AND across lists: the PR must carry at least one
/// configured label (or the label list is empty) AND its author must be
/// in the configured set (or the author list is empty). Config
/// validation guarantees at least one list is non-empty.
pub fn matches_filters(config: &Config, payload: &PullRequestPayload) -> bool {
    let label_ok = config.labels.is_empty()
        || payload
            .labels
            .iter()
            .any(|label| config.labels.contains(&label.name));

    let author_ok = config.authors.is_empty() || config.authors.contains(payload.author());

    label_ok && author_ok
}

/// Narrow a PR list to the configured candidates, preserving order
pub fn filter_candidates(
    config: &Config,
    pulls: Vec<PullRequestPayload>,
) -> Vec<PullRequestPayload> {
    pulls
        .into_iter()
        .filter(|pr| matches_filters(config, pr))
        .collect()
}
