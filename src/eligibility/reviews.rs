//! Review aggregation - fold a review history into one verdict

use crate::types::{Review, ReviewState, ReviewVerdict};
use std::collections::BTreeMap;

/// Reduce an ordered review list into a single [`ReviewVerdict`]
///
/// The input is expected in submission order (chronological ascending, as
/// the listing endpoint returns it). A reviewer may appear many times;
/// only their last review counts, so a later approval overrides an
/// earlier change request from the same reviewer, and vice versa.
/// Commented and dismissed reviews never block and never approve.
///
/// Empty input yields the default verdict: nobody approved, nothing
/// outstanding.
pub fn aggregate_reviews(reviews: &[Review]) -> ReviewVerdict {
    // Last write wins per reviewer; input order is submission order.
    let mut latest: BTreeMap<&str, ReviewState> = BTreeMap::new();
    for review in reviews {
        latest.insert(review.reviewer.as_str(), review.state);
    }

    let mut verdict = ReviewVerdict::default();
    for (reviewer, state) in latest {
        match state {
            ReviewState::Approved => {
                verdict.approved_by.insert(reviewer.to_string());
            }
            ReviewState::ChangesRequested => {
                verdict.has_outstanding_change_request = true;
            }
            ReviewState::Commented | ReviewState::Dismissed | ReviewState::Other => {}
        }
    }

    verdict
}
