//! Resolved merge policy
//!
//! Built once from the action inputs, validated before any pull request
//! is fetched, then shared read-only across the whole run.

use crate::error::{Error, Result};
use crate::types::MergeMethod;
use std::collections::BTreeSet;

/// Resolved, typed policy record for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidate labels; a PR matches if it carries at least one
    pub labels: BTreeSet<String>,
    /// Candidate authors; a PR matches if its author is listed
    pub authors: BTreeSet<String>,
    /// Dry-run: post a diagnostic comment instead of merging
    pub test_mode: bool,
    /// Merge strategy to use for eligible PRs
    pub merge_method: MergeMethod,
    /// Delete the source branch after a successful merge
    pub delete_source_branch: bool,
}

impl Config {
    /// Build and validate a policy from raw comma-separated input lists
    ///
    /// Fails with [`Error::NoFilters`] when neither labels nor authors are
    /// given: a run with no selection criteria would merge everything.
    pub fn new(
        labels: &str,
        authors: &str,
        test_mode: bool,
        merge_method: MergeMethod,
        delete_source_branch: bool,
    ) -> Result<Self> {
        let labels = parse_list(labels);
        let authors = parse_list(authors);

        if labels.is_empty() && authors.is_empty() {
            return Err(Error::NoFilters);
        }

        Ok(Self {
            labels,
            authors,
            test_mode,
            merge_method,
            delete_source_branch,
        })
    }

    /// Configured labels as a display string for error messages
    pub fn labels_display(&self) -> String {
        display_list(&self.labels)
    }

    /// Configured authors as a display string for error messages
    pub fn authors_display(&self) -> String {
        display_list(&self.authors)
    }
}

/// Split a comma-separated input list, trimming and dropping empties
fn parse_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn display_list(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "(none)".to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
