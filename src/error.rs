//! Error types for automerge-bot

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the bot can surface
///
/// Every variant is fatal: the run aborts on the first error and the
/// binary reports it as a single failure message.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither labels nor authors were configured
    #[error("no labels or authors configured; set at least one of the two filters")]
    NoFilters,

    /// The label/author filter matched zero open pull requests
    #[error("no open pull requests matched the filters\n  labels: {labels}\n  authors: {authors}")]
    NoCandidates {
        /// Configured labels, comma-joined ("(none)" when empty)
        labels: String,
        /// Configured authors, comma-joined ("(none)" when empty)
        authors: String,
    },

    /// `GITHUB_REPOSITORY` was not in `owner/repo` form
    #[error("invalid repository slug '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// GitHub API error with context
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Raw octocrab error
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
