//! automerge-bot - CI bot that merges labeled, approved, green PRs
//!
//! On each trigger the bot lists a repository's open pull requests,
//! narrows them by configured label/author criteria, evaluates each
//! candidate's merge eligibility from its review and check-run history,
//! and either posts a diagnostic comment (test mode) or merges it and
//! optionally deletes its source branch.
//!
//! The decision logic lives in [`eligibility`] and is pure; all network
//! access goes through the [`github::GitHubApi`] capability interface,
//! driven by [`bot::run`].

pub mod bot;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod github;
pub mod types;
