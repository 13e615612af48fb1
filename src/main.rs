//! automerge-bot binary entry point
//!
//! Inputs follow the GitHub Action convention (`INPUT_*` environment
//! variables) but every one of them is also a plain CLI flag.

use automerge_bot::bot;
use automerge_bot::config::Config;
use automerge_bot::error::{Error, Result};
use automerge_bot::github::GitHubClient;
use automerge_bot::types::MergeMethod;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Merge labeled, approved, green pull requests
#[derive(Debug, Parser)]
#[command(name = "automerge-bot", version)]
struct Cli {
    /// GitHub token used for all API calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Repository to operate on, as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,

    /// Comma-separated candidate labels
    #[arg(long, env = "INPUT_LABELS", default_value = "")]
    labels: String,

    /// Comma-separated candidate authors
    #[arg(long, env = "INPUT_AUTHORS", default_value = "")]
    authors: String,

    /// Post a diagnostic comment instead of merging
    ///
    /// Parsed as a true/false value because the Actions runner exports
    /// every input, including unset booleans, as "false".
    #[arg(long, env = "INPUT_TEST_MODE", action = clap::ArgAction::Set, default_value_t = false)]
    test_mode: bool,

    /// Merge strategy for eligible PRs
    #[arg(long, env = "INPUT_MERGE_METHOD", value_enum, default_value_t = MergeMethod::Merge)]
    merge_method: MergeMethod,

    /// Delete the source branch after a successful merge
    #[arg(long, env = "INPUT_DELETE_SOURCE_BRANCH", action = clap::ArgAction::Set, default_value_t = false)]
    delete_source_branch: bool,

    /// GitHub Enterprise host (defaults to github.com)
    #[arg(long, env = "GITHUB_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("automerge-bot failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (owner, repo) = cli
        .repository
        .split_once('/')
        .filter(|(o, r)| !o.is_empty() && !r.is_empty())
        .ok_or_else(|| Error::InvalidRepository(cli.repository.clone()))?;

    // Fails before any PR is fetched when no filters are configured.
    let config = Config::new(
        &cli.labels,
        &cli.authors,
        cli.test_mode,
        cli.merge_method,
        cli.delete_source_branch,
    )?;

    let client = GitHubClient::new(&cli.token, owner.to_string(), repo.to_string(), cli.host)?;

    let summary = bot::run(&config, &client).await?;
    info!(
        merged = summary.merged.len(),
        commented = summary.commented.len(),
        blocked = summary.blocked.len(),
        "run complete"
    );
    Ok(())
}
