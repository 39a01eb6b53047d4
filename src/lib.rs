pub mod cli;
pub mod error;
pub mod github_provider;
pub mod identity;
pub mod orchestrator;
pub mod provider;
pub mod transfer;

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cli::Config;
use github_provider::GithubProvider;
use orchestrator::Accounts;
use transfer::TransferSummary;

/// Level used when `RUST_LOG` is unset. Per-item rejections log below it so
/// stderr carries one report line per failed transfer.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Full run against the real process streams: read stdin, build both
/// clients, verify them and issue every transfer.
pub async fn run(config: Config) -> Result<TransferSummary> {
    let repositories = cli::read_repositories(io::stdin().lock())
        .context("reading repository names from stdin")?;

    transfer_repositories(&config, &repositories).await
}

/// Builds both clients from `config` and reports to stdout/stderr.
///
/// The process streams are passed unlocked: the HTTP client logs to stderr
/// from runtime worker threads while a request is in flight.
pub async fn transfer_repositories(
    config: &Config,
    repositories: &[String],
) -> Result<TransferSummary> {
    let base_url = config.base_url.as_deref();
    let source = GithubProvider::configure_provider(&config.source.secret, base_url)
        .with_context(|| format!("configuring client for user {}", config.source.user))?;
    let destination = GithubProvider::configure_provider(&config.destination.secret, base_url)
        .with_context(|| format!("configuring client for user {}", config.destination.user))?;

    let accounts = Accounts {
        source_user: &config.source.user,
        destination_user: &config.destination.user,
    };

    let summary = orchestrator::transfer_all(
        accounts,
        repositories,
        &source,
        &destination,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await?;

    Ok(summary)
}
