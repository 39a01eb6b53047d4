use anyhow::{anyhow, bail};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Secret;
use crate::provider::Provider;

#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    login: String,
}

#[derive(Debug, Serialize)]
struct TransferRequest<'a> {
    new_owner: &'a str,
}

pub struct GithubProvider {
    instance: Octocrab,
}

impl GithubProvider {
    /// Builds a client that sends `secret` with every request. No request is
    /// made here, so a bad token only shows up on first use.
    pub fn configure_provider(
        secret: &Secret,
        base_url: Option<&str>,
    ) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder().personal_token(secret.expose().to_string());

        if let Some(url) = base_url {
            builder = builder.base_url(with_trailing_slash(url))?;
        }

        Ok(GithubProvider {
            instance: builder.build()?,
        })
    }
}

// Routes are joined relative to the base url, which drops its last path
// segment unless it ends with a slash.
fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/", url = url)
    }
}

/// GitHub only allows ASCII letters, digits, `-`, `_` and `.` in repository
/// names, which also keeps the name a single path segment.
fn is_valid_repository_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

// The GitHub variant already carries the API message; its chain would repeat it.
fn describe(error: octocrab::Error) -> anyhow::Error {
    match error {
        octocrab::Error::GitHub { source, .. } => anyhow!(source.message),
        other => other.into(),
    }
}

#[async_trait]
impl Provider for GithubProvider {
    async fn authenticated_login(&self) -> anyhow::Result<String> {
        let user: AuthenticatedUser = self
            .instance
            .get("user", None::<&()>)
            .await
            .map_err(describe)?;

        Ok(user.login)
    }

    async fn transfer_repository(
        &self,
        owner: &str,
        repository: &str,
        new_owner: &str,
    ) -> anyhow::Result<()> {
        if !is_valid_repository_name(repository) {
            bail!("invalid repository name {:?}", repository);
        }

        let route = format!(
            "repos/{owner}/{repo}/transfer",
            owner = owner,
            repo = repository
        );
        debug!(%route, new_owner, "issuing transfer request");

        let _: serde_json::Value = self
            .instance
            .post(route, Some(&TransferRequest { new_owner }))
            .await
            .map_err(describe)?;

        Ok(())
    }
}
