pub mod common;
pub mod reader;

pub use common::*;
pub use reader::read_repositories;

use clap::Parser;

/// Transfer all of the repositories from one user to another user on GitHub.
///
/// Repository names are read from stdin, one per line.
#[derive(Parser, Debug)]
#[clap(name = "githubtransfer", version)]
pub struct Args {
    /// Username of the user containing the repositories.
    #[clap(long)]
    source_user: String,

    /// Username of the user to send the repositories to.
    #[clap(long)]
    destination_user: String,

    /// GitHub secret for the user containing the repositories.
    #[clap(long, env = "GITHUB_SOURCE_USER_SECRET", hide_env_values = true)]
    source_user_secret: String,

    /// GitHub secret for the user to send the repositories to.
    #[clap(long, env = "GITHUB_DESTINATION_USER_SECRET", hide_env_values = true)]
    destination_user_secret: String,

    /// Root of the GitHub REST API, e.g. https://github.example.com/api/v3/
    #[clap(long, env = "GITHUB_API_URL")]
    base_url: Option<String>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            source: Account {
                user: args.source_user,
                secret: Secret::new(args.source_user_secret),
            },
            destination: Account {
                user: args.destination_user,
                secret: Secret::new(args.destination_user_secret),
            },
            base_url: args.base_url,
        }
    }
}

pub fn run() -> Config {
    Args::parse().into()
}
