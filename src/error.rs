use std::io;

use thiserror::Error;

/// Malformed or unreadable repository list on stdin.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("repository line {line} is empty")]
    EmptyLine { line: usize },

    #[error("there must be at least one repository")]
    NoRepositories,

    #[error("could not read repository names")]
    Read(#[source] io::Error),
}

/// A client failed the "who am I" check for the account it should act as.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("client for user {expected} is not valid: authenticated as {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("client for user {expected} is not valid")]
    Request {
        expected: String,
        #[source]
        source: anyhow::Error,
    },
}

impl IdentityError {
    pub fn user(&self) -> &str {
        match self {
            IdentityError::Mismatch { expected, .. } | IdentityError::Request { expected, .. } => {
                expected
            }
        }
    }
}

/// The platform declined a single transfer. Display is the stderr report line.
#[derive(Debug, Error)]
#[error(
    "error in issuing transfer request {repository} from user {source_user} to user {destination_user}: {reason:#}"
)]
pub struct TransferRejected {
    pub repository: String,
    pub source_user: String,
    pub destination_user: String,
    pub reason: anyhow::Error,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("could not write transfer report")]
    Output(#[source] io::Error),
}
