use std::io::Write;

use tracing::{debug, info};

use crate::error::RunError;
use crate::identity::verify_identity;
use crate::provider::Provider;
use crate::transfer::{issue_transfer, issued_line, TransferOutcome, TransferSummary};

/// Both accounts involved in a run, by login.
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    pub source_user: &'a str,
    pub destination_user: &'a str,
}

/// Verifies both clients, then issues one transfer per repository in order.
///
/// A failed identity check aborts before any transfer. A rejected transfer is
/// written to `err` and the loop moves on; accepted ones go to `out`.
pub async fn transfer_all<O, E>(
    accounts: Accounts<'_>,
    repositories: &[String],
    source: &dyn Provider,
    destination: &dyn Provider,
    out: &mut O,
    err: &mut E,
) -> Result<TransferSummary, RunError>
where
    O: Write,
    E: Write,
{
    verify_identity(source, accounts.source_user).await?;
    verify_identity(destination, accounts.destination_user).await?;

    let mut summary = TransferSummary::default();

    for repository in repositories {
        let outcome = issue_transfer(
            source,
            accounts.source_user,
            accounts.destination_user,
            repository,
        )
        .await;

        let written = match &outcome {
            TransferOutcome::Issued => writeln!(
                out,
                "{}",
                issued_line(repository, accounts.source_user, accounts.destination_user)
            ),
            TransferOutcome::Rejected(rejected) => {
                debug!(repository = %repository, reason = %rejected.reason, "transfer rejected");
                writeln!(err, "{}", rejected)
            }
        };
        written.map_err(RunError::Output)?;

        summary.record(&outcome);
    }

    info!(
        issued = summary.issued,
        rejected = summary.rejected,
        "finished issuing transfer requests"
    );

    Ok(summary)
}
