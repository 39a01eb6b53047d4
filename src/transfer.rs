use crate::error::TransferRejected;
use crate::provider::Provider;

#[derive(Debug)]
pub enum TransferOutcome {
    Issued,
    Rejected(TransferRejected),
}

/// Running totals over one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    pub issued: usize,
    pub rejected: usize,
}

impl TransferSummary {
    pub fn record(&mut self, outcome: &TransferOutcome) {
        match outcome {
            TransferOutcome::Issued => self.issued += 1,
            TransferOutcome::Rejected(_) => self.rejected += 1,
        }
    }
}

/// Issues one transfer of `source_user/repository` to `destination_user`
/// through the source account's client.
pub async fn issue_transfer(
    source: &dyn Provider,
    source_user: &str,
    destination_user: &str,
    repository: &str,
) -> TransferOutcome {
    match source
        .transfer_repository(source_user, repository, destination_user)
        .await
    {
        Ok(()) => TransferOutcome::Issued,
        Err(reason) => TransferOutcome::Rejected(TransferRejected {
            repository: repository.to_string(),
            source_user: source_user.to_string(),
            destination_user: destination_user.to_string(),
            reason,
        }),
    }
}

/// Stdout line for an accepted transfer request.
pub fn issued_line(repository: &str, source_user: &str, destination_user: &str) -> String {
    format!(
        "issued transfer request of repository {repo} from user {source} to user {destination}",
        repo = repository,
        source = source_user,
        destination = destination_user
    )
}
