use async_trait::async_trait;

/// The two platform operations a transfer run needs, bound to one account.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Login of the account the client is authenticated as.
    async fn authenticated_login(&self) -> anyhow::Result<String>;

    /// Ask the platform to move `owner/repository` to `new_owner`.
    /// Ok means the request was accepted, not that the transfer completed.
    async fn transfer_repository(
        &self,
        owner: &str,
        repository: &str,
        new_owner: &str,
    ) -> anyhow::Result<()>;
}
