use tracing::info;

use crate::error::IdentityError;
use crate::provider::Provider;

/// Checks that `provider` is authenticated as exactly `expected` (case-sensitive).
pub async fn verify_identity(provider: &dyn Provider, expected: &str) -> Result<(), IdentityError> {
    let login = provider
        .authenticated_login()
        .await
        .map_err(|source| IdentityError::Request {
            expected: expected.to_string(),
            source,
        })?;

    if login != expected {
        return Err(IdentityError::Mismatch {
            expected: expected.to_string(),
            actual: login,
        });
    }

    info!(user = expected, "verified client identity");
    Ok(())
}
