use async_trait::async_trait;

use crate::domain::errors::PlatformError;
use crate::domain::models::CredentialRecord;

/// Port for listing credentials stored on the analytics platform.
///
/// Implementations return records in the order the platform provides them;
/// callers rely on that order and must not re-sort.
#[async_trait]
pub trait CredentialCatalog: Send + Sync {
    /// List every credential visible to the bearer of `token`.
    async fn list_credentials(&self, token: &str) -> Result<Vec<CredentialRecord>, PlatformError>;
}

#[async_trait]
impl<T: CredentialCatalog + ?Sized> CredentialCatalog for &T {
    async fn list_credentials(&self, token: &str) -> Result<Vec<CredentialRecord>, PlatformError> {
        (**self).list_credentials(token).await
    }
}
