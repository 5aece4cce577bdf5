use async_trait::async_trait;

use crate::domain::errors::ConfigWriteError;
use crate::domain::models::AwsConfigKey;

/// Port for persisting a single AWS CLI setting.
///
/// Each call is independent. Errors are reported to the caller, which
/// decides whether a failed write is fatal; by default the propagator
/// logs and ignores them.
#[async_trait]
pub trait ConfigWriter: Send + Sync {
    async fn set(&self, key: AwsConfigKey, value: &str) -> Result<(), ConfigWriteError>;
}

#[async_trait]
impl<T: ConfigWriter + ?Sized> ConfigWriter for &T {
    async fn set(&self, key: AwsConfigKey, value: &str) -> Result<(), ConfigWriteError> {
        (**self).set(key, value).await
    }
}
