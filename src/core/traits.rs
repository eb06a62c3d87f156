use async_trait::async_trait;

use super::{error::FoundryError, types::BearerToken};

/// Source of the bearer credential attached to every completion request.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Short name used in logs and aggregated errors.
    fn name(&self) -> &'static str;

    async fn resolve(&self) -> Result<BearerToken, FoundryError>;
}
