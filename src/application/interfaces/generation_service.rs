use async_trait::async_trait;
use serde_json::Value;

use crate::domain::DomainError;

/// Sends one block of text to a generative-language provider.
///
/// Implementations return the provider's response as an untyped tree; the
/// caller decides which part of it is the reply. Network errors and
/// non-success statuses are reported as [`DomainError::UpstreamFailure`].
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, text: &str) -> Result<Value, DomainError>;
}
