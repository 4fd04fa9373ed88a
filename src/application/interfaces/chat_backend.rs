use async_trait::async_trait;

use crate::domain::DomainError;

/// The client's view of the proxy's chat endpoint.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends `message` and returns the `reply` field of a successful
    /// response, or `None` when the field is absent or empty.
    ///
    /// Non-success statuses, network errors and unparseable bodies are all
    /// [`DomainError::TransportFailure`].
    async fn send(&self, message: &str) -> Result<Option<String>, DomainError>;
}
