use std::sync::Arc;

use tracing::{debug, error};

use crate::application::GenerationService;
use crate::domain::{extract_reply_text, DomainError};

/// Stateless relay: validate the message, forward it, extract the reply.
pub struct RelayMessageUseCase {
    generator: Arc<dyn GenerationService>,
}

impl RelayMessageUseCase {
    pub fn new(generator: Arc<dyn GenerationService>) -> Self {
        Self { generator }
    }

    /// Returns the reply text for `message`.
    ///
    /// An absent or empty message fails with [`DomainError::MissingField`]
    /// before the provider is contacted. A provider failure is logged here
    /// and surfaced as a bare [`DomainError::UpstreamFailure`], so callers
    /// never see the underlying cause.
    pub async fn execute(&self, message: Option<&str>) -> Result<String, DomainError> {
        let message = message
            .filter(|m| !m.is_empty())
            .ok_or_else(|| DomainError::missing_field("message"))?;

        debug!("Relaying message ({} bytes)", message.len());

        let response = self.generator.generate(message).await.map_err(|e| {
            error!("Generation API call failed: {}", e);
            DomainError::upstream("generation call failed")
        })?;

        Ok(extract_reply_text(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_RESPONSE_PLACEHOLDER;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedGenerator {
        response: Result<Value, String>,
        calls: AtomicUsize,
        last_text: Mutex<Option<String>>,
    }

    impl ScriptedGenerator {
        fn ok(response: Value) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(response),
                calls: AtomicUsize::new(0),
                last_text: Mutex::new(None),
            })
        }

        fn failing(cause: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Err(cause.to_string()),
                calls: AtomicUsize::new(0),
                last_text: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GenerationService for ScriptedGenerator {
        async fn generate(&self, text: &str) -> Result<Value, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_text.lock().unwrap() = Some(text.to_string());
            self.response.clone().map_err(DomainError::upstream)
        }
    }

    #[tokio::test]
    async fn test_missing_message_skips_provider() {
        let generator = ScriptedGenerator::ok(json!({}));
        let use_case = RelayMessageUseCase::new(generator.clone());

        let err = use_case.execute(None).await.unwrap_err();
        assert!(err.is_missing_field());

        let err = use_case.execute(Some("")).await.unwrap_err();
        assert!(err.is_missing_field());

        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_forwards_message_and_extracts_reply() {
        let generator =
            ScriptedGenerator::ok(json!({"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}));
        let use_case = RelayMessageUseCase::new(generator.clone());

        let reply = use_case.execute(Some("hello")).await.unwrap();

        assert_eq!(reply, "Hi there");
        assert_eq!(generator.last_text.lock().unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_empty_candidates_use_placeholder() {
        let generator = ScriptedGenerator::ok(json!({"candidates": []}));
        let use_case = RelayMessageUseCase::new(generator);

        let reply = use_case.execute(Some("hello")).await.unwrap();
        assert_eq!(reply, NO_RESPONSE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_provider_failure_hides_cause() {
        let generator = ScriptedGenerator::failing("API key not valid: secret-detail");
        let use_case = RelayMessageUseCase::new(generator);

        let err = use_case.execute(Some("hello")).await.unwrap_err();
        assert!(matches!(err, DomainError::UpstreamFailure(_)));
        assert!(!err.to_string().contains("secret-detail"));
    }
}
