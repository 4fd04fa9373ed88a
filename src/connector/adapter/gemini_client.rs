use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::GenerationService;
use crate::domain::{DomainError, GenerateRequest};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const API_VERSION_PATH: &str = "/v1beta/models";
const GENERATE_ACTION: &str = "generateContent";

/// HTTP client for the provider's single `generateContent` endpoint.
///
/// The API key travels as the `key` query parameter. No timeout is set
/// beyond reqwest's defaults, and failed calls are not retried.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL without the key, e.g.
    /// `https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent`.
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
        base_url: impl AsRef<str>,
    ) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        let url = format!(
            "{base}{API_VERSION_PATH}/{}:{GENERATE_ACTION}",
            model.as_ref()
        );
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Endpoint URL, without credentials (safe to log).
    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, text: &str) -> Result<Value, DomainError> {
        let request = GenerateRequest::from_text(text);

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::upstream(format!(
                "GeminiClient: API returned {status}: {body}"
            )));
        }

        let raw = response.text().await.map_err(|e| {
            DomainError::upstream(format!("GeminiClient: failed to read response: {e}"))
        })?;

        debug!("GeminiClient: received response from {}", self.url);

        // A successful call with an unreadable body has no reply text; the
        // extractor turns `Null` into the placeholder.
        match serde_json::from_str(&raw) {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("GeminiClient: response body is not JSON: {}", e);
                Ok(Value::Null)
            }
        }
    }
}
