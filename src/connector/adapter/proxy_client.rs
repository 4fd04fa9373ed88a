use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::ChatBackend;
use crate::domain::{ChatRequest, DomainError};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5050";
const CHAT_PATH: &str = "/chat";

/// HTTP client for the proxy's `POST /chat` endpoint.
pub struct ProxyClient {
    client: reqwest::Client,
    url: String,
}

impl ProxyClient {
    pub fn new(server_url: impl AsRef<str>) -> Self {
        let base = server_url.as_ref().trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            url: format!("{base}{CHAT_PATH}"),
        }
    }

    /// The `reply` field of a response body, when it is a non-empty string.
    fn reply_field(body: &Value) -> Option<String> {
        body.get("reply")
            .and_then(Value::as_str)
            .filter(|reply| !reply.is_empty())
            .map(String::from)
    }
}

impl Default for ProxyClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[async_trait]
impl ChatBackend for ProxyClient {
    async fn send(&self, message: &str) -> Result<Option<String>, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("request to {} failed: {e}", self.url)))?;

        if !response.status().is_success() {
            return Err(DomainError::transport(format!(
                "HTTP error! status: {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::transport(format!("invalid response body: {e}")))?;

        debug!("ProxyClient: received response from {}", self.url);

        Ok(Self::reply_field(&body))
    }
}
