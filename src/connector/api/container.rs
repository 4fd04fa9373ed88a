use std::sync::Arc;

use tracing::debug;

use crate::application::{GenerationService, RelayMessageUseCase};
use crate::connector::adapter::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::domain::DomainError;

pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Proxy settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    /// Builds the configuration from the process environment:
    ///
    /// | Variable          | Default                                      |
    /// |-------------------|----------------------------------------------|
    /// | `GEMINI_API_KEY`  | required                                     |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  |
    /// | `GEMINI_MODEL`    | `gemini-2.0-flash`                           |
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| DomainError::config("GEMINI_API_KEY is not set"))?;

        let base_url = lookup("GEMINI_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup("GEMINI_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Bind to every interface instead of loopback only.
    pub fn with_public(mut self, public: bool) -> Self {
        self.host = if public { "0.0.0.0" } else { DEFAULT_HOST }.to_string();
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub struct Container {
    relay_use_case: RelayMessageUseCase,
}

impl Container {
    pub fn new(config: &ProxyConfig) -> Self {
        let client = GeminiClient::new(&config.api_key, &config.model, &config.base_url);
        debug!("Using generation endpoint {}", client.endpoint());

        let generator: Arc<dyn GenerationService> = Arc::new(client);
        Self {
            relay_use_case: RelayMessageUseCase::new(generator),
        }
    }

    pub fn relay_use_case(&self) -> &RelayMessageUseCase {
        &self.relay_use_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_fails_fast() {
        let err = ProxyConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));

        let err = ProxyConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = ProxyConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "abc")])).unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_addr(), "127.0.0.1:5050");
    }

    #[test]
    fn overrides_are_honoured() {
        let config = ProxyConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_BASE_URL", "http://localhost:9999"),
            ("GEMINI_MODEL", "gemini-pro"),
        ]))
        .unwrap()
        .with_port(8080)
        .with_public(true);

        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }
}
