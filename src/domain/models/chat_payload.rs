use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
///
/// `message` stays optional so an absent field can be reported as a
/// client error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The message, if present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Successful `POST /chat` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Error body returned by the proxy on 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Provider request: `{"contents": [{"parts": [{"text": ...}]}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<GenerateContent<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContent<'a> {
    pub parts: Vec<GeneratePart<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratePart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    /// Wraps a single block of text the way the provider expects.
    pub fn from_text(text: &'a str) -> Self {
        Self {
            contents: vec![GenerateContent {
                parts: vec![GeneratePart { text }],
            }],
        }
    }
}
