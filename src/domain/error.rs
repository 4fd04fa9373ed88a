use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamFailure(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportFailure(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }

}
