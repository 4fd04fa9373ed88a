pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;
pub mod tui;

pub use cli::Commands;

pub use application::{
    ChatBackend, ChatSession, GenerationService, RelayMessageUseCase, SessionSnapshot,
    CONNECTION_ERROR_MESSAGE, INVALID_REPLY_MESSAGE,
};

pub use connector::{
    build_router, serve, ApiError, Container, GeminiClient, ProxyClient, ProxyConfig,
};

pub use domain::{
    extract_reply_text, ChatReply, ChatRequest, Conversation, DomainError, ErrorBody, Message,
    Sender, NO_RESPONSE_PLACEHOLDER, WELCOME_MESSAGE,
};
