mod chat_backend;
mod generation_service;

pub use chat_backend::*;
pub use generation_service::*;
