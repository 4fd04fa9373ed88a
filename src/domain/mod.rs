//! # Domain Layer
//!
//! Conversation models, wire payloads, and the reply extraction rules.
//! This layer is independent of HTTP and terminal frameworks.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
