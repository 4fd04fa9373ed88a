//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Provider calls (reqwest client for the generation endpoint)
//! - Proxy calls (reqwest client for `POST /chat`)
//! - The proxy's own HTTP API (axum)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
