//! # Application Layer
//!
//! Use cases coordinating the domain with the provider and proxy connectors.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
