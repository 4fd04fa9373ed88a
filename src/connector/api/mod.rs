pub mod container;
pub mod controller;
pub mod router;

pub use container::{Container, ProxyConfig};
pub use controller::ApiError;
pub use router::{build_router, serve};
