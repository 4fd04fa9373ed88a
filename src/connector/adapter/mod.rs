mod gemini_client;
mod proxy_client;

pub use gemini_client::*;
pub use proxy_client::*;
