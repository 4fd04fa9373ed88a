mod chat_session;
mod relay_message;

pub use chat_session::*;
pub use relay_message::*;
