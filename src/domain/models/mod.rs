mod chat_payload;
mod conversation;
mod message;

pub use chat_payload::*;
pub use conversation::*;
pub use message::*;
