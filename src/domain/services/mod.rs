//! Domain services containing pure reply-handling logic.

mod reply_extractor;

pub use reply_extractor::*;
