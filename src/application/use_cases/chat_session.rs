use tracing::{debug, warn};

use crate::application::ChatBackend;
use crate::domain::{Conversation, DomainError, Message};

/// Bot message shown when the proxy answers without a usable `reply`.
pub const INVALID_REPLY_MESSAGE: &str = "Oops! The chatbot didn't return a valid reply.";

/// Bot message and error banner shown when the proxy cannot be reached.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to the chatbot. Please try again later.";

/// Client-side chat state, mutated only through the operations below.
///
/// A submission is split in two halves so a UI can issue the request in the
/// background: [`begin_submit`](Self::begin_submit) performs the optimistic
/// append and marks the session busy, then exactly one of
/// [`receive`](Self::receive) or [`fail`](Self::fail) settles it.
/// While busy, further submissions are ignored.
#[derive(Debug, Default)]
pub struct ChatSession {
    conversation: Conversation,
    pending_input: String,
    busy: bool,
    last_error: Option<String>,
}

/// Read-only view of a [`ChatSession`] for rendering.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub messages: &'a [Message],
    pub pending_input: &'a str,
    pub busy: bool,
    pub last_error: Option<&'a str>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            messages: self.conversation.messages(),
            pending_input: &self.pending_input,
            busy: self.busy,
            last_error: self.last_error.as_deref(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn push_input(&mut self, c: char) {
        self.pending_input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.pending_input.pop();
    }

    /// Starts a submission of `text`.
    ///
    /// Returns the trimmed payload to send, or `None` when the text is blank
    /// or a previous submission is still in flight. In both of those cases
    /// the session is left untouched.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if self.busy {
            debug!("Ignoring submit while a request is in flight");
            return None;
        }

        let message = match validate_input(text) {
            Ok(message) => message,
            Err(_) => return None,
        };

        self.conversation.push(Message::user(message.clone()));
        self.pending_input.clear();
        self.busy = true;
        self.last_error = None;

        Some(message)
    }

    /// Starts a submission of whatever is currently typed.
    pub fn submit_pending(&mut self) -> Option<String> {
        let text = self.pending_input.clone();
        self.begin_submit(&text)
    }

    /// Settles the in-flight submission with the proxy's reply field.
    pub fn receive(&mut self, reply: Option<String>) {
        let message = match reply {
            Some(text) => Message::bot(text),
            None => {
                warn!("Proxy response had no reply field");
                Message::bot(INVALID_REPLY_MESSAGE)
            }
        };
        self.conversation.push(message);
        self.busy = false;
    }

    /// Settles the in-flight submission after a transport failure.
    pub fn fail(&mut self, error: &DomainError) {
        warn!("Error fetching chatbot reply: {}", error);
        self.conversation.push(Message::bot(CONNECTION_ERROR_MESSAGE));
        self.last_error = Some(CONNECTION_ERROR_MESSAGE.to_string());
        self.busy = false;
    }

    pub fn resolve(&mut self, result: Result<Option<String>, DomainError>) {
        match result {
            Ok(reply) => self.receive(reply),
            Err(e) => self.fail(&e),
        }
    }

    /// Full request/reply cycle against `backend`.
    ///
    /// Returns `false` when the submission was ignored.
    pub async fn submit(&mut self, backend: &dyn ChatBackend, text: &str) -> bool {
        let Some(message) = self.begin_submit(text) else {
            return false;
        };

        let result = backend.send(&message).await;
        self.resolve(result);
        true
    }
}

/// Trims `text`, rejecting it when nothing is left.
pub fn validate_input(text: &str) -> Result<String, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    Ok(trimmed.to_string())
}
