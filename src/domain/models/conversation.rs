use super::Message;

/// Synthetic bot message every session starts with.
pub const WELCOME_MESSAGE: &str = "Welcome! How can I help you today?";

/// Ordered, append-only sequence of messages for one session.
///
/// Order is the order in which messages were appended, so the newest entry
/// is always last.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::bot(WELCOME_MESSAGE)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sender;

    #[test]
    fn test_new_conversation_is_seeded_with_welcome() {
        let conversation = Conversation::new();

        assert_eq!(conversation.len(), 1);
        let first = conversation.latest().unwrap();
        assert_eq!(first.text(), WELCOME_MESSAGE);
        assert_eq!(first.sender(), Sender::Bot);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut conversation = Conversation::new();
        conversation.push(Message::user("first"));
        conversation.push(Message::bot("second"));

        let texts: Vec<_> = conversation.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec![WELCOME_MESSAGE, "first", "second"]);
        assert_eq!(conversation.latest().map(|m| m.text()), Some("second"));
    }
}
