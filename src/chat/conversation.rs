use crate::chat::error::ChatError;
use crate::chat::models::{Message, Role};

/// Append-only chat history. The first entry is always the system
/// instruction given at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self { messages: vec![Message::system(system_instruction)] }
    }

    /// Appends a user turn. Input is trimmed; blank input is rejected.
    pub fn push_user(&mut self, text: &str) -> Result<&Message, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        Ok(self.append(Message::user(text)))
    }

    pub fn push_reply(&mut self, reply: Message) -> &Message {
        debug_assert_eq!(reply.role, Role::Assistant);
        self.append(reply)
    }

    fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_only_the_system_instruction() {
        let conversation = Conversation::new("Be brief.");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0], Message::system("Be brief."));
    }

    #[test]
    fn user_text_is_trimmed_before_append() {
        let mut conversation = Conversation::new("sys");
        let appended = conversation.push_user("  Hello \n").unwrap().clone();
        assert_eq!(appended, Message::user("Hello"));
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn blank_user_text_is_rejected() {
        let mut conversation = Conversation::new("sys");
        for text in ["", "   ", "\n\t "] {
            assert_eq!(conversation.push_user(text), Err(ChatError::EmptyInput));
        }
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut conversation = Conversation::new("sys");
        conversation.push_user("again").unwrap();
        conversation.push_reply(Message::assistant("ok"));
        conversation.push_user("again").unwrap();

        let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
        assert_eq!(conversation.messages().last(), Some(&Message::user("again")));
        assert_eq!(conversation.messages()[0], Message::system("sys"));
    }
}
