use crate::chat::conversation::Conversation;
use crate::chat::models::Role;

pub const TYPING_TEXT: &str = "AI is typing...";
pub const FAILURE_TEXT: &str = "Error: Could not get AI response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Ai,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Ai => "AI",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Speaker::You => "chat-line chat-line-user",
            Speaker::Ai => "chat-line chat-line-ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Turn { speaker: Speaker, text: String },
    Typing,
    Failure,
}

/// Projects a conversation into transcript lines. System messages are
/// never shown.
pub fn render(conversation: &Conversation) -> Vec<TranscriptLine> {
    conversation
        .messages()
        .iter()
        .filter_map(|message| {
            let speaker = match message.role {
                Role::User => Speaker::You,
                Role::Assistant => Speaker::Ai,
                Role::System => return None,
            };
            Some(TranscriptLine::Turn { speaker, text: message.content.clone() })
        })
        .collect()
}

/// Remembers the transcript the view was last scrolled for, so re-renders
/// that leave it unchanged (typing in the input) keep the reader's position.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    seen: Option<Vec<TranscriptLine>>,
}

impl ScrollTracker {
    pub fn needs_scroll(&mut self, lines: Vec<TranscriptLine>) -> bool {
        if self.seen.as_ref() == Some(&lines) {
            return false;
        }
        self.seen = Some(lines);
        true
    }

    /// Forget the last transcript, e.g. when the list is unmounted.
    pub fn reset(&mut self) {
        self.seen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::Message;

    fn sample() -> Conversation {
        let mut conversation = Conversation::new("You are a helpful assistant.");
        conversation.push_user("Hello").unwrap();
        conversation.push_reply(Message::assistant("Hi there"));
        conversation.push_user("What is <b>bold</b>?").unwrap();
        conversation
    }

    #[test]
    fn fresh_conversation_renders_nothing() {
        assert!(render(&Conversation::new("secret instruction")).is_empty());
    }

    #[test]
    fn system_message_is_never_rendered() {
        let lines = render(&sample());
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| !matches!(
            line,
            TranscriptLine::Turn { text, .. } if text == "You are a helpful assistant."
        )));
    }

    #[test]
    fn turns_are_labelled_by_speaker_in_order() {
        assert_eq!(
            render(&sample()),
            vec![
                TranscriptLine::Turn { speaker: Speaker::You, text: "Hello".into() },
                TranscriptLine::Turn { speaker: Speaker::Ai, text: "Hi there".into() },
                TranscriptLine::Turn { speaker: Speaker::You, text: "What is <b>bold</b>?".into() },
            ]
        );
        assert_eq!(Speaker::You.label(), "You");
        assert_eq!(Speaker::Ai.label(), "AI");
    }

    #[test]
    fn rendering_twice_gives_the_same_transcript() {
        let conversation = sample();
        let first = render(&conversation);
        let second = render(&conversation);
        assert_eq!(first, second);
    }

    #[test]
    fn scroll_only_when_transcript_changes() {
        let mut tracker = ScrollTracker::default();
        let mut lines = render(&sample());

        assert!(tracker.needs_scroll(lines.clone()));
        assert!(!tracker.needs_scroll(lines.clone()));
        assert!(!tracker.needs_scroll(lines.clone()));

        lines.push(TranscriptLine::Typing);
        assert!(tracker.needs_scroll(lines.clone()));

        // Same length, different last line: the typing indicator became a reply.
        lines.pop();
        lines.push(TranscriptLine::Turn { speaker: Speaker::Ai, text: "Sure".into() });
        assert!(tracker.needs_scroll(lines.clone()));
    }

    #[test]
    fn reset_scrolls_again_for_the_same_transcript() {
        let mut tracker = ScrollTracker::default();
        let lines = render(&sample());
        assert!(tracker.needs_scroll(lines.clone()));
        tracker.reset();
        assert!(tracker.needs_scroll(lines));
    }
}
