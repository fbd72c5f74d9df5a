use log::{debug, info, warn};

use crate::chat::conversation::Conversation;
use crate::chat::error::{ChatError, CompletionError};
use crate::chat::models::Message;
use crate::chat::transcript::{self, TranscriptLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    /// Caption for the trigger button in this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Visibility::Closed => "Chat with AI",
            Visibility::Open => "Close Chat",
        }
    }
}

/// State of one chat widget instance.
///
/// A turn goes through [`ChatController::begin_submit`], which appends the
/// user message and hands back the conversation to send, and then
/// [`ChatController::finish`] with the completion result. Only one turn
/// may be in flight; a failed turn leaves the conversation as it was after
/// the user message and raises a notice until the next turn or until
/// [`ChatController::expire_notice`] is called with the matching id.
#[derive(Debug, Clone)]
pub struct ChatController {
    conversation: Conversation,
    visibility: Visibility,
    in_flight: bool,
    notice: Option<u32>,
    notice_seq: u32,
}

impl ChatController {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::new(system_instruction),
            visibility: Visibility::default(),
            in_flight: false,
            notice: None,
            notice_seq: 0,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        info!("Chat widget {:?}", self.visibility);
        self.visibility
    }

    pub fn begin_submit(&mut self, text: &str) -> Result<Conversation, ChatError> {
        if self.in_flight {
            debug!("Ignoring submission while a reply is pending");
            return Err(ChatError::Busy);
        }
        if let Err(e) = self.conversation.push_user(text) {
            debug!("Ignoring blank submission");
            return Err(e);
        }
        self.in_flight = true;
        self.notice = None;
        Ok(self.conversation.clone())
    }

    /// Settles the pending turn. On failure returns the notice id to hand
    /// back to `expire_notice` together with the error.
    pub fn finish(&mut self, result: Result<Message, CompletionError>) -> Result<(), (u32, ChatError)> {
        self.in_flight = false;
        match result {
            Ok(reply) => {
                let reply = self.conversation.push_reply(reply);
                info!("Received reply ({} chars)", reply.content.chars().count());
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!("Chat completion failed: {}", e);
                self.notice_seq = self.notice_seq.wrapping_add(1);
                self.notice = Some(self.notice_seq);
                Err((self.notice_seq, ChatError::CompletionFailed(e)))
            }
        }
    }

    /// Clears the failure notice if it is still the one identified by `id`.
    pub fn expire_notice(&mut self, id: u32) -> bool {
        if self.notice == Some(id) {
            self.notice = None;
            true
        } else {
            false
        }
    }

    pub fn transcript(&self) -> Vec<TranscriptLine> {
        let mut lines = transcript::render(&self.conversation);
        if self.in_flight {
            lines.push(TranscriptLine::Typing);
        }
        if self.notice.is_some() {
            lines.push(TranscriptLine::Failure);
        }
        lines
    }
}
