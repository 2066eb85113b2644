use crate::chat::{ChatMessage, MessageContent};
use crate::constants::{HISTORY_LIMIT, HISTORY_RETAIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    NonEmpty,
}

/// Rolling user/assistant log sent ahead of every text request.
#[derive(Debug, Default, Clone)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one prompt/response pair. Once the log holds more than
    /// `HISTORY_LIMIT` entries it is cut down to the newest `HISTORY_RETAIN`.
    pub fn append_exchange(&mut self, prompt: impl Into<MessageContent>, response_text: String) {
        self.messages.push(ChatMessage::user(prompt));
        self.messages.push(ChatMessage::assistant(response_text));

        if self.messages.len() > HISTORY_LIMIT {
            let excess = self.messages.len() - HISTORY_RETAIN;
            self.messages.drain(..excess);
            log::debug!("history trimmed to {} entries", self.messages.len());
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn snapshot_for_request(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    pub fn state(&self) -> HistoryState {
        if self.messages.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::NonEmpty
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
