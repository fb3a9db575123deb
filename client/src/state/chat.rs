//! Chat widget state: window visibility, transcript and the send lifecycle.
//!
//! A send is split in two so the component can await the request between
//! the halves: [`ChatState::begin_send`] records the user message and locks
//! the input, [`ChatState::finish_send`] appends the reply (or the fallback)
//! and unlocks it.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const CHAT_FALLBACK: &str = "Sorry, I encountered an error. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier class for a message bubble.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "chat-message user-message",
            Self::Bot => "chat-message bot-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    /// A request is in flight; input and send button are disabled.
    pub pending: bool,
}

impl ChatState {
    /// Flip window visibility. Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Start a send. Returns the trimmed text to post, or `None` when the
    /// input is blank or a request is already pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if self.pending {
            return None;
        }
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage { text: text.to_owned(), sender: Sender::User });
        self.pending = true;
        Some(text.to_owned())
    }

    /// Finish a send with the reply text or the fallback on failure.
    pub fn finish_send<E>(&mut self, result: Result<String, E>) {
        let text = result.unwrap_or_else(|_| CHAT_FALLBACK.to_owned());
        self.messages.push(ChatMessage { text, sender: Sender::Bot });
        self.pending = false;
    }
}
