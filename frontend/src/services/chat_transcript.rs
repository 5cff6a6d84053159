//! Chat Transcript
//!
//! In-memory message list for the currently selected table, plus how a draft
//! becomes the query that is sent.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    Error,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: usize,
    pub role: MessageRole,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: usize,
}

impl ChatTranscript {
    /// Append a message and return its id
    pub fn push(&mut self, role: MessageRole, content: impl Into<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content: content.into(),
        });
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Trimmed query to send, or `None` when the draft is only whitespace.
///
/// Length limits are the backend's to enforce; its rejection comes back as
/// an error reply like any other.
pub fn prepare_query(draft: &str) -> Option<String> {
    let query = draft.trim();
    (!query.is_empty()).then(|| query.to_string())
}
