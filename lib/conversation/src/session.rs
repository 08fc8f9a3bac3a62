//! Conversation session management.
//!
//! A session is the single linear history behind one agent instance. It
//! lives entirely in memory: created when the agent is constructed,
//! appended to on each successful exchange, dropped with the agent.

use crate::message::Message;
use chrono::{DateTime, Utc};
use pipewright_core::ConversationSessionId;
use serde::{Deserialize, Serialize};

/// A conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: ConversationSessionId,
    /// Messages in this session, oldest first.
    pub messages: Vec<Message>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session last recorded an exchange.
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new, empty session.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: ConversationSessionId::new(),
            messages: Vec::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    /// Adds a message to the session.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.last_active_at = Utc::now();
    }

    /// Records one completed exchange: a user turn and the assistant turn
    /// that answered it, appended together.
    ///
    /// This is the only mutation the agent performs on a successful call,
    /// keeping the history consistent with what the model actually saw.
    pub fn record_exchange(
        &mut self,
        user_content: impl Into<String>,
        assistant_content: impl Into<String>,
    ) {
        self.messages.push(Message::user(user_content));
        self.messages.push(Message::assistant(assistant_content));
        self.last_active_at = Utc::now();
    }

    /// Renders the history as labeled transcript lines for prompt context.
    ///
    /// Each turn becomes one `Human: ...` or `AI: ...` line; an empty
    /// session renders as an empty string.
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut lines = Vec::with_capacity(self.messages.len());
        for message in &self.messages {
            lines.push(format!(
                "{}: {}",
                message.role.transcript_label(),
                message.content
            ));
        }
        lines.join("\n")
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no exchange has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the last message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
