//! Conversation and notepad message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message in an agent's conversation history.
///
/// Immutable once appended; display order is the append order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            at: Utc::now(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            at: Utc::now(),
        }
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A saved assistant output, filed under the category of the agent that
/// produced it. Buckets are append-only and keep duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotepadEntry {
    pub category: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}
