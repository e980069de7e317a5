//! Transcript-related types.

use ncd_assist_engine::SourceRef;
use serde::{Deserialize, Serialize};

/// The author of a transcript message.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person asking questions.
    User,
    /// The engine-generated reply.
    Assistant,
}

/// One transcript entry.
///
/// Entries are immutable once appended; a `[k]` marker in an assistant
/// message's content always refers to `sources[k - 1]` of that same
/// message, never across messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Who authored this message.
    pub role: Role,
    /// The message text. Assistant messages may contain inline `[k]`
    /// citation markers.
    pub content: String,
    /// Evidence behind an assistant message, in citation order. Always
    /// empty for user messages.
    pub sources: Vec<SourceRef>,
}

impl Message {
    /// Creates a user message.
    #[inline]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Creates an assistant message with its supporting sources.
    #[inline]
    pub fn assistant<S: Into<String>>(
        content: S,
        sources: Vec<SourceRef>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }
}

/// The ordered history of messages for one session.
///
/// Grows strictly chronologically, one entry per completed
/// turn-component; cleared only by an explicit reset.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<Message>,
}

impl Transcript {
    /// Returns the entries in append order.
    #[inline]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the transcript has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub(crate) fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
