//! Room event kinds
//!
//! Defines the names carried in the `kind` field of every frame.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room event kinds understood by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A question was posted
    MessageCreated,
    /// A question was marked as answered
    MessageAnswered,
    /// Someone reacted to a question
    MessageReactionIncreased,
    /// Someone withdrew a reaction
    MessageReactionDecreased,
}

impl EventKind {
    /// Get the wire name of the event kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageCreated => "message_created",
            Self::MessageAnswered => "message_answered",
            Self::MessageReactionIncreased => "message_reaction_increased",
            Self::MessageReactionDecreased => "message_reaction_decreased",
        }
    }

    /// Parse an event kind from its wire name
    ///
    /// Returns `None` for kinds this client does not know about.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "message_created" => Some(Self::MessageCreated),
            "message_answered" => Some(Self::MessageAnswered),
            "message_reaction_increased" => Some(Self::MessageReactionIncreased),
            "message_reaction_decreased" => Some(Self::MessageReactionDecreased),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
