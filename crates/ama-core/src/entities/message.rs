//! Message entity - a question asked in a room

use serde::{Deserialize, Serialize};

use crate::value_objects::{MessageId, RoomId};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub room_id: RoomId,
    pub message: String,
    pub reaction_count: i64,
    pub answered: bool,
}

impl Message {
    /// Create a freshly posted message: no reactions, not answered
    pub fn new(id: MessageId, room_id: RoomId, message: impl Into<String>) -> Self {
        Self {
            id,
            room_id,
            message: message.into(),
            reaction_count: 0,
            answered: false,
        }
    }

    /// Answered questions no longer accept reactions
    #[inline]
    pub fn can_react(&self) -> bool {
        !self.answered
    }

    /// Mark the message as answered
    pub fn mark_answered(&mut self) {
        self.answered = true;
    }

    /// Overwrite the reaction count with a server-provided snapshot
    pub fn set_reaction_count(&mut self, count: i64) {
        self.reaction_count = count;
    }
}
