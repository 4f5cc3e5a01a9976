//! Room event frames
//!
//! Every frame pushed on a room socket is a JSON object of the form
//! `{"kind": "<event kind>", "value": {...}}`. Decoding goes through
//! [`EventFrame`] first so that kinds added on the server later are skipped
//! instead of failing the whole stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EventKind;
use crate::value_objects::MessageId;

/// Payload of `message_created`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCreated {
    pub id: MessageId,
    pub message: String,
}

/// Payload of `message_answered`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAnswered {
    pub id: MessageId,
}

/// Payload of `message_reaction_increased` and `message_reaction_decreased`
///
/// `count` is the absolute reaction count after the change, not a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionChanged {
    pub id: MessageId,
    pub count: i64,
}

/// A decoded room event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoomEvent {
    MessageCreated(MessageCreated),
    MessageAnswered(MessageAnswered),
    MessageReactionIncreased(ReactionChanged),
    MessageReactionDecreased(ReactionChanged),
}

impl RoomEvent {
    /// Kind of this event
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MessageCreated(_) => EventKind::MessageCreated,
            Self::MessageAnswered(_) => EventKind::MessageAnswered,
            Self::MessageReactionIncreased(_) => EventKind::MessageReactionIncreased,
            Self::MessageReactionDecreased(_) => EventKind::MessageReactionDecreased,
        }
    }

    /// Id of the message the event refers to
    #[must_use]
    pub fn message_id(&self) -> &MessageId {
        match self {
            Self::MessageCreated(e) => &e.id,
            Self::MessageAnswered(e) => &e.id,
            Self::MessageReactionIncreased(e) | Self::MessageReactionDecreased(e) => &e.id,
        }
    }

    /// Decode a text frame
    ///
    /// Returns `Ok(None)` when the frame carries a kind this client does not know.
    pub fn from_json(json: &str) -> Result<Option<Self>, serde_json::Error> {
        EventFrame::from_json(json)?.into_event()
    }

    /// Serialize to the wire format
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Raw frame as received from the socket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFrame {
    pub kind: String,
    #[serde(default)]
    pub value: Value,
}

impl EventFrame {
    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Known kind of the frame, if any
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_str(&self.kind)
    }

    /// Decode the payload according to the frame kind
    pub fn into_event(self) -> Result<Option<RoomEvent>, serde_json::Error> {
        let Some(kind) = self.kind() else {
            return Ok(None);
        };

        let event = match kind {
            EventKind::MessageCreated => {
                RoomEvent::MessageCreated(serde_json::from_value(self.value)?)
            }
            EventKind::MessageAnswered => {
                RoomEvent::MessageAnswered(serde_json::from_value(self.value)?)
            }
            EventKind::MessageReactionIncreased => {
                RoomEvent::MessageReactionIncreased(serde_json::from_value(self.value)?)
            }
            EventKind::MessageReactionDecreased => {
                RoomEvent::MessageReactionDecreased(serde_json::from_value(self.value)?)
            }
        };

        Ok(Some(event))
    }
}
