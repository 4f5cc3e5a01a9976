//! Room entity - a themed channel collecting questions

use serde::{Deserialize, Serialize};

use crate::value_objects::RoomId;

/// Room entity
///
/// Created through the API and never mutated by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub theme: String,
}

impl Room {
    /// Create a new Room
    pub fn new(id: RoomId, theme: impl Into<String>) -> Self {
        Self {
            id,
            theme: theme.into(),
        }
    }
}
