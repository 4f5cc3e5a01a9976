//! Route table
//!
//! | Path             | Page        |
//! |------------------|-------------|
//! | `/`              | create room |
//! | `/room/:roomID`  | room        |

use ama_common::{AppError, AppResult};
use ama_core::RoomId;
use std::fmt;

/// A page of the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    CreateRoom,
    /// `/room/:roomID`
    Room { room_id: Option<RoomId> },
}

impl Route {
    /// Route to an existing room
    pub fn room(room_id: RoomId) -> Self {
        Self::Room {
            room_id: Some(room_id),
        }
    }

    /// Match a path against the route table
    ///
    /// `/room/` matches the room page without its parameter; the page itself
    /// rejects it.
    pub fn parse(path: &str) -> AppResult<Self> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .collect();

        match segments.as_slice() {
            [""] => Ok(Self::CreateRoom),
            ["room"] => Ok(Self::Room { room_id: None }),
            ["room", id] => Ok(Self::Room {
                room_id: Some(RoomId::from(*id)),
            }),
            _ => Err(AppError::UnknownRoute(trimmed.to_string())),
        }
    }

    /// Path of the route
    pub fn path(&self) -> String {
        match self {
            Self::CreateRoom => "/".to_string(),
            Self::Room { room_id: Some(id) } => format!("/room/{id}"),
            Self::Room { room_id: None } => "/room/".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
