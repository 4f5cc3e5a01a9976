//! # ama-core
//!
//! Domain layer containing room and message entities, the room event protocol,
//! the live message feed, and the API traits implemented by the client crate.
//! This crate has zero dependencies on infrastructure (HTTP, WebSocket, terminal).

pub mod entities;
pub mod error;
pub mod events;
pub mod feed;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Message, Room};
pub use error::DomainError;
pub use events::{EventFrame, EventKind, MessageAnswered, MessageCreated, ReactionChanged, RoomEvent};
pub use feed::{apply_event, rank_messages, MessageFeed};
pub use traits::{AmaApi, ApiResult, MessageApi, RoomApi};
pub use value_objects::{MessageId, RoomId};
