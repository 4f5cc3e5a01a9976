//! API traits (ports) - define the interface to the AMA service
//!
//! The domain layer defines what it needs, and the client crate provides
//! the HTTP implementation.

use async_trait::async_trait;

use crate::entities::{Message, Room};
use crate::error::DomainError;
use crate::value_objects::{MessageId, RoomId};

/// Result type for API operations
pub type ApiResult<T> = Result<T, DomainError>;

// ============================================================================
// Room API
// ============================================================================

#[async_trait]
pub trait RoomApi: Send + Sync {
    /// Create a room and return its id
    async fn create_room(&self, theme: &str) -> ApiResult<RoomId>;

    /// List all rooms
    async fn list_rooms(&self) -> ApiResult<Vec<Room>>;
}

// ============================================================================
// Message API
// ============================================================================

#[async_trait]
pub trait MessageApi: Send + Sync {
    /// Post a question to a room and return its id
    async fn create_message(&self, room_id: &RoomId, message: &str) -> ApiResult<MessageId>;

    /// List the questions of a room
    async fn list_messages(&self, room_id: &RoomId) -> ApiResult<Vec<Message>>;

    /// Fetch a single question
    async fn get_message(&self, room_id: &RoomId, message_id: &MessageId) -> ApiResult<Message>;

    /// React to a question, returning the new reaction count
    async fn add_reaction(&self, room_id: &RoomId, message_id: &MessageId) -> ApiResult<i64>;

    /// Withdraw a reaction, returning the new reaction count
    async fn remove_reaction(&self, room_id: &RoomId, message_id: &MessageId) -> ApiResult<i64>;

    /// Mark a question as answered
    async fn mark_answered(&self, room_id: &RoomId, message_id: &MessageId)
        -> ApiResult<MessageId>;
}

/// The full AMA service surface
pub trait AmaApi: RoomApi + MessageApi {}

impl<T: RoomApi + MessageApi> AmaApi for T {}
