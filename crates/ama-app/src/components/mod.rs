//! Room page components

mod messages;
mod send_message_form;

pub use messages::MessagesView;
pub use send_message_form::SendMessageForm;

use ama_common::{AppError, AppResult};
use ama_core::RoomId;

/// Components cannot work without the room they belong to
fn require_room_id(room_id: Option<RoomId>) -> AppResult<RoomId> {
    match room_id {
        Some(id) if !id.is_blank() => Ok(id),
        _ => Err(AppError::MissingRouteParam("roomID")),
    }
}
