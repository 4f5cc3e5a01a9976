//! Room events - server-pushed notifications about message mutations

mod event_kind;
mod room_event;

pub use event_kind::EventKind;
pub use room_event::{EventFrame, MessageAnswered, MessageCreated, ReactionChanged, RoomEvent};
