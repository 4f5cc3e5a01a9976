//! Pages of the front end, one per route

mod create_room;
mod room;

pub use create_room::{CreateRoomPage, EMPTY_THEME};
pub use room::RoomPage;
