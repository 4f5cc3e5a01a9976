//! Domain entities - core business objects

mod message;
mod room;

pub use message::Message;
pub use room::Room;
