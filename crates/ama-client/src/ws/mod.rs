//! Room WebSocket subscription

mod subscriber;

pub use subscriber::{RoomSubscriber, RoomSubscription};
