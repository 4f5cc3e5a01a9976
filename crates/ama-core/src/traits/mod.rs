//! API traits (ports) - what the front end needs from the remote service

mod api;

pub use api::{AmaApi, ApiResult, MessageApi, RoomApi};
