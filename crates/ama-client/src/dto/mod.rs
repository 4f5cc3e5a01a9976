//! Request and response bodies of the REST API

mod requests;
mod responses;

pub use requests::{CreateMessageRequest, CreateRoomRequest};
pub use responses::{IdResponse, ReactionCountResponse};
