//! Response DTOs

use serde::Deserialize;

/// `{"id": ...}` returned by create and answer endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct IdResponse<T> {
    pub id: T,
}

/// `{"count": ...}` returned by the react endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReactionCountResponse {
    pub count: i64,
}
