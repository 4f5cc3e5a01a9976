//! Request DTOs
//!
//! Inputs are trimmed on construction and validated before they are sent.

use serde::Serialize;
use validator::Validate;

/// Create room request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, message = "Room theme must not be empty"))]
    pub theme: String,
}

impl CreateRoomRequest {
    pub fn new(theme: &str) -> Self {
        Self {
            theme: theme.trim().to_string(),
        }
    }
}

/// Create message request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub message: String,
}

impl CreateMessageRequest {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.trim().to_string(),
        }
    }
}
