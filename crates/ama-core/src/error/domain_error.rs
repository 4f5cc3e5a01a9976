//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MessageId, RoomId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Remote API Errors
    // =========================================================================
    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never got an answer
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a body we could not decode
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::WebSocket(_) => "WEBSOCKET_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound(_) | Self::MessageNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if the server rejected the request
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }
}
