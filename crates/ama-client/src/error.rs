//! Client error types

use ama_core::DomainError;

/// Errors raised while talking to the AMA service
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();

        Self::Validation(messages.join(", "))
    }
}

impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_decode() => DomainError::Decode(e.to_string()),
            ClientError::Http(e) => DomainError::Transport(e.to_string()),
            ClientError::Api { status, message } => DomainError::Api { status, message },
            ClientError::InvalidUrl(url) => DomainError::InternalError(format!("invalid URL {url}")),
            ClientError::Validation(message) => DomainError::ValidationError(message),
            ClientError::WebSocket(e) => DomainError::WebSocket(e.to_string()),
        }
    }
}
