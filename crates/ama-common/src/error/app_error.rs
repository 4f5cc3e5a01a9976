//! Application error types
//!
//! Unified error handling for the front end. The `Display` output is what the
//! user sees in a toast.

use ama_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Routing errors
    #[error("Missing route parameter: {0}")]
    MissingRouteParam(&'static str),

    #[error("No page matches path: {0}")]
    UnknownRoute(String),

    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Terminal I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Domain and remote API errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get a stable error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRouteParam(_) => "MISSING_ROUTE_PARAM",
            Self::UnknownRoute(_) => "UNKNOWN_ROUTE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Io(_) => "IO_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
