//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use url::Url;

/// Main client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub api: EndpointConfig,
    pub web: WebConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Remote AMA service endpoints
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Base URL of the REST API, e.g. `http://localhost:8080/api`
    pub rest_url: String,
    /// Base URL of the room sockets, e.g. `ws://localhost:8080/subscribe`
    pub ws_url: String,
}

/// Web front end used for share links
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub base_url: String,
}

impl WebConfig {
    /// Shareable link to a room
    #[must_use]
    pub fn room_url(&self, room_id: &str) -> String {
        format!("{}/room/{room_id}", self.base_url)
    }
}

// Default value functions
fn default_app_name() -> String {
    "ama".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_rest_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_ws_url() -> String {
    "ws://localhost:8080/subscribe".to_string()
}

fn default_web_url() -> String {
    "http://localhost:5173".to_string()
}

/// Validate a base URL and strip trailing slashes
fn normalize_url(
    var: &'static str,
    raw: &str,
    schemes: &[&str],
) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue(var, e.to_string()))?;

    if !schemes.contains(&url.scheme()) {
        return Err(ConfigError::InvalidValue(
            var,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(trimmed.to_string())
}

const HTTP_SCHEMES: &[&str] = &["http", "https"];
const WS_SCHEMES: &[&str] = &["ws", "wss"];

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: EndpointConfig {
                rest_url: normalize_url(
                    "AMA_API_URL",
                    &lookup("AMA_API_URL").unwrap_or_else(default_rest_url),
                    HTTP_SCHEMES,
                )?,
                ws_url: normalize_url(
                    "AMA_WS_URL",
                    &lookup("AMA_WS_URL").unwrap_or_else(default_ws_url),
                    WS_SCHEMES,
                )?,
            },
            web: WebConfig {
                base_url: normalize_url(
                    "AMA_WEB_URL",
                    &lookup("AMA_WEB_URL").unwrap_or_else(default_web_url),
                    HTTP_SCHEMES,
                )?,
            },
        })
    }

    /// Override the REST base URL (command line flag)
    pub fn with_rest_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api.rest_url = normalize_url("--api-url", raw, HTTP_SCHEMES)?;
        Ok(self)
    }

    /// Override the WebSocket base URL (command line flag)
    pub fn with_ws_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api.ws_url = normalize_url("--ws-url", raw, WS_SCHEMES)?;
        Ok(self)
    }

    /// Override the web base URL used for share links (command line flag)
    pub fn with_web_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.web.base_url = normalize_url("--web-url", raw, HTTP_SCHEMES)?;
        Ok(self)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
