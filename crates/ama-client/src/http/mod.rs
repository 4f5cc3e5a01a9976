//! REST client
//!
//! One [`ApiClient`] serves both the room and the message endpoints. Calls are
//! fire-and-await: no retries, no timeouts. A non-success status is reported
//! with the plain-text body the server sent along.

mod messages;
mod rooms;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// HTTP client for the AMA REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`, e.g. `http://localhost:8080/api`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL of an endpoint below the base URL
    ///
    /// Segments are percent-encoded, so ids can never escape their position.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode the JSON body of a successful response
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "API request rejected");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}
