//! Shared front end context
//!
//! Everything a page needs: the API, the room subscriber, the toast sink, and
//! the base of share links.

use ama_client::{ApiClient, RoomSubscriber};
use ama_common::{AppResult, ClientConfig, WebConfig};
use ama_core::{AmaApi, DomainError, RoomId};
use std::sync::Arc;

use crate::notify::Notifier;

/// Dependencies handed to every page
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<dyn AmaApi>,
    pub subscriber: RoomSubscriber,
    pub notifier: Arc<dyn Notifier>,
    pub web: WebConfig,
}

impl AppContext {
    /// Build the context from configuration
    pub fn from_config(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        let api = ApiClient::new(&config.api.rest_url).map_err(DomainError::from)?;
        let subscriber = RoomSubscriber::new(&config.api.ws_url).map_err(DomainError::from)?;

        Ok(Self {
            api: Arc::new(api),
            subscriber,
            notifier,
            web: config.web.clone(),
        })
    }

    /// Shareable link to a room
    pub fn share_url(&self, room_id: &RoomId) -> String {
        self.web.room_url(room_id.as_str())
    }
}
