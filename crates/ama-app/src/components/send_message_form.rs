//! Question input

use ama_common::AppResult;
use ama_core::{AmaApi, MessageId, RoomId};
use std::sync::Arc;

use super::require_room_id;
use crate::context::AppContext;
use crate::notify::Notifier;

/// Posts questions to a room
///
/// The new question is not added locally; it shows up when the server pushes
/// `message_created`.
pub struct SendMessageForm {
    room_id: RoomId,
    api: Arc<dyn AmaApi>,
    notifier: Arc<dyn Notifier>,
}

impl SendMessageForm {
    pub fn new(ctx: &AppContext, room_id: Option<RoomId>) -> AppResult<Self> {
        Ok(Self {
            room_id: require_room_id(room_id)?,
            api: Arc::clone(&ctx.api),
            notifier: Arc::clone(&ctx.notifier),
        })
    }

    /// Submit a question
    ///
    /// Blank input is ignored. Failures are shown as a toast.
    pub async fn submit(&self, text: &str) -> Option<MessageId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        match self.api.create_message(&self.room_id, text).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(room_id = %self.room_id, error = %e, "Failed to post question");
                self.notifier.error(&e.to_string());
                None
            }
        }
    }
}
