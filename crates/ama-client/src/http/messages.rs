//! Message endpoints

use ama_core::{ApiResult, DomainError, Message, MessageApi, MessageId, RoomId};
use async_trait::async_trait;
use validator::Validate;

use super::ApiClient;
use crate::dto::{CreateMessageRequest, IdResponse, ReactionCountResponse};
use crate::error::{ClientError, ClientResult};

impl ApiClient {
    async fn post_message(&self, room_id: &RoomId, message: &str) -> ClientResult<MessageId> {
        let request = CreateMessageRequest::new(message);
        request.validate()?;

        let url = self.endpoint(&["rooms", room_id.as_str(), "messages"])?;
        let created: IdResponse<MessageId> =
            self.send(self.http.post(url).json(&request)).await?;

        tracing::info!(room_id = %room_id, message_id = %created.id, "Question posted");
        Ok(created.id)
    }

    async fn get_messages(&self, room_id: &RoomId) -> ClientResult<Vec<Message>> {
        let url = self.endpoint(&["rooms", room_id.as_str(), "messages"])?;
        let messages: Vec<Message> = self.send(self.http.get(url)).await?;

        tracing::debug!(room_id = %room_id, count = messages.len(), "Fetched messages");
        Ok(messages)
    }

    async fn get_one_message(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
    ) -> ClientResult<Message> {
        let url = self.endpoint(&["rooms", room_id.as_str(), "messages", message_id.as_str()])?;
        self.send(self.http.get(url)).await
    }

    async fn react(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        add: bool,
    ) -> ClientResult<i64> {
        let url = self.endpoint(&[
            "rooms",
            room_id.as_str(),
            "messages",
            message_id.as_str(),
            "react",
        ])?;
        let request = if add {
            self.http.patch(url)
        } else {
            self.http.delete(url)
        };
        let response: ReactionCountResponse = self.send(request).await?;

        tracing::debug!(
            room_id = %room_id,
            message_id = %message_id,
            added = add,
            count = response.count,
            "Reaction toggled"
        );
        Ok(response.count)
    }

    async fn patch_answered(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
    ) -> ClientResult<MessageId> {
        let url = self.endpoint(&[
            "rooms",
            room_id.as_str(),
            "messages",
            message_id.as_str(),
            "answer",
        ])?;
        let answered: IdResponse<MessageId> = self.send(self.http.patch(url)).await?;

        tracing::info!(
            room_id = %room_id,
            message_id = %answered.id,
            "Question marked as answered"
        );
        Ok(answered.id)
    }
}

/// Map the server's plain-text "not found" rejections onto domain errors
fn classify(err: ClientError, room_id: &RoomId, message_id: Option<&MessageId>) -> DomainError {
    if let ClientError::Api { status: 400, message } = &err {
        match (message.as_str(), message_id) {
            ("Room not found", _) => return DomainError::RoomNotFound(room_id.clone()),
            ("Message not found", Some(id)) => return DomainError::MessageNotFound(id.clone()),
            _ => {}
        }
    }
    err.into()
}

#[async_trait]
impl MessageApi for ApiClient {
    async fn create_message(&self, room_id: &RoomId, message: &str) -> ApiResult<MessageId> {
        self.post_message(room_id, message)
            .await
            .map_err(|e| classify(e, room_id, None))
    }

    async fn list_messages(&self, room_id: &RoomId) -> ApiResult<Vec<Message>> {
        self.get_messages(room_id)
            .await
            .map_err(|e| classify(e, room_id, None))
    }

    async fn get_message(&self, room_id: &RoomId, message_id: &MessageId) -> ApiResult<Message> {
        self.get_one_message(room_id, message_id)
            .await
            .map_err(|e| classify(e, room_id, Some(message_id)))
    }

    async fn add_reaction(&self, room_id: &RoomId, message_id: &MessageId) -> ApiResult<i64> {
        self.react(room_id, message_id, true)
            .await
            .map_err(|e| classify(e, room_id, Some(message_id)))
    }

    async fn remove_reaction(&self, room_id: &RoomId, message_id: &MessageId) -> ApiResult<i64> {
        self.react(room_id, message_id, false)
            .await
            .map_err(|e| classify(e, room_id, Some(message_id)))
    }

    async fn mark_answered(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
    ) -> ApiResult<MessageId> {
        self.patch_answered(room_id, message_id)
            .await
            .map_err(|e| classify(e, room_id, Some(message_id)))
    }
}
