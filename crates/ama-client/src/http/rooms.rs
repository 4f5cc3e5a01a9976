//! Room endpoints

use ama_core::{ApiResult, Room, RoomApi, RoomId};
use async_trait::async_trait;
use validator::Validate;

use super::ApiClient;
use crate::dto::{CreateRoomRequest, IdResponse};
use crate::error::ClientResult;

impl ApiClient {
    async fn post_room(&self, theme: &str) -> ClientResult<RoomId> {
        let request = CreateRoomRequest::new(theme);
        request.validate()?;

        let url = self.endpoint(&["rooms"])?;
        let created: IdResponse<RoomId> = self.send(self.http.post(url).json(&request)).await?;

        tracing::info!(room_id = %created.id, theme = %request.theme, "Room created");
        Ok(created.id)
    }

    async fn get_rooms(&self) -> ClientResult<Vec<Room>> {
        let url = self.endpoint(&["rooms"])?;
        let rooms: Vec<Room> = self.send(self.http.get(url)).await?;

        tracing::debug!(count = rooms.len(), "Fetched rooms");
        Ok(rooms)
    }
}

#[async_trait]
impl RoomApi for ApiClient {
    async fn create_room(&self, theme: &str) -> ApiResult<RoomId> {
        Ok(self.post_room(theme).await?)
    }

    async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        Ok(self.get_rooms().await?)
    }
}
