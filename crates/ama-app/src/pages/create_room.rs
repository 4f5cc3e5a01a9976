//! Create room page (`/`)

use ama_core::AmaApi;
use std::sync::Arc;

use crate::context::AppContext;
use crate::notify::Notifier;
use crate::routes::Route;

/// Shown when the theme is left empty
pub const EMPTY_THEME: &str = "You have to choose a name for your room";

/// Asks for a theme and creates the room
pub struct CreateRoomPage {
    api: Arc<dyn AmaApi>,
    notifier: Arc<dyn Notifier>,
}

impl CreateRoomPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            api: Arc::clone(&ctx.api),
            notifier: Arc::clone(&ctx.notifier),
        }
    }

    pub fn prompt(&self) -> &'static str {
        "Room name: "
    }

    /// Create a room with the given theme
    ///
    /// Returns the route to navigate to on success. An empty theme or a
    /// failed request leaves the user on this page with a toast.
    pub async fn submit(&self, theme: &str) -> Option<Route> {
        let theme = theme.trim();
        if theme.is_empty() {
            self.notifier.error(EMPTY_THEME);
            return None;
        }

        match self.api.create_room(theme).await {
            Ok(room_id) => {
                tracing::info!(room_id = %room_id, theme, "Room created");
                Some(Route::room(room_id))
            }
            Err(e) => {
                tracing::warn!(theme, error = %e, "Failed to create room");
                self.notifier.error(&e.to_string());
                None
            }
        }
    }
}
