//! Page navigation
//!
//! Starts at a route and follows navigation until the user leaves: the create
//! room page hands over to the room it created, the room page runs until
//! `/quit` or end of input.

use ama_common::AppResult;
use ama_core::RoomId;
use std::fmt::Write as _;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};

use crate::context::AppContext;
use crate::pages::{CreateRoomPage, RoomPage};
use crate::routes::Route;

pub struct App {
    ctx: AppContext,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Run from `route` until the user leaves
    pub async fn run<R, W>(&self, route: Route, lines: &mut Lines<R>, out: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut route = route;
        loop {
            tracing::debug!(route = %route, "Navigating");
            route = match route {
                Route::CreateRoom => match self.create_room(lines, out).await? {
                    Some(next) => next,
                    None => return Ok(()),
                },
                Route::Room { room_id } => return self.enter_room(room_id, lines, out).await,
            };
        }
    }

    /// Prompt for a theme until a room is created or input ends
    async fn create_room<R, W>(&self, lines: &mut Lines<R>, out: &mut W) -> AppResult<Option<Route>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let page = CreateRoomPage::new(&self.ctx);
        loop {
            out.write_all(page.prompt().as_bytes()).await?;
            out.flush().await?;

            let Some(theme) = lines.next_line().await? else {
                return Ok(None);
            };
            if let Some(route) = page.submit(&theme).await {
                return Ok(Some(route));
            }
        }
    }

    /// Create a room, prompting for the theme when none is given
    ///
    /// With `enter` the new room is run; otherwise its path and share link are
    /// printed. Returns `false` when no room was created.
    pub async fn create<R, W>(
        &self,
        theme: Option<&str>,
        enter: bool,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> AppResult<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let route = match theme {
            Some(theme) => CreateRoomPage::new(&self.ctx).submit(theme).await,
            None => self.create_room(lines, out).await?,
        };
        let Some(route) = route else {
            return Ok(false);
        };

        if enter {
            self.run(route, lines, out).await?;
        } else if let Route::Room { room_id: Some(room_id) } = &route {
            let link = format!("{route}\n{}\n", self.ctx.share_url(room_id));
            out.write_all(link.as_bytes()).await?;
            out.flush().await?;
        }
        Ok(true)
    }

    /// Print every room as `id<TAB>theme`
    pub async fn list_rooms<W>(&self, out: &mut W) -> AppResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        let rooms = self.ctx.api.list_rooms().await?;

        let mut listing = String::new();
        for room in &rooms {
            let _ = writeln!(listing, "{}\t{}", room.id, room.theme);
        }
        if rooms.is_empty() {
            listing.push_str("No rooms yet\n");
        }

        out.write_all(listing.as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }

    /// Load a room and run it
    ///
    /// A room that cannot be loaded is an error, not a toast.
    pub async fn enter_room<R, W>(
        &self,
        room_id: Option<RoomId>,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut page = RoomPage::new(&self.ctx, room_id)?;
        page.load().await?;
        page.run(lines, out).await
    }
}
