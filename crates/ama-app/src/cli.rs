//! Command line interface

use ama_common::{AppResult, ClientConfig};
use ama_core::RoomId;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncWrite, Lines};

use crate::app::App;
use crate::routes::Route;

#[derive(Debug, Parser)]
#[command(name = "ama")]
#[command(about = "Live Ask Me Anything rooms in the terminal")]
pub struct Cli {
    /// REST API base URL (overrides AMA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Room socket base URL (overrides AMA_WS_URL)
    #[arg(long, global = true)]
    pub ws_url: Option<String>,

    /// Web front end base URL used for share links (overrides AMA_WEB_URL)
    #[arg(long, global = true)]
    pub web_url: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "AMA_JSON_LOGS")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a room; prompts for the theme when none is given
    Create {
        theme: Option<String>,
        /// Print the room link instead of entering the room
        #[arg(long)]
        no_enter: bool,
    },

    /// Enter an existing room
    Room { room_id: String },

    /// Open a front end path, e.g. `/room/<id>`
    Open { path: String },

    /// List rooms
    Rooms,
}

impl Cli {
    /// Apply the URL flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: ClientConfig) -> AppResult<ClientConfig> {
        let mut config = config;
        if let Some(url) = &self.api_url {
            config = config.with_rest_url(url)?;
        }
        if let Some(url) = &self.ws_url {
            config = config.with_ws_url(url)?;
        }
        if let Some(url) = &self.web_url {
            config = config.with_web_url(url)?;
        }
        Ok(config)
    }

    /// Route the front end starts at, if the command is page navigation
    pub fn start_route(&self) -> AppResult<Option<Route>> {
        match &self.command {
            None => Ok(Some(Route::CreateRoom)),
            Some(Command::Room { room_id }) => Ok(Some(Route::room(RoomId::from(room_id.as_str())))),
            Some(Command::Open { path }) => Route::parse(path).map(Some),
            Some(Command::Create { .. } | Command::Rooms) => Ok(None),
        }
    }

    /// Run the command
    ///
    /// Returns `false` when the command did not do its job, e.g. no room was
    /// created.
    pub async fn execute<R, W>(&self, app: &App, lines: &mut Lines<R>, out: &mut W) -> AppResult<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        match &self.command {
            Some(Command::Create { theme, no_enter }) => {
                app.create(theme.as_deref(), !*no_enter, lines, out).await
            }
            Some(Command::Rooms) => {
                app.list_rooms(out).await?;
                Ok(true)
            }
            _ => {
                if let Some(route) = self.start_route()? {
                    app.run(route, lines, out).await?;
                }
                Ok(true)
            }
        }
    }
}
