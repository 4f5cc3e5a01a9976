//! Room page (`/room/:roomID`)
//!
//! Renders the ranked questions, keeps them live through the room socket, and
//! reads questions and commands from the input stream until `/quit` or EOF.

use ama_common::{AppError, AppResult};
use ama_core::{MessageId, RoomEvent, RoomId};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::mpsc;

use crate::commands::{RoomCommand, HELP};
use crate::components::{MessagesView, SendMessageForm};
use crate::context::AppContext;

pub struct RoomPage {
    ctx: AppContext,
    room_id: RoomId,
    messages: MessagesView,
    form: SendMessageForm,
}

impl RoomPage {
    pub fn new(ctx: &AppContext, room_id: Option<RoomId>) -> AppResult<Self> {
        let messages = MessagesView::new(ctx, room_id)?;
        let room_id = messages.room_id().clone();
        let form = SendMessageForm::new(ctx, Some(room_id.clone()))?;

        Ok(Self {
            ctx: ctx.clone(),
            room_id,
            messages,
            form,
        })
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn messages(&self) -> &MessagesView {
        &self.messages
    }

    pub fn header(&self) -> String {
        format!("Room code: {}", self.room_id)
    }

    /// Show the room link as an info toast and return it
    pub fn share(&self) -> String {
        let url = self.ctx.share_url(&self.room_id);
        self.ctx.notifier.info(&format!("Room link: {url}"));
        url
    }

    /// Initial question load
    pub async fn load(&mut self) -> AppResult<()> {
        self.messages.load().await.map_err(AppError::from)
    }

    /// Header followed by the ranked questions
    pub fn render(&self) -> String {
        format!("\n{}\n\n{}", self.header(), self.messages.render())
    }

    /// Apply a pushed event; returns whether the list changed
    pub fn handle_event(&mut self, event: &RoomEvent) -> bool {
        self.messages.handle_event(event)
    }

    /// Run the room until `/quit` or the input ends
    ///
    /// Without a socket the room still works, it just never updates on its own.
    pub async fn run<R, W>(&mut self, lines: &mut Lines<R>, out: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = match self
            .ctx
            .subscriber
            .subscribe(&self.room_id, move |event| {
                let _ = tx.send(event);
            })
            .await
        {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                tracing::warn!(room_id = %self.room_id, error = %e, "Live updates unavailable");
                None
            }
        };

        self.draw(out).await?;

        let result = loop {
            tokio::select! {
                Some(event) = rx.recv() => {
                    if self.handle_event(&event) {
                        if let Err(e) = self.draw(out).await {
                            break Err(e);
                        }
                    }
                }
                line = lines.next_line() => match line {
                    Ok(Some(line)) => match self.handle_line(&line, out).await {
                        Ok(true) => {}
                        Ok(false) => break Ok(()),
                        Err(e) => break Err(e),
                    },
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(AppError::from(e)),
                },
            }
        };

        if let Some(subscription) = subscription {
            subscription.close().await;
        }
        tracing::debug!(room_id = %self.room_id, "Left room");
        result
    }

    /// Handle one input line; returns `false` when the user leaves
    pub async fn handle_line<W>(&mut self, line: &str, out: &mut W) -> AppResult<bool>
    where
        W: AsyncWrite + Unpin,
    {
        let command = match RoomCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                self.ctx.notifier.error(&e.to_string());
                return Ok(true);
            }
        };

        match command {
            RoomCommand::Ask(text) => {
                self.form.submit(&text).await;
            }
            RoomCommand::Like(position) => {
                if let Some(id) = self.id_at(position) {
                    if self.messages.toggle_reaction(&id).await {
                        self.draw(out).await?;
                    }
                }
            }
            RoomCommand::Answer(position) => {
                if let Some(id) = self.id_at(position) {
                    self.messages.mark_answered(&id).await;
                }
            }
            RoomCommand::Share => {
                self.share();
            }
            RoomCommand::Refresh => {
                if self.messages.refresh().await {
                    self.draw(out).await?;
                }
            }
            RoomCommand::Help => {
                out.write_all(format!("{HELP}\n").as_bytes()).await?;
                out.flush().await?;
            }
            RoomCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn id_at(&self, position: usize) -> Option<MessageId> {
        let id = self.messages.at_position(position).map(|m| m.id.clone());
        if id.is_none() {
            self.ctx
                .notifier
                .error(&format!("There is no question number {position}"));
        }
        id
    }

    async fn draw<W>(&self, out: &mut W) -> AppResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        out.write_all(self.render().as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}
