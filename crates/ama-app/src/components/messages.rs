//! Ranked question list
//!
//! Seeds a [`MessageFeed`] from REST, then keeps it current with the events
//! pushed on the room socket. Reaction counts shown are always the last value
//! the server pushed. Toggling a reaction flips the local "liked" marker right
//! away and flips it back if the server rejects the call.

use ama_common::AppResult;
use ama_core::{AmaApi, ApiResult, Message, MessageFeed, MessageId, RoomEvent, RoomId};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::sync::Arc;

use super::require_room_id;
use crate::context::AppContext;
use crate::notify::Notifier;

/// Live, ranked list of a room's questions
pub struct MessagesView {
    feed: MessageFeed,
    reacted: HashSet<MessageId>,
    api: Arc<dyn AmaApi>,
    notifier: Arc<dyn Notifier>,
}

impl MessagesView {
    pub fn new(ctx: &AppContext, room_id: Option<RoomId>) -> AppResult<Self> {
        Ok(Self {
            feed: MessageFeed::new(require_room_id(room_id)?),
            reacted: HashSet::new(),
            api: Arc::clone(&ctx.api),
            notifier: Arc::clone(&ctx.notifier),
        })
    }

    pub fn room_id(&self) -> &RoomId {
        self.feed.room_id()
    }

    pub fn feed(&self) -> &MessageFeed {
        &self.feed
    }

    /// Fetch the room's questions, replacing whatever is cached
    pub async fn load(&mut self) -> ApiResult<()> {
        let messages = self.api.list_messages(self.feed.room_id()).await?;
        tracing::debug!(room_id = %self.feed.room_id(), count = messages.len(), "Questions loaded");
        self.feed.replace(messages);
        Ok(())
    }

    /// Reload from the server, reporting failures as a toast
    pub async fn refresh(&mut self) -> bool {
        match self.load().await {
            Ok(()) => true,
            Err(e) => {
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Merge a pushed event; returns whether the list changed
    pub fn handle_event(&mut self, event: &RoomEvent) -> bool {
        self.feed.apply(event)
    }

    /// Question at a 1-based position in display order
    pub fn at_position(&self, position: usize) -> Option<&Message> {
        self.feed.at_rank(position)
    }

    /// Whether this viewer currently has a reaction on the question
    pub fn has_reacted(&self, message_id: &MessageId) -> bool {
        self.reacted.contains(message_id)
    }

    /// Add or withdraw this viewer's reaction
    ///
    /// The marker flips before the call and flips back if the call fails.
    /// Answered questions are left alone. Returns whether the call succeeded.
    pub async fn toggle_reaction(&mut self, message_id: &MessageId) -> bool {
        match self.feed.get(message_id) {
            Some(message) if message.can_react() => {}
            _ => return false,
        }

        let reacted = !self.reacted.remove(message_id);
        if reacted {
            self.reacted.insert(message_id.clone());
        }

        let room_id = self.feed.room_id();
        let result = if reacted {
            self.api.add_reaction(room_id, message_id).await
        } else {
            self.api.remove_reaction(room_id, message_id).await
        };

        match result {
            Ok(count) => {
                tracing::debug!(message_id = %message_id, count, reacted, "Reaction toggled");
                true
            }
            Err(e) => {
                tracing::warn!(message_id = %message_id, error = %e, "Failed to toggle reaction");
                if reacted {
                    self.reacted.remove(message_id);
                } else {
                    self.reacted.insert(message_id.clone());
                }
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Mark a question as answered
    ///
    /// The flag itself changes when the server pushes `message_answered`.
    pub async fn mark_answered(&self, message_id: &MessageId) -> bool {
        match self.api.mark_answered(self.feed.room_id(), message_id).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(message_id = %message_id, error = %e, "Failed to mark question as answered");
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Render the list, most reacted first
    pub fn render(&self) -> String {
        if self.feed.is_empty() {
            return "No questions yet. Be the first to ask!\n".to_string();
        }

        let mut out = String::new();
        for (index, message) in self.feed.ranked().into_iter().enumerate() {
            let status = if message.answered { " (answered)" } else { "" };
            let _ = writeln!(out, "{}. {}{status}", index + 1, message.message);

            let marker = if self.has_reacted(&message.id) { "[x]" } else { "[ ]" };
            let _ = writeln!(out, "   {marker} Like question ({})", message.reaction_count);
        }
        out
    }
}
