//! Message feed
//!
//! Holds the messages fetched over REST for one room and merges room events
//! into them. Reaction counts pushed by the server are absolute snapshots and
//! always overwrite whatever the client holds (last write wins). Events that
//! reference an id the feed does not hold are ignored.

use crate::entities::Message;
use crate::events::RoomEvent;
use crate::value_objects::{MessageId, RoomId};

/// Apply one event to a message list, returning the updated list
///
/// The input is left untouched.
#[must_use]
pub fn apply_event(messages: &[Message], room_id: &RoomId, event: &RoomEvent) -> Vec<Message> {
    let mut next = messages.to_vec();
    merge(&mut next, room_id, event);
    next
}

/// Order messages by reaction count, most reacted first
///
/// Ties keep their insertion order.
#[must_use]
pub fn rank_messages(messages: &[Message]) -> Vec<&Message> {
    let mut ranked: Vec<&Message> = messages.iter().collect();
    ranked.sort_by(|a, b| b.reaction_count.cmp(&a.reaction_count));
    ranked
}

/// Returns whether the list changed
fn merge(messages: &mut Vec<Message>, room_id: &RoomId, event: &RoomEvent) -> bool {
    match event {
        RoomEvent::MessageCreated(created) => {
            messages.push(Message::new(
                created.id.clone(),
                room_id.clone(),
                created.message.clone(),
            ));
            true
        }
        RoomEvent::MessageAnswered(answered) => {
            match messages.iter_mut().find(|m| m.id == answered.id) {
                Some(message) => {
                    message.mark_answered();
                    true
                }
                None => false,
            }
        }
        RoomEvent::MessageReactionIncreased(changed)
        | RoomEvent::MessageReactionDecreased(changed) => {
            match messages.iter_mut().find(|m| m.id == changed.id) {
                Some(message) => {
                    message.set_reaction_count(changed.count);
                    true
                }
                None => false,
            }
        }
    }
}

/// Cached message list of a single room
#[derive(Debug, Clone)]
pub struct MessageFeed {
    room_id: RoomId,
    messages: Vec<Message>,
}

impl MessageFeed {
    /// Create an empty feed for a room
    pub fn new(room_id: RoomId) -> Self {
        Self {
            room_id,
            messages: Vec::new(),
        }
    }

    /// Create a feed seeded with messages fetched over REST
    pub fn with_messages(room_id: RoomId, messages: Vec<Message>) -> Self {
        Self { room_id, messages }
    }

    /// Room this feed belongs to
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Replace the cached list with a fresh REST snapshot
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Merge one room event into the feed
    ///
    /// Returns `true` if a message was added or updated.
    pub fn apply(&mut self, event: &RoomEvent) -> bool {
        let changed = merge(&mut self.messages, &self.room_id, event);
        if !changed {
            tracing::debug!(
                room_id = %self.room_id,
                kind = %event.kind(),
                message_id = %event.message_id(),
                "Event for unknown message ignored"
            );
        }
        changed
    }

    /// Look up a message by id
    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    /// Messages in display order
    pub fn ranked(&self) -> Vec<&Message> {
        rank_messages(&self.messages)
    }

    /// Message at a 1-based position in display order
    pub fn at_rank(&self, position: usize) -> Option<&Message> {
        position
            .checked_sub(1)
            .and_then(|index| self.ranked().get(index).copied())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
