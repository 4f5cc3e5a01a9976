//! Live message feed - the locally cached question list of one room

mod message_feed;

pub use message_feed::{apply_event, rank_messages, MessageFeed};
