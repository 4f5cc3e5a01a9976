//! # ama-client
//!
//! Client side of the AMA service: typed REST calls and the per-room
//! WebSocket subscription.
//!
//! ```rust,ignore
//! use ama_client::{ApiClient, RoomSubscriber};
//! use ama_core::RoomApi;
//!
//! let api = ApiClient::new("http://localhost:8080/api")?;
//! let room_id = api.create_room("launch").await?;
//!
//! let subscriber = RoomSubscriber::new("ws://localhost:8080/subscribe")?;
//! let subscription = subscriber
//!     .subscribe(&room_id, |event| println!("{event:?}"))
//!     .await?;
//! ```

pub mod dto;
pub mod error;
pub mod http;
pub mod ws;

pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use ws::{RoomSubscriber, RoomSubscription};
