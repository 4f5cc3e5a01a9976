//! Room subscriber
//!
//! Opens one socket per room at `<ws-base>/<room id>` and hands every decoded
//! [`RoomEvent`] to a caller-supplied callback. Frames with an unknown kind or a
//! malformed payload are skipped. There is no reconnect: when the server closes
//! the socket or an error occurs, the subscription simply ends.

use ama_core::{RoomEvent, RoomId};
use futures_util::{SinkExt, StreamExt};
use reqwest::Url;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::error::{ClientError, ClientResult};

/// Factory for room subscriptions
#[derive(Debug, Clone)]
pub struct RoomSubscriber {
    base_url: Url,
}

impl RoomSubscriber {
    /// Create a subscriber for sockets rooted at `base_url`, e.g. `ws://localhost:8080/subscribe`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "ws" | "wss") || base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { base_url })
    }

    /// Socket URL of a room
    pub fn room_url(&self, room_id: &RoomId) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(room_id.as_str());
        Ok(url)
    }

    /// Connect to a room and start forwarding its events to `on_event`
    ///
    /// Returns once the WebSocket handshake has completed. The callback runs on
    /// the reader task, one event at a time, in arrival order.
    pub async fn subscribe<F>(
        &self,
        room_id: &RoomId,
        on_event: F,
    ) -> ClientResult<RoomSubscription>
    where
        F: FnMut(RoomEvent) + Send + 'static,
    {
        let url = self.room_url(room_id)?;
        let (stream, _response) = connect_async(url.as_str()).await?;

        tracing::info!(room_id = %room_id, url = %url, "Connected to room socket");

        let (close_tx, close_rx) = oneshot::channel();
        let task = tokio::spawn(read_loop(room_id.clone(), stream, close_rx, on_event));

        Ok(RoomSubscription {
            room_id: room_id.clone(),
            close_tx: Some(close_tx),
            task: Some(task),
        })
    }
}

type RoomStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn read_loop<F>(
    room_id: RoomId,
    stream: RoomStream,
    mut close_rx: oneshot::Receiver<()>,
    mut on_event: F,
) where
    F: FnMut(RoomEvent) + Send + 'static,
{
    let (mut sink, mut stream) = stream.split();

    loop {
        tokio::select! {
            _ = &mut close_rx => {
                if let Err(e) = sink.send(Message::Close(None)).await {
                    tracing::debug!(room_id = %room_id, error = %e, "Failed to send close frame");
                }
                break;
            }
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => match RoomEvent::from_json(&text) {
                    Ok(Some(event)) => {
                        tracing::trace!(room_id = %room_id, kind = %event.kind(), "Room event received");
                        on_event(event);
                    }
                    Ok(None) => {
                        tracing::debug!(room_id = %room_id, frame = %text, "Skipping unknown event kind");
                    }
                    Err(e) => {
                        tracing::debug!(room_id = %room_id, error = %e, "Skipping malformed frame");
                    }
                },
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!(room_id = %room_id, frame = ?frame, "Server closed room socket");
                    break;
                }
                Some(Ok(_)) => {
                    // ping/pong are answered by tungstenite; binary frames are not part of the protocol
                }
                Some(Err(e)) => {
                    tracing::warn!(room_id = %room_id, error = %e, "Room socket error");
                    break;
                }
                None => break,
            },
        }
    }

    tracing::info!(room_id = %room_id, "Closed connection to room socket");
}

/// A live room subscription
///
/// Dropping the subscription stops the reader task without a close handshake;
/// call [`RoomSubscription::close`] to shut down cleanly.
#[derive(Debug)]
pub struct RoomSubscription {
    room_id: RoomId,
    close_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl RoomSubscription {
    /// Room this subscription listens to
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Whether the socket has stopped delivering events
    pub fn is_closed(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Send a close frame and wait for the reader task to finish
    pub async fn close(mut self) {
        if let Some(close_tx) = self.close_tx.take() {
            let _ = close_tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::debug!(room_id = %self.room_id, error = %e, "Room reader task failed");
            }
        }
    }
}

impl Drop for RoomSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
