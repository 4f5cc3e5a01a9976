//! In-process AMA server
//!
//! Speaks the same REST and WebSocket protocol as the real service, keeps its
//! data in memory, and records every REST request it receives so tests can
//! assert on the exact calls the client made.

use ama_core::{Message, MessageAnswered, MessageCreated, MessageId, ReactionChanged, Room, RoomEvent, RoomId};
use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Channel buffer size for pushed frames
const EVENT_BUFFER_SIZE: usize = 256;

/// A REST request as seen by the server
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Frame pushed to the sockets of one room; `None` closes them
#[derive(Debug, Clone)]
struct Outgoing {
    room_id: String,
    frame: Option<String>,
}

#[derive(Default)]
struct Store {
    rooms: Vec<Room>,
    messages: Vec<Message>,
    requests: Vec<RecordedRequest>,
    next_id: u64,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn has_room(&self, room_id: &str) -> bool {
        self.rooms.iter().any(|r| r.id.as_str() == room_id)
    }

    fn message_mut(&mut self, room_id: &str, message_id: &str) -> Option<&mut Message> {
        self.messages
            .iter_mut()
            .find(|m| m.room_id.as_str() == room_id && m.id.as_str() == message_id)
    }
}

/// Shared server state
#[derive(Clone)]
pub struct MockState {
    store: Arc<Mutex<Store>>,
    events: broadcast::Sender<Outgoing>,
    subscribers: Arc<AtomicUsize>,
}

impl Default for MockState {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self {
            store: Arc::default(),
            events,
            subscribers: Arc::default(),
        }
    }
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room directly, bypassing the API
    pub fn seed_room(&self, theme: &str) -> RoomId {
        let mut store = self.store.lock();
        let id = RoomId::from(store.next_id("room"));
        store.rooms.push(Room {
            id: id.clone(),
            theme: theme.to_string(),
        });
        id
    }

    /// Add a message directly, bypassing the API
    pub fn seed_message(&self, room_id: &RoomId, text: &str, reaction_count: i64, answered: bool) -> MessageId {
        let mut store = self.store.lock();
        let id = MessageId::from(store.next_id("msg"));
        store.messages.push(Message {
            id: id.clone(),
            room_id: room_id.clone(),
            message: text.to_string(),
            reaction_count,
            answered,
        });
        id
    }

    /// Every REST request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().requests.clone()
    }

    /// Current state of a message
    pub fn message(&self, message_id: &MessageId) -> Option<Message> {
        self.store
            .lock()
            .messages
            .iter()
            .find(|m| &m.id == message_id)
            .cloned()
    }

    /// Number of open room sockets
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.load(Ordering::SeqCst)
    }

    /// Push an event to every socket of a room
    pub fn push_event(&self, room_id: &RoomId, event: &RoomEvent) {
        if let Ok(frame) = event.to_json() {
            self.push_raw(room_id, &frame);
        }
    }

    /// Push an arbitrary text frame to every socket of a room
    pub fn push_raw(&self, room_id: &RoomId, frame: &str) {
        let _ = self.events.send(Outgoing {
            room_id: room_id.to_string(),
            frame: Some(frame.to_string()),
        });
    }

    /// Close every socket of a room from the server side
    pub fn close_room(&self, room_id: &RoomId) {
        let _ = self.events.send(Outgoing {
            room_id: room_id.to_string(),
            frame: None,
        });
    }

    fn record(&self, method: &str, path: String, body: Option<Value>) {
        self.store.lock().requests.push(RecordedRequest {
            method: method.to_string(),
            path,
            body,
        });
    }
}

/// Build the server routes
pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/rooms", get(get_rooms).post(create_room))
        .route(
            "/api/rooms/:room_id/messages",
            get(get_messages).post(create_message),
        )
        .route("/api/rooms/:room_id/messages/:message_id", get(get_message))
        .route(
            "/api/rooms/:room_id/messages/:message_id/react",
            patch(add_reaction).delete(remove_reaction),
        )
        .route(
            "/api/rooms/:room_id/messages/:message_id/answer",
            patch(mark_answered),
        )
        .route("/subscribe/:room_id", get(subscribe))
        .with_state(state)
}

// ============================================================================
// REST handlers
// ============================================================================

fn plain_error(status: StatusCode, message: &str) -> Response {
    (status, format!("{message}\n")).into_response()
}

fn room_not_found() -> Response {
    plain_error(StatusCode::BAD_REQUEST, "Room not found")
}

fn message_not_found() -> Response {
    plain_error(StatusCode::BAD_REQUEST, "Message not found")
}

async fn create_room(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/rooms".to_string(), Some(body.clone()));

    let Some(theme) = body.get("theme").and_then(Value::as_str) else {
        return plain_error(StatusCode::BAD_REQUEST, "Invalid json");
    };
    let id = state.seed_room(theme);
    Json(json!({ "id": id })).into_response()
}

async fn get_rooms(State(state): State<MockState>) -> Response {
    state.record("GET", "/api/rooms".to_string(), None);
    let rooms = state.store.lock().rooms.clone();
    Json(rooms).into_response()
}

async fn create_message(
    State(state): State<MockState>,
    Path(room_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", format!("/api/rooms/{room_id}/messages"), Some(body.clone()));

    let room_id = RoomId::from(room_id);
    if !state.store.lock().has_room(room_id.as_str()) {
        return room_not_found();
    }
    let Some(text) = body.get("message").and_then(Value::as_str) else {
        return plain_error(StatusCode::BAD_REQUEST, "Invalid json");
    };

    let id = state.seed_message(&room_id, text, 0, false);
    state.push_event(
        &room_id,
        &RoomEvent::MessageCreated(MessageCreated {
            id: id.clone(),
            message: text.to_string(),
        }),
    );
    Json(json!({ "id": id })).into_response()
}

async fn get_messages(State(state): State<MockState>, Path(room_id): Path<String>) -> Response {
    state.record("GET", format!("/api/rooms/{room_id}/messages"), None);

    let store = state.store.lock();
    if !store.has_room(&room_id) {
        return room_not_found();
    }
    let messages: Vec<Message> = store
        .messages
        .iter()
        .filter(|m| m.room_id.as_str() == room_id)
        .cloned()
        .collect();
    Json(messages).into_response()
}

async fn get_message(
    State(state): State<MockState>,
    Path((room_id, message_id)): Path<(String, String)>,
) -> Response {
    state.record("GET", format!("/api/rooms/{room_id}/messages/{message_id}"), None);

    let mut store = state.store.lock();
    if !store.has_room(&room_id) {
        return room_not_found();
    }
    match store.message_mut(&room_id, &message_id) {
        Some(message) => Json(message.clone()).into_response(),
        None => message_not_found(),
    }
}

async fn add_reaction(
    State(state): State<MockState>,
    Path((room_id, message_id)): Path<(String, String)>,
) -> Response {
    state.record("PATCH", format!("/api/rooms/{room_id}/messages/{message_id}/react"), None);
    change_reaction(&state, &room_id, &message_id, 1)
}

async fn remove_reaction(
    State(state): State<MockState>,
    Path((room_id, message_id)): Path<(String, String)>,
) -> Response {
    state.record("DELETE", format!("/api/rooms/{room_id}/messages/{message_id}/react"), None);
    change_reaction(&state, &room_id, &message_id, -1)
}

fn change_reaction(state: &MockState, room_id: &str, message_id: &str, delta: i64) -> Response {
    let count = {
        let mut store = state.store.lock();
        if !store.has_room(room_id) {
            return room_not_found();
        }
        let Some(message) = store.message_mut(room_id, message_id) else {
            return message_not_found();
        };
        message.reaction_count = (message.reaction_count + delta).max(0);
        message.reaction_count
    };

    let payload = ReactionChanged {
        id: MessageId::from(message_id),
        count,
    };
    let event = if delta > 0 {
        RoomEvent::MessageReactionIncreased(payload)
    } else {
        RoomEvent::MessageReactionDecreased(payload)
    };
    state.push_event(&RoomId::from(room_id), &event);

    Json(json!({ "count": count })).into_response()
}

async fn mark_answered(
    State(state): State<MockState>,
    Path((room_id, message_id)): Path<(String, String)>,
) -> Response {
    state.record("PATCH", format!("/api/rooms/{room_id}/messages/{message_id}/answer"), None);

    {
        let mut store = state.store.lock();
        if !store.has_room(&room_id) {
            return room_not_found();
        }
        let Some(message) = store.message_mut(&room_id, &message_id) else {
            return message_not_found();
        };
        message.answered = true;
    }

    state.push_event(
        &RoomId::from(room_id.as_str()),
        &RoomEvent::MessageAnswered(MessageAnswered {
            id: MessageId::from(message_id.as_str()),
        }),
    );
    Json(json!({ "id": message_id })).into_response()
}

// ============================================================================
// Room sockets
// ============================================================================

async fn subscribe(
    State(state): State<MockState>,
    Path(room_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    if !state.store.lock().has_room(&room_id) {
        return plain_error(StatusCode::BAD_REQUEST, "Room not found");
    }
    ws.on_upgrade(move |socket| handle_socket(state, room_id, socket))
}

async fn handle_socket(state: MockState, room_id: String, socket: WebSocket) {
    let mut events = state.events.subscribe();
    state.subscribers.fetch_add(1, Ordering::SeqCst);

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            outgoing = events.recv() => match outgoing {
                Ok(Outgoing { room_id: target, frame }) if target == room_id => {
                    let Some(frame) = frame else {
                        let _ = sink.send(WsMessage::Close(None)).await;
                        break;
                    };
                    if sink.send(WsMessage::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(WsMessage::Close(_)) | Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    state.subscribers.fetch_sub(1, Ordering::SeqCst);
}
