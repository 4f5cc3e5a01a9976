//! Front end integration tests
//!
//! Drive the pages over in-memory pipes against the mock server.
//!
//! Run with: cargo test -p integration-tests --test page_tests

use ama_app::pages::{CreateRoomPage, RoomPage};
use ama_app::{App, Route};
use ama_core::{MessageApi, ReactionChanged, RoomApi, RoomEvent};
use integration_tests::{read_until, with_timeout, TestServer};
use serde_json::json;
use tokio::io::{duplex, AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::test]
async fn test_create_room_navigates_to_room() {
    let server = TestServer::start().await.unwrap();
    let (ctx, notifier) = server.context().unwrap();

    let route = CreateRoomPage::new(&ctx).submit("launch").await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, Some(json!({ "theme": "launch" })));

    let Route::Room { room_id: Some(room_id) } = &route else {
        panic!("unexpected route {route:?}");
    };
    assert_eq!(route.path(), format!("/room/{room_id}"));
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_empty_theme_shows_toast() {
    let server = TestServer::start().await.unwrap();
    let (ctx, notifier) = server.context().unwrap();

    assert!(CreateRoomPage::new(&ctx).submit("").await.is_none());
    assert!(server.requests().is_empty());
    assert_eq!(
        notifier.errors(),
        vec!["You have to choose a name for your room".to_string()]
    );
}

#[tokio::test]
async fn test_create_without_entering_prints_share_link() {
    let server = TestServer::start().await.unwrap();
    let (ctx, _) = server.context().unwrap();
    let app = App::new(ctx);

    let mut lines = BufReader::new(&b"launch\n"[..]).lines();
    let mut out = Vec::new();
    let created = app.create(None, false, &mut lines, &mut out).await.unwrap();
    assert!(created);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");

    let out = String::from_utf8(out).unwrap();
    let mut printed = out.strip_prefix("Room name: ").unwrap().lines();
    let path = printed.next().unwrap();
    let link = printed.next().unwrap();
    assert!(path.starts_with("/room/"));
    assert_eq!(link, format!("https://ama.example.com{path}"));
    assert_eq!(printed.next(), None);
}

#[tokio::test]
async fn test_room_listing() {
    let server = TestServer::start().await.unwrap();
    let (ctx, _) = server.context().unwrap();
    let app = App::new(ctx);

    let mut out = Vec::new();
    app.list_rooms(&mut out).await.unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No rooms yet\n");

    let launch = server.state.seed_room("launch");
    let retro = server.state.seed_room("retro");
    let mut out = Vec::new();
    app.list_rooms(&mut out).await.unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{launch}\tlaunch\n{retro}\tretro\n")
    );
}

#[tokio::test]
async fn test_room_page_lives_through_a_session() {
    let server = TestServer::start().await.unwrap();
    let (ctx, notifier) = server.context().unwrap();
    let room_id = server.state.seed_room("launch");
    server.state.seed_message(&room_id, "Older question", 2, false);

    let mut page = RoomPage::new(&ctx, Some(room_id.clone())).unwrap();
    page.load().await.unwrap();

    let (mut input, input_reader) = duplex(4096);
    let (output_writer, mut output) = duplex(64 * 1024);
    let session = tokio::spawn(async move {
        let mut lines = BufReader::new(input_reader).lines();
        let mut out = output_writer;
        page.run(&mut lines, &mut out).await
    });
    server.wait_for_subscribers(1).await.unwrap();

    let mut seen = String::new();
    read_until(&mut output, &mut seen, &format!("Room code: {room_id}"))
        .await
        .unwrap();
    read_until(&mut output, &mut seen, "1. Older question").await.unwrap();

    // Posting only shows up once the server pushes it back
    input.write_all(b"Is it fast?\n").await.unwrap();
    read_until(&mut output, &mut seen, "2. Is it fast?").await.unwrap();

    let api = server.api_client().unwrap();
    let asked = api
        .list_messages(&room_id)
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.message == "Is it fast?")
        .unwrap();

    // The reaction marker flips once the server accepted the call
    seen.clear();
    input.write_all(b"/like 2\n").await.unwrap();
    read_until(&mut output, &mut seen, "[x] Like question (1)")
        .await
        .unwrap();

    // Counts pushed by the server re-rank the list
    seen.clear();
    server.state.push_event(
        &room_id,
        &RoomEvent::MessageReactionIncreased(ReactionChanged {
            id: asked.id.clone(),
            count: 5,
        }),
    );
    read_until(&mut output, &mut seen, "1. Is it fast?\n   [x] Like question (5)")
        .await
        .unwrap();

    seen.clear();
    input.write_all(b"/answer 1\n").await.unwrap();
    read_until(&mut output, &mut seen, "1. Is it fast? (answered)")
        .await
        .unwrap();

    // Answered questions take no more reactions
    input.write_all(b"/like 1\n").await.unwrap();

    input.write_all(b"/share\n/quit\n").await.unwrap();
    with_timeout(session).await.unwrap().unwrap().unwrap();
    server.wait_for_subscribers(0).await.unwrap();

    let calls: Vec<(String, String)> = server
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    let messages = format!("/api/rooms/{room_id}/messages");
    assert_eq!(
        calls,
        vec![
            ("GET".to_string(), messages.clone()),
            ("POST".to_string(), messages.clone()),
            ("GET".to_string(), messages.clone()),
            ("PATCH".to_string(), format!("{messages}/{}/react", asked.id)),
            ("PATCH".to_string(), format!("{messages}/{}/answer", asked.id)),
        ]
    );

    let toasts = notifier.toasts();
    assert!(toasts
        .iter()
        .any(|t| t.message == format!("Room link: https://ama.example.com/room/{room_id}")));
}

#[tokio::test]
async fn test_app_creates_and_enters_room() {
    let server = TestServer::start().await.unwrap();
    let (ctx, _) = server.context().unwrap();
    let app = App::new(ctx);

    let mut lines = BufReader::new(&b"launch\n/quit\n"[..]).lines();
    let mut out = Vec::new();
    with_timeout(app.run(Route::CreateRoom, &mut lines, &mut out))
        .await
        .unwrap()
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].path, "/api/rooms");
    assert_eq!(requests[0].body, Some(json!({ "theme": "launch" })));

    let rooms = server.api_client().unwrap().list_rooms().await.unwrap();
    let room_id = &rooms[0].id;
    assert_eq!(requests[1].path, format!("/api/rooms/{room_id}/messages"));

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Room name: "));
    assert!(out.contains(&format!("Room code: {room_id}")));
    assert!(out.contains("No questions yet"));
}

#[tokio::test]
async fn test_app_fails_on_unknown_room() {
    let server = TestServer::start().await.unwrap();
    let (ctx, _) = server.context().unwrap();
    let app = App::new(ctx);

    let route = Route::parse("/room/does-not-exist").unwrap();
    let mut lines = BufReader::new(&b""[..]).lines();
    let mut out = Vec::new();
    let err = app.run(route, &mut lines, &mut out).await.unwrap_err();

    assert_eq!(err.error_code(), "UNKNOWN_ROOM");
    assert_eq!(err.to_string(), "Room not found: does-not-exist");
}
