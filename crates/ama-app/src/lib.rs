//! # ama-app
//!
//! Terminal front end for live "Ask Me Anything" rooms: create a room, post
//! questions, react to them, and watch the ranked list update as the server
//! pushes events.

pub mod app;
pub mod cli;
pub mod commands;
pub mod components;
pub mod context;
pub mod notify;
pub mod pages;
pub mod routes;


pub use app::App;
pub use context::AppContext;
pub use notify::{MemoryNotifier, Notifier, TerminalNotifier, Toast, ToastLevel};
pub use routes::Route;
