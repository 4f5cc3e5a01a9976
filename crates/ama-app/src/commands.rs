//! Room page commands
//!
//! Every input line in a room is either a question or a slash command.
//! Positions refer to the list as currently rendered, starting at 1.

use ama_common::{AppError, AppResult};

/// Usage text shown by `/help` and on bad input
pub const HELP: &str = "\
Type a question and press enter to ask it.
  /like N     toggle your reaction on question N
  /answer N   mark question N as answered
  /share      show the link to this room
  /refresh    reload the questions from the server
  /help       show this help
  /quit       leave the room";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomCommand {
    Ask(String),
    Like(usize),
    Answer(usize),
    Share,
    Refresh,
    Help,
    Quit,
}

impl RoomCommand {
    /// Parse an input line
    ///
    /// Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(command) = line.strip_prefix('/') else {
            return Ok(Some(Self::Ask(line.to_string())));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(AppError::InvalidInput(format!("too many arguments to /{name}")));
        }

        let parsed = match (name, arg) {
            ("like", Some(n)) => Self::Like(parse_position(n)?),
            ("answer", Some(n)) => Self::Answer(parse_position(n)?),
            ("like" | "answer", None) => {
                return Err(AppError::InvalidInput(format!("/{name} needs a question number")));
            }
            ("share", None) => Self::Share,
            ("refresh", None) => Self::Refresh,
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            _ => return Err(AppError::InvalidInput(format!("unknown command: {line}"))),
        };

        Ok(Some(parsed))
    }
}

fn parse_position(raw: &str) -> AppResult<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidInput(format!("not a question number: {raw}"))),
    }
}
