//! Toast notifications
//!
//! Failed REST calls are never retried; they end up here as a short message
//! for the user. The terminal notifier prints to stderr, the memory notifier
//! keeps toasts around for inspection.

use parking_lot::Mutex;
use std::fmt;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A transient user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Sink for user notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    fn info(&self, message: &str) {
        self.notify(Toast {
            level: ToastLevel::Info,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Toast {
            level: ToastLevel::Error,
            message: message.to_string(),
        });
    }
}

/// Prints toasts to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Info => tracing::debug!(text = %toast.message, "Info toast"),
            ToastLevel::Error => tracing::debug!(error = %toast.message, "Error toast"),
        }
        eprintln!("[{}] {}", toast.level, toast.message);
    }
}

/// Collects toasts in memory
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts shown so far
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    /// Messages of the error toasts shown so far
    pub fn errors(&self) -> Vec<String> {
        self.toasts
            .lock()
            .iter()
            .filter(|t| t.level == ToastLevel::Error)
            .map(|t| t.message.clone())
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
