use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::misc::utils::current_datetime_rfc9557;

/// # Logrecord
///
/// A single log entry as emitted by [`LoggerLocal`](super::loggerlocal::LoggerLocal).
/// The record is serializable so file sinks and downstream collectors share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logrecord {
    /// The severity level (0 silly .. 6 fatal).
    pub loglevel: i64,
    /// Details about the message content.
    pub message: Message,
    /// Information about the application generating the log.
    pub app: App,
    /// Flexible JSON value for arbitrary tags or additional metadata.
    pub tags: Value,
    /// RFC 9557 formatted timestamp string.
    pub rfc9557: String,
}

impl Default for Logrecord {
    /// Initializes `rfc9557` with the current UTC datetime.
    fn default() -> Self {
        Self {
            loglevel: 0,
            message: Message::default(),
            app: App::default(),
            tags: serde_json::json!([]),
            rfc9557: current_datetime_rfc9557(),
        }
    }
}

impl Logrecord {
    /// True when the record carries structured extras.
    pub fn has_tags(&self) -> bool {
        self.tags != serde_json::json!([])
    }
}

/// # Message
///
/// The textual content of a log entry, including its language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The language of the message (e.g., "en").
    pub lang: String,
    /// The actual text content of the message.
    pub text: String,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            text: String::new(),
            lang: "en".to_string(),
        }
    }
}

/// # App
///
/// The application that generated the log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// The process ID (PID) of the application.
    pub pid: i64,
    /// The name of the application.
    pub name: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            pid: std::process::id() as i64,
            name: String::new(),
        }
    }
}

/// Human readable name for a numeric log level.
pub fn level_name(level: i64) -> &'static str {
    match level {
        6 => "FATAL",
        5 => "ERROR",
        4 => "WARN",
        3 => "INFO",
        2 => "DEBUG",
        1 => "TRACE",
        _ => "SILLY",
    }
}
