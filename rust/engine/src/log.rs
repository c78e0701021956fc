use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One line of a game's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    /// RFC3339 UTC timestamp
    pub date: String,
}

impl LogEntry {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Append-only sequence of log entries.
pub type GameLog = Vec<LogEntry>;
