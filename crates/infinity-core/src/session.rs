//! Completed study sessions.
//!
//! A [`SessionLog`] is written once when a timer session ends and is never
//! edited afterwards. The log is append-only, so slice order is
//! chronological order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::lenient;
use crate::task::DEFAULT_SUBJECT;

/// Which timer produced the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// Fixed-length countdown focus block.
    #[default]
    Pomodoro,
    /// Open-ended count-up deep-work block.
    Adaptive,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::Pomodoro => write!(f, "pomodoro"),
            SessionType::Adaptive => write!(f, "adaptive"),
        }
    }
}

/// One finished study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLog {
    /// When the session ended.
    #[serde(rename = "date", alias = "timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Length in seconds.
    #[serde(deserialize_with = "lenient::number_u64")]
    pub duration: u64,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub session_type: SessionType,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

impl SessionLog {
    pub fn new(
        timestamp: DateTime<Utc>,
        duration: u64,
        subject: impl Into<String>,
        session_type: SessionType,
    ) -> Self {
        Self {
            timestamp,
            duration,
            subject: subject.into(),
            session_type,
        }
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration / 60
    }
}

/// Sum of all session durations in seconds.
pub fn total_seconds(logs: &[SessionLog]) -> u64 {
    logs.iter().map(|l| l.duration).fold(0, u64::saturating_add)
}

/// The most recent `n` sessions, oldest first.
pub fn recent(logs: &[SessionLog], n: usize) -> &[SessionLog] {
    &logs[logs.len().saturating_sub(n)..]
}
