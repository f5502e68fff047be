//! Per-user JSON documents.
//!
//! Each user has four independent documents, keyed by email:
//!
//! | Document     | Key                                  |
//! |--------------|--------------------------------------|
//! | tasks        | `infiniteTimer_tasks_<email>`        |
//! | session logs | `infiniteTimer_logs_<email>`         |
//! | achievements | `infiniteTimer_achievements_<email>` |
//! | stats        | `infiniteTimer_stats_<email>`        |
//!
//! A missing or unreadable document loads as its default and is never an
//! error; only the store itself failing is. List documents are read one
//! entry at a time, so a bad entry is dropped without taking its
//! neighbours with it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kv::KeyValueStore;
use crate::achievements::{self, Achievement};
use crate::error::StorageError;
use crate::progression::UserStats;
use crate::session::SessionLog;
use crate::task::TaskBoard;

const KEY_PREFIX: &str = "infiniteTimer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Tasks,
    Logs,
    Achievements,
    Stats,
    Onboarded,
}

impl DocumentKind {
    fn segment(&self) -> &'static str {
        match self {
            DocumentKind::Tasks => "tasks",
            DocumentKind::Logs => "logs",
            DocumentKind::Achievements => "achievements",
            DocumentKind::Stats => "stats",
            DocumentKind::Onboarded => "onboarded",
        }
    }

    pub fn key(&self, email: &str) -> String {
        format!("{KEY_PREFIX}_{}_{email}", self.segment())
    }
}

/// Everything persisted for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDocuments {
    pub tasks: TaskBoard,
    pub logs: Vec<SessionLog>,
    pub achievements: Vec<Achievement>,
    pub stats: UserStats,
    pub onboarded: bool,
}

impl Default for UserDocuments {
    fn default() -> Self {
        Self {
            tasks: TaskBoard::default(),
            logs: Vec::new(),
            achievements: achievements::default_catalog(),
            stats: UserStats::default(),
            onboarded: false,
        }
    }
}

fn decode<T: DeserializeOwned>(
    kind: DocumentKind,
    raw: Option<String>,
    default: impl FnOnce() -> T,
) -> T {
    let Some(raw) = raw else {
        return default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(document = kind.segment(), error = %e, "unreadable document, using defaults");
            default()
        }
    }
}

fn decode_list<T: DeserializeOwned>(
    kind: DocumentKind,
    raw: Option<String>,
    default: impl FnOnce() -> Vec<T>,
    recover: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    let items: Vec<Value> = decode(kind, raw, Vec::new);
    if items.is_empty() {
        return default();
    }

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match T::deserialize(item) {
            Ok(value) => out.push(value),
            Err(e) => match recover(item) {
                Some(value) => {
                    tracing::warn!(document = kind.segment(), index, error = %e, "repaired unreadable entry");
                    out.push(value);
                }
                None => {
                    tracing::warn!(document = kind.segment(), index, error = %e, "skipping unreadable entry");
                }
            },
        }
    }
    out
}

/// Keep the unlock state of a built-in achievement whose stored entry no
/// longer decodes.
fn recover_achievement(item: &Value) -> Option<Achievement> {
    let id = item.get("id")?.as_str()?;
    let mut seed = achievements::default_catalog()
        .into_iter()
        .find(|a| a.id == id)?;
    seed.unlocked = item
        .get("unlocked")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Some(seed)
}

fn write<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    kind: DocumentKind,
    email: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::QueryFailed(format!("encode {}: {e}", kind.segment())))?;
    store.set(&kind.key(email), &json)
}

impl UserDocuments {
    /// Load all documents for `email`, filling defaults where needed.
    ///
    /// # Errors
    /// Returns an error only if the store cannot be read.
    pub fn load(store: &dyn KeyValueStore, email: &str) -> Result<Self, StorageError> {
        let tasks = TaskBoard::new(decode_list(
            DocumentKind::Tasks,
            store.get(&DocumentKind::Tasks.key(email))?,
            Vec::new,
            |_| None,
        ));
        let logs = decode_list(
            DocumentKind::Logs,
            store.get(&DocumentKind::Logs.key(email))?,
            Vec::new,
            |_| None,
        );
        let stored = decode_list(
            DocumentKind::Achievements,
            store.get(&DocumentKind::Achievements.key(email))?,
            achievements::default_catalog,
            recover_achievement,
        );
        let stats = decode(
            DocumentKind::Stats,
            store.get(&DocumentKind::Stats.key(email))?,
            UserStats::default,
        );
        let onboarded = store
            .get(&DocumentKind::Onboarded.key(email))?
            .is_some_and(|v| v.trim() == "true");

        tracing::debug!(email, "loaded user documents");
        Ok(Self {
            tasks,
            logs,
            achievements: achievements::merge_catalog(stored),
            stats,
            onboarded,
        })
    }

    /// Write all documents for `email`.
    ///
    /// # Errors
    /// Returns an error if the store rejects a write.
    pub fn save(&self, store: &mut dyn KeyValueStore, email: &str) -> Result<(), StorageError> {
        write(store, DocumentKind::Tasks, email, &self.tasks)?;
        write(store, DocumentKind::Logs, email, &self.logs)?;
        write(store, DocumentKind::Achievements, email, &self.achievements)?;
        write(store, DocumentKind::Stats, email, &self.stats)?;
        if self.onboarded {
            store.set(&DocumentKind::Onboarded.key(email), "true")?;
        }
        Ok(())
    }
}
