//! Persistence.
//!
//! User data lives in a key-value store as four JSON documents per user
//! (tasks, session logs, achievements, stats). Application configuration is
//! a TOML file next to the store.

mod config;
pub mod documents;
pub mod kv;
pub mod lenient;

pub use config::{AssistantConfig, Config, DefaultsConfig, UserConfig};
pub use documents::{DocumentKind, UserDocuments};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/infinity-timer[-dev]/` based on INFINITY_ENV.
///
/// Set INFINITY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("INFINITY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("infinity-timer-dev")
    } else {
        base_dir.join("infinity-timer")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
