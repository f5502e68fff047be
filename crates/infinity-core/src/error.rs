//! Core error types for infinity-core.
//!
//! The hierarchy mirrors the three failure classes the application knows
//! about: storage, the assistant service, and boundary validation.
//! Malformed persisted documents are not errors at all; they decode to
//! defaults (see [`crate::storage::documents`]).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for infinity-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Assistant service errors
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised by an [`crate::assistant::Assistant`] implementation.
///
/// These never reach the user directly; [`crate::assistant::ask`] swaps them
/// for a canned reply.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// No API key in the environment or keyring
    #[error("No API key configured for the assistant")]
    MissingApiKey,

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Assistant service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response carried no usable text
    #[error("Assistant returned an empty response")]
    EmptyResponse,

    /// Credential store failure
    #[error("Keyring error: {0}")]
    Keyring(String),
}

/// Validation errors for input rejected at the boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field was empty after trimming
    #[error("'{field}' must not be empty")]
    Empty { field: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Operation refused in the current state
    #[error("{0}")]
    InvalidState(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<keyring::Error> for AssistantError {
    fn from(err: keyring::Error) -> Self {
        AssistantError::Keyring(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
