//! Core error type definitions

use crate::error_info::ErrorInfo;
use serde_json::Value;
use std::path::PathBuf;

/// Result type alias for physocts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for physocts operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Both sides of a deep merge hold the key, but only one holds a mapping
    #[error("key '{key}' items type do not match: {base} <---> {override_value}")]
    TypeMismatch {
        key: String,
        base: Value,
        override_value: Value,
    },

    /// A non-object value was fed into the merge path
    #[error("{side} is not a mapping: {value}")]
    NotAMapping { side: &'static str, value: Value },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Operation timeout errors
    #[error("operation '{operation}' timed out after {duration:?}")]
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// A worker thread could not be started
    #[error("failed to spawn thread '{name}': {source}")]
    ThreadSpawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A handler run on a background thread failed
    #[error("handler '{handler}' failed in thread: {info}")]
    HandlerFailed { handler: String, info: ErrorInfo },

    /// A failure captured by the boundary adapter
    #[error("{0}")]
    Captured(ErrorInfo),
}
