//! Builder methods for creating errors with context

use super::types::Error;
use crate::error_info::ErrorInfo;
use serde_json::Value;
use std::path::PathBuf;

impl Error {
    /// Create a merge type mismatch error for `key`
    #[must_use]
    pub fn type_mismatch(key: impl Into<String>, base: Value, override_value: Value) -> Self {
        Error::TypeMismatch {
            key: key.into(),
            base,
            override_value,
        }
    }

    /// Create an error for a non-object merge operand
    #[must_use]
    pub fn not_a_mapping(side: &'static str, value: Value) -> Self {
        Error::NotAMapping { side, value }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a timeout error
    #[must_use]
    pub fn timeout(operation: impl Into<String>, duration: std::time::Duration) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a thread spawn error
    #[must_use]
    pub fn thread_spawn(name: impl Into<String>, source: std::io::Error) -> Self {
        Error::ThreadSpawn {
            name: name.into(),
            source,
        }
    }

    /// Create a thread handler failure
    #[must_use]
    pub fn handler_failed(handler: impl Into<String>, info: ErrorInfo) -> Self {
        Error::HandlerFailed {
            handler: handler.into(),
            info,
        }
    }

    /// The captured failure record, if this error carries one
    #[must_use]
    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            Error::Captured(info) | Error::HandlerFailed { info, .. } => Some(info),
            _ => None,
        }
    }
}
