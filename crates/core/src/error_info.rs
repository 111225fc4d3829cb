//! Structured record of a captured failure

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// Kind reported for captured panics
pub const PANIC_KIND: &str = "panic";

/// A failure's kind, causal trace and short message.
///
/// Values are immutable once built; the fields are only readable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorInfo {
    kind: String,
    trace: String,
    message: String,
}

impl ErrorInfo {
    /// Build a record from its parts
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        trace: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            trace: trace.into(),
            message: message.into(),
        }
    }

    /// Capture a returned error, using its concrete type as the kind
    #[must_use]
    pub fn from_error<E>(error: &E) -> Self
    where
        E: StdError + 'static,
    {
        Self {
            kind: std::any::type_name::<E>().to_string(),
            trace: render_trace(error.source(), Backtrace::capture()),
            message: error.to_string(),
        }
    }

    /// Capture an `anyhow::Error`, keeping its context chain as the trace
    #[must_use]
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        Self {
            kind: std::any::type_name::<anyhow::Error>().to_string(),
            trace: render_trace(error.source(), Backtrace::capture()),
            message: error.to_string(),
        }
    }

    /// Capture anything convertible into a boxed error.
    ///
    /// The kind is the static type handed in, so a `Box<dyn Error>` reports
    /// the box type rather than the erased error inside it.
    #[must_use]
    pub fn from_boxed<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError>>,
    {
        let kind = std::any::type_name::<E>().to_string();
        let error: Box<dyn StdError> = error.into();
        Self {
            kind,
            trace: render_trace(error.source(), Backtrace::capture()),
            message: error.to_string(),
        }
    }

    /// Capture a panic payload; the kind is always [`PANIC_KIND`]
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "panic with a non-string payload".to_string()
        };

        Self {
            kind: PANIC_KIND.to_string(),
            trace: render_trace(None, Backtrace::capture()),
            message,
        }
    }

    /// The failure category
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The human-readable causal trace
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// The failure's string form
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the trace-only report: the causal trace followed by the
    /// `kind: message` line.
    pub fn report(&self) -> String {
        let mut out = self.trace.clone();
        out.push_str("===\n");
        out.push_str(&format!("Error message: {}: {}", self.kind, self.message));
        out
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

fn render_trace(mut source: Option<&(dyn StdError + 'static)>, backtrace: Backtrace) -> String {
    let mut out = String::new();
    while let Some(cause) = source {
        out.push_str("---\n");
        out.push_str(&format!("caused by: {cause}\n"));
        source = cause.source();
    }
    if backtrace.status() == BacktraceStatus::Captured {
        out.push_str("---\n");
        out.push_str(&backtrace.to_string());
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
