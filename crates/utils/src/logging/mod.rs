//! Logging setup on top of `tracing-subscriber`
//!
//! A [`LogConfig`] describes where log lines go and how verbose they are.
//! [`init`] installs it as the process-wide subscriber; [`with_log`] runs a
//! closure under it without touching global state.

pub mod rotation;

use physocts_core::{Either, Error, Result};
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, Level, Subscriber};
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use rotation::{RotatingFileWriter, DEFAULT_BACKUP_COUNT, DEFAULT_MAX_FILE_SIZE};

// Re-export tracing macros for convenience
pub use tracing::{info, instrument, span, trace, warn};

/// Default log file name for file targets
pub const DEFAULT_LOG_FILE: &str = "log.log";

/// Where formatted log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
    /// Plain append-only file
    File(PathBuf),
    /// Size-rotated file with numbered backups
    RotatingFile {
        path: PathBuf,
        max_size: u64,
        backup_count: usize,
    },
}

impl LogTarget {
    /// Rotating target with the default size and backup count
    pub fn rotating(path: impl Into<PathBuf>) -> Self {
        LogTarget::RotatingFile {
            path: path.into(),
            max_size: DEFAULT_MAX_FILE_SIZE,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }

    fn make_writer(&self) -> Result<BoxMakeWriter> {
        Ok(match self {
            LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogTarget::File(path) => BoxMakeWriter::new(Mutex::new(rotation::open_append(path)?)),
            LogTarget::RotatingFile {
                path,
                max_size,
                backup_count,
            } => BoxMakeWriter::new(Mutex::new(RotatingFileWriter::open(
                path,
                *max_size,
                *backup_count,
            )?)),
        })
    }
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::rotating(DEFAULT_LOG_FILE)
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level emitted when no filter directive says otherwise
    pub level: Level,
    pub target: LogTarget,
    /// Colourise output
    pub ansi: bool,
    /// Filter directives in `RUST_LOG` syntax. `None` reads `RUST_LOG`.
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            target: LogTarget::default(),
            ansi: false,
            filter: None,
        }
    }
}

impl LogConfig {
    pub fn new(target: LogTarget) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let builder =
            EnvFilter::builder().with_default_directive(LevelFilter::from_level(self.level).into());
        match &self.filter {
            Some(directives) => builder.parse_lossy(directives),
            None => builder.from_env_lossy(),
        }
    }
}

/// Build a subscriber for `config` without installing it
pub fn build_subscriber(config: &LogConfig) -> Result<impl Subscriber + Send + Sync + 'static> {
    let fmt_layer = fmt::layer()
        .with_writer(config.target.make_writer()?)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_level(true);

    Ok(tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer))
}

/// Install `config` as the global subscriber
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<()> {
    build_subscriber(config)?
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install logger: {e}")))
}

/// Run `f` with `config` as the default subscriber for the current thread
///
/// Events emitted inside `f` are written regardless of the global setup.
pub fn with_log<T, F>(config: &LogConfig, f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    let subscriber = build_subscriber(config)?;
    Ok(tracing::subscriber::with_default(subscriber, f))
}

/// Log the outcome of a captured call under `label`
pub fn report_either<T: Debug>(label: &str, outcome: &Either<T>) {
    match outcome.value() {
        Ok(value) => debug!(label, value = ?value, "call succeeded"),
        Err(info) => error!(
            label,
            kind = info.kind(),
            trace = info.trace(),
            "call failed: {}",
            info.message()
        ),
    }
}
