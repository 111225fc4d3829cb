//! Helpers layered on `physocts-core`
//!
//! Logging setup, handler threads, JSON persistence, layered configuration
//! and a few small text, iterator and timing utilities. Fallible helpers
//! either return [`physocts_core::Result`] or, at call boundaries, an
//! [`physocts_core::Either`].

pub mod atomic_file;
pub mod config;
pub mod debug;
pub mod iter;
pub mod json;
pub mod logging;
pub mod random;
pub mod text;
pub mod thread;

pub use atomic_file::{write_atomic, write_atomic_string};
pub use config::{ensure_in_range, ensure_not_empty, Layered, Validate};
pub use debug::{timed, with_time_measure, with_time_measure_logged};
pub use iter::{maybe_head, try_get_first};
pub use logging::{init, report_either, with_log, LogConfig, LogTarget, RotatingFileWriter};
pub use random::{random_string, CharSet};
pub use text::to_readable_text;
pub use thread::{run_with_timeout, spawn_handler, thread_executable};
