//! Timing helpers for ad-hoc diagnostics

use crate::logging::{with_log, LogConfig};
use physocts_core::Result;
use std::time::{Duration, Instant};
use tracing::{info, Level};

/// Run `f` and log how long it took under `label`
pub fn with_time_measure<T, F>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let (value, elapsed) = timed(f);
    info!(label, elapsed_secs = elapsed.as_secs_f64(), "Time elapsed: {elapsed:?}");
    value
}

/// [`with_time_measure`] with info output forced on for the call.
///
/// `f` runs under `config` raised to info level, so the timing line (and
/// anything `f` logs at info or above) is written even when the usual
/// configuration only lets warnings through.
pub fn with_time_measure_logged<T, F>(config: &LogConfig, label: &str, f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    let forced = config.clone().with_level(Level::INFO).with_filter("info");
    with_log(&forced, || with_time_measure(label, f))
}

/// Run `f`, returning its value with the elapsed wall time
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{with_log, LogConfig, LogTarget};
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn test_timed_reports_at_least_the_sleep() {
        let (value, elapsed) = timed(|| {
            thread::sleep(Duration::from_millis(15));
            "slept"
        });
        assert_eq!(value, "slept");
        assert!(elapsed >= Duration::from_millis(15));
    }

    #[test]
    fn test_forced_timing_ignores_warn_level_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forced.log");
        let config = LogConfig::new(LogTarget::File(path.clone())).with_filter("warn");
        assert_eq!(config.level, Level::WARN);

        let product =
            with_time_measure_logged(&config, "multiplying", || (1..=5).product::<u32>()).unwrap();
        assert_eq!(product, 120);

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Time elapsed"));
        assert!(contents.contains("multiplying"));
    }

    #[test]
    fn test_elapsed_time_is_logged_at_info() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timing.log");
        let config = LogConfig::new(LogTarget::File(path.clone())).with_filter("info");

        let sum = with_log(&config, || with_time_measure("summing", || (1..=10).sum::<u32>())).unwrap();
        assert_eq!(sum, 55);

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Time elapsed"));
        assert!(contents.contains("summing"));
    }
}
