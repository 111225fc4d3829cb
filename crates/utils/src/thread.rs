//! Running handlers on worker threads with captured failures

use physocts_core::{capture, capture_infallible, Either, Error, ErrorInfo, Result};
use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Run `f` through the boundary adapter and log how it ended.
///
/// A returned error or a panic becomes [`Error::HandlerFailed`] naming the
/// handler. Exit requests pass through untouched.
pub fn thread_executable<T, E, F>(name: &str, f: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: Into<Box<dyn StdError>>,
{
    let started = Instant::now();
    match capture(f) {
        Either::Right(value) => {
            debug!(handler = name, elapsed_ms = started.elapsed().as_millis() as u64, "handler finished");
            Ok(value)
        }
        Either::Left(info) => {
            error!(
                handler = name,
                kind = info.kind(),
                trace = info.trace(),
                "handler failed in thread: {}",
                info.message()
            );
            Err(Error::handler_failed(name, info))
        }
    }
}

/// Spawn `f` on a thread called `name`, wrapped by [`thread_executable`]
pub fn spawn_handler<T, E, F>(name: impl Into<String>, f: F) -> Result<JoinHandle<Result<T>>>
where
    F: FnOnce() -> std::result::Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<Box<dyn StdError>>,
{
    let name = name.into();
    let handler = name.clone();
    thread::Builder::new()
        .name(name.clone())
        .spawn(move || thread_executable(&handler, f))
        .map_err(|e| Error::thread_spawn(name, e))
}

/// Run `f` on a detached thread and wait at most `timeout` for its result.
///
/// On timeout the thread keeps running; its eventual result is dropped. An
/// exit request raised by `f` is carried back and resumed on the calling
/// thread.
pub fn run_with_timeout<T, F>(operation: &str, timeout: Duration, f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel::<std::result::Result<Either<T>, Box<dyn Any + Send>>>();
    thread::Builder::new()
        .name(format!("{operation}-timed"))
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| capture_infallible(f)));
            // The receiver may already be gone after a timeout.
            let _ = tx.send(outcome);
        })
        .map_err(|e| Error::thread_spawn(operation, e))?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(Either::Right(value))) => Ok(value),
        Ok(Ok(Either::Left(info))) => Err(Error::handler_failed(operation, info)),
        Ok(Err(payload)) => panic::resume_unwind(payload),
        Err(RecvTimeoutError::Timeout) => {
            error!(operation, timeout_ms = timeout.as_millis() as u64, "operation timed out");
            Err(Error::timeout(operation, timeout))
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::handler_failed(
            operation,
            ErrorInfo::new(
                "Disconnected",
                "",
                "worker thread ended without producing a result",
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{with_log, LogConfig, LogTarget};
    use physocts_core::{request_exit, ExitRequest};
    use std::fs;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_successful_handler_returns_its_value() {
        let out = thread_executable("adder", || Ok::<_, io::Error>(2 + 2)).unwrap();
        assert_eq!(out, 4);
    }

    #[test]
    fn test_returned_error_becomes_handler_failed() {
        let err = thread_executable("reader", || {
            Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "no such input"))
        })
        .unwrap_err();

        match err {
            Error::HandlerFailed { handler, info } => {
                assert_eq!(handler, "reader");
                assert!(info.kind().ends_with("io::error::Error"));
                assert_eq!(info.message(), "no such input");
            }
            other => panic!("expected handler failure, got {other:?}"),
        }
    }

    #[test]
    fn test_panicking_handler_is_captured() {
        let err = thread_executable("crasher", || -> std::result::Result<(), io::Error> {
            panic!("lost the plot")
        })
        .unwrap_err();
        let info = err.error_info().expect("captured info");
        assert_eq!(info.kind(), "panic");
        assert_eq!(info.message(), "lost the plot");
    }

    #[test]
    fn test_failures_are_logged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("thread.log");
        let config = LogConfig::new(LogTarget::File(path.clone())).with_filter("error");

        let outcome = with_log(&config, || {
            thread_executable("logged", || {
                Err::<(), _>(io::Error::new(io::ErrorKind::Other, "bad state"))
            })
        })
        .unwrap();
        assert!(outcome.is_err());

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("handler failed in thread: bad state"));
        assert!(contents.contains("logged"));
    }

    #[test]
    fn test_spawned_handler_runs_on_named_thread() {
        let handle = spawn_handler("worker-7", || {
            Ok::<_, io::Error>(thread::current().name().map(str::to_owned))
        })
        .unwrap();
        let name = handle.join().unwrap().unwrap();
        assert_eq!(name.as_deref(), Some("worker-7"));
    }

    #[test]
    fn test_spawned_handler_failure_is_joined_as_error() {
        let handle = spawn_handler("doomed", || -> std::result::Result<u8, io::Error> {
            panic!("doomed from the start")
        })
        .unwrap();
        assert!(matches!(
            handle.join().unwrap(),
            Err(Error::HandlerFailed { .. })
        ));
    }

    #[test]
    fn test_fast_operation_completes_within_timeout() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let value = run_with_timeout("quick", Duration::from_secs(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "done"
        })
        .unwrap();
        assert_eq!(value, "done");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slow_operation_times_out() {
        let err = run_with_timeout("slow", Duration::from_millis(20), || {
            thread::sleep(Duration::from_millis(500));
        })
        .unwrap_err();
        match err {
            Error::Timeout {
                operation,
                duration,
            } => {
                assert_eq!(operation, "slow");
                assert_eq!(duration, Duration::from_millis(20));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_exit_request_in_timed_operation_reaches_caller() {
        let outcome = panic::catch_unwind(|| {
            let _ = run_with_timeout("exiting", Duration::from_secs(5), || -> u8 {
                request_exit(4)
            });
        });
        let payload = outcome.expect_err("exit request must propagate");
        assert_eq!(
            payload.downcast_ref::<ExitRequest>(),
            Some(&ExitRequest { code: 4 })
        );
    }

    #[test]
    fn test_boxed_handler_errors_are_reported() {
        let err = thread_executable("boxed", || -> std::result::Result<(), Box<dyn StdError>> {
            Err("config missing".into())
        })
        .unwrap_err();
        assert_eq!(err.error_info().map(|i| i.message()), Some("config missing"));
    }

    #[test]
    fn test_panicking_timed_operation_is_reported() {
        let err = run_with_timeout("boom", Duration::from_secs(5), || -> u8 {
            panic!("exploded")
        })
        .unwrap_err();
        assert_eq!(err.error_info().map(|i| i.message()), Some("exploded"));
    }
}
