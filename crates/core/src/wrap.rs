//! Boundary adapter turning failing calls into [`Either`] values
//!
//! A wrapped call yields `Right` on normal return. A returned error or a
//! panic is recorded as `Left(ErrorInfo)`. The one exception is an
//! [`ExitRequest`] raised through [`request_exit`]: it is never captured
//! and keeps unwinding until [`run_main`] (or another outer handler) turns
//! it into a process exit.
//!
//! Nothing in this module logs; reporting a `Left` is up to the caller.
//! A captured panic still passes through the process panic hook first, so
//! the default hook prints its "thread panicked" line to stderr. Install a
//! quieter hook with `std::panic::set_hook` at program start if that output
//! is unwanted; the hook is process-wide and not swapped here.

use crate::either::Either;
use crate::error_info::ErrorInfo;
use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

/// Request to terminate the process with `code`.
///
/// Travels as an unwinding payload so it passes through every adapter
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitRequest {
    pub code: i32,
}

/// Unwind towards [`run_main`] asking it to exit the process with `code`.
///
/// Unlike `std::process::exit`, destructors on the way up still run.
pub fn request_exit(code: i32) -> ! {
    panic::resume_unwind(Box::new(ExitRequest { code }))
}

/// Run a program body, converting an [`ExitRequest`] into a process exit.
///
/// Other panics continue unwinding.
pub fn run_main<F>(body: F)
where
    F: FnOnce(),
{
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(body)) {
        match payload.downcast::<ExitRequest>() {
            Ok(request) => std::process::exit(request.code),
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

/// Run `f`, capturing a returned error or a panic as `Left`
///
/// Any error convertible into `Box<dyn Error>` is accepted, including
/// `Box<dyn Error>` itself and plain strings.
pub fn capture<T, E, F>(f: F) -> Either<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn StdError>>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Either::Right(value),
        Ok(Err(error)) => Either::Left(ErrorInfo::from_boxed(error)),
        Err(payload) => Either::Left(from_payload(payload)),
    }
}

/// [`capture`] for calls returning `anyhow::Result`
pub fn capture_anyhow<T, F>(f: F) -> Either<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Either::Right(value),
        Ok(Err(error)) => Either::Left(ErrorInfo::from_anyhow(&error)),
        Err(payload) => Either::Left(from_payload(payload)),
    }
}

/// Run a call that has no error channel; only a panic becomes `Left`
pub fn capture_infallible<T, F>(f: F) -> Either<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Either::Right(value),
        Err(payload) => Either::Left(from_payload(payload)),
    }
}

/// Lossy form of [`capture`] that keeps only the rendered trace report
pub fn capture_trace<T, E, F>(f: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn StdError>>,
{
    capture(f).into_result().map_err(|info| info.report())
}

/// Turn a fallible function into one returning [`Either`].
///
/// Functions of several arguments take them as a tuple.
///
/// ```
/// use physocts_core::wrap_in_either;
///
/// let parse = wrap_in_either(|s: &str| s.parse::<i32>());
/// assert_eq!(parse("42").unwrap(), 42);
/// assert!(parse("x").is_err());
/// ```
pub fn wrap_in_either<A, T, E, F>(f: F) -> impl Fn(A) -> Either<T>
where
    F: Fn(A) -> Result<T, E>,
    E: Into<Box<dyn StdError>>,
{
    move |args| capture(|| f(args))
}

fn from_payload(payload: Box<dyn Any + Send>) -> ErrorInfo {
    if (*payload).is::<ExitRequest>() {
        panic::resume_unwind(payload);
    }
    ErrorInfo::from_panic(payload.as_ref())
}
