//! Core types for physocts: a closed result type, failure capture and the
//! combinators built on top of them.
//!
//! ## Key Components
//!
//! - **`either`**: [`Either`], the `Right`/`Left` outcome of a fallible call.
//! - **`error_info`**: [`ErrorInfo`], the structured record (kind, trace,
//!   message) held by a `Left`.
//! - **`wrap`**: the boundary adapter that turns returned errors and panics
//!   into `Left` values, while letting exit requests through.
//! - **`functional`**: composition and short-circuiting bind chains over
//!   `Option`, `Either` and sequences, plus `coalesce`.
//! - **`dict`**: `dict_join`, the recursive merge of nested JSON mappings.
//! - **`errors`**: the crate-wide [`Error`] enum and [`Result`] alias.

pub mod dict;
pub mod either;
pub mod error_info;
pub mod errors;
pub mod functional;
pub mod wrap;

pub use self::{
    dict::{dict_join, dict_join_owned, dict_join_values},
    either::Either,
    error_info::ErrorInfo,
    errors::{Error, Result, ResultExt},
    functional::{coalesce, coalesce_with, compose},
    wrap::{
        capture, capture_anyhow, capture_infallible, capture_trace, request_exit, run_main,
        wrap_in_either, ExitRequest,
    },
};
