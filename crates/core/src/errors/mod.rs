//! Error types and result extensions for physocts operations

mod builders;
mod conversions;
mod extensions;
mod types;

pub use extensions::*;
pub use types::{Error, Result};
