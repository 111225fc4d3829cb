//! Functional programming utilities for physocts
//!
//! This module provides composition, short-circuiting bind chains over
//! `Option`, [`Either`](crate::Either) and sequences, and `coalesce`.

pub mod bind;
pub mod coalesce;
pub mod composition;

// Re-export commonly used combinators
pub use bind::{
    bind_either, bind_list, bind_maybe, chain_eithers, chain_lists, chain_maybes, lift_list,
    lift_maybe,
};
pub use coalesce::{coalesce, coalesce_with};
pub use composition::{apply_item, compose, compose_all, constant, flip, identity};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::bind::*;
    pub use super::coalesce::*;
    pub use super::composition::*;
    pub use crate::{bind_eithers, bind_lists, bind_maybes, coalesce, compose};
}
