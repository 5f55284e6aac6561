//! seqfn - Generic higher-order functions over ordered sequences
//!
//! This crate provides:
//! - `map`, `filter` and `reduce` over slices
//! - Right-to-left and left-to-right function composition
//! - Predicate queries: `any`, `all`, `find_index`, `find_indices`
//!
//! Every function borrows its input sequence and never mutates it.

pub mod constants;
pub mod domain;

#[cfg(feature = "macros")]
mod macros;

// Re-export commonly used items
pub use constants::*;
pub use domain::compose::{compose, compose_right_to_left, identity};
pub use domain::search::{all, any, find_index, find_indices};
pub use domain::transform::{SequenceError, filter, map, reduce, reduce_first};
