//! Domain layer - Pure higher-order functions
//!
//! This module contains stateless functions over borrowed sequences.
//! Nothing here performs I/O or holds state between calls.

pub mod compose;
pub mod search;
pub mod transform;
