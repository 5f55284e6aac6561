//! Sequence library constants

// =============================================================================
// Search results
// =============================================================================

/// Index returned by `find_index` when no element satisfies the predicate
pub const NOT_FOUND: isize = -1;
