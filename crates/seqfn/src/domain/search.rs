//! Predicate queries over sequences
//!
//! `any` and `all` stop at the first element that decides the answer;
//! `find_index` stops at the first match. `find_indices` always scans
//! the whole sequence.

use crate::constants::NOT_FOUND;

/// Check if at least one element satisfies `p`
///
/// Returns `false` for an empty sequence.
pub fn any<T, P>(p: P, s: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    s.iter().any(p)
}

/// Check if every element satisfies `p`
///
/// Returns `true` for an empty sequence.
pub fn all<T, P>(p: P, s: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    s.iter().all(p)
}

/// Find the index of the first element satisfying `p`
///
/// # Returns
/// The zero-based index, or [`NOT_FOUND`] (`-1`) if no element matches
pub fn find_index<T, P>(p: P, s: &[T]) -> isize
where
    P: FnMut(&T) -> bool,
{
    // Slice lengths never exceed isize::MAX.
    s.iter().position(p).map_or(NOT_FOUND, |i| i as isize)
}

/// Find the indices of all elements satisfying `p`, in ascending order
pub fn find_indices<T, P>(mut p: P, s: &[T]) -> Vec<usize>
where
    P: FnMut(&T) -> bool,
{
    s.iter()
        .enumerate()
        .filter_map(|(i, el)| p(el).then_some(i))
        .collect()
}
