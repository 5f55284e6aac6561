//! Element-wise transformation and folding
//!
//! This module provides `map`, `filter` and `reduce` over borrowed slices.
//! Inputs are never mutated; every result is a freshly allocated value.

use thiserror::Error;

/// Sequence operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The operation needs at least one element
    #[error("Empty sequence: at least one element is required")]
    Empty,
}

/// Apply `f` to every element
///
/// Returns a new vector of the same length where `out[i] == f(&s[i])`.
///
/// # Examples
/// ```
/// let out = seqfn::map(|x| x + 1, &[1, 2, 3, 5]);
/// assert_eq!(out, vec![2, 3, 4, 6]);
/// ```
pub fn map<T, U, F>(f: F, s: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    s.iter().map(f).collect()
}

/// Keep the elements satisfying `p`, in their original order
pub fn filter<T, P>(mut p: P, s: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    s.iter().filter(|el| p(*el)).cloned().collect()
}

/// Fold `f` left-to-right over `s`, seeded with `A::default()`
///
/// `acc_0 = A::default()`, `acc_i = f(acc_{i-1}, &s[i])`, result is `acc_n`.
/// An empty sequence yields `A::default()`.
///
/// The seed is the default value, not `s[0]`. A reduction such as `min` only
/// gives the expected answer when the default is a valid sentinel for the
/// data: `reduce(min, [2, 0, 10, -1, 3])` is `-1` because `0 >= -1`, but
/// `reduce(min, [3, 5])` is `0`. Use [`reduce_first`] for those reductions.
///
/// # Examples
/// ```
/// let sum = seqfn::reduce(|acc: i32, x| acc + x, &[1, 2, 3]);
/// assert_eq!(sum, 6);
/// ```
pub fn reduce<T, A, F>(f: F, s: &[T]) -> A
where
    A: Default,
    F: FnMut(A, &T) -> A,
{
    s.iter().fold(A::default(), f)
}

/// Fold `f` left-to-right over `s`, seeded with the first element
///
/// # Returns
/// `Err(SequenceError::Empty)` if `s` has no elements
pub fn reduce_first<T, F>(f: F, s: &[T]) -> Result<T, SequenceError>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = s.split_first().ok_or(SequenceError::Empty)?;
    Ok(rest.iter().fold(first.clone(), f))
}
