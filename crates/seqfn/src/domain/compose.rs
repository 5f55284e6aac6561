//! Function composition
//!
//! Composes a variable-length list of unary functions `T -> T` into a single
//! function. [`compose`] applies the list right-to-left (mathematical order)
//! and [`compose_right_to_left`] applies it left-to-right.
//!
//! The list can be anything iterable over function values: an array of fn
//! pointers, a `Vec<Box<dyn Fn(T) -> T>>`, or a borrowed `&Vec<F>` when the
//! caller wants to keep its own list. For closures of different types that
//! should not be boxed, see the `compose!` and `compose_right_to_left!`
//! macros.

/// Return the argument unchanged
///
/// This is the function produced by composing zero functions.
pub fn identity<T>(x: T) -> T {
    x
}

/// Compose functions right-to-left
///
/// `compose([f1, f2, f3])(x) == f1(f2(f3(x)))`. An empty list yields the
/// identity function.
///
/// # Examples
/// ```
/// fn double(x: i32) -> i32 { x * 2 }
/// fn inc(x: i32) -> i32 { x + 1 }
///
/// let fs: [fn(i32) -> i32; 2] = [double, inc];
/// assert_eq!(seqfn::compose(fs)(5), 12);
/// ```
pub fn compose<T, F, I>(fs: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let fs: Vec<F> = fs.into_iter().collect();
    move |x| fs.iter().rfold(x, |acc, f| f(acc))
}

/// Compose functions left-to-right
///
/// `compose_right_to_left([f1, f2, f3])(x) == f3(f2(f1(x)))`, i.e. [`compose`]
/// over the reversed list. Only the internally collected copy is reversed,
/// so a list passed by reference keeps its order.
pub fn compose_right_to_left<T, F, I>(fs: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let mut fs: Vec<F> = fs.into_iter().collect();
    fs.reverse();
    compose(fs)
}
