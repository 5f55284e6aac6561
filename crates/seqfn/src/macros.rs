//! Composition macros
//!
//! Unlike [`compose`](fn@crate::compose), these accept closures of distinct
//! types without boxing, and the stages may change type as long as each
//! output feeds the next input.

/// Compose functions right-to-left: `compose!(f, g, h)(x) == f(g(h(x)))`
///
/// `compose!()` is [`identity`](crate::identity).
///
/// # Examples
/// ```
/// use seqfn::compose;
///
/// let describe = compose!(|n: usize| format!("{n} chars"), |s: &str| s.len());
/// assert_eq!(describe("hello"), "5 chars");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |x| outer(inner(x))
    }};
}

/// Compose functions left-to-right: `compose_right_to_left!(f, g, h)(x) == h(g(f(x)))`
///
/// Expands to [`compose!`] over the reversed argument list.
///
/// # Examples
/// ```
/// use seqfn::compose_right_to_left;
///
/// let shout = compose_right_to_left!(|s: &str| s.trim().to_string(), |s: String| s.to_uppercase());
/// assert_eq!(shout("  hi "), "HI");
/// ```
#[macro_export]
macro_rules! compose_right_to_left {
    ($($f:expr),* $(,)?) => {
        $crate::__compose_reversed!([] $($f),*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compose_reversed {
    ([$($done:expr),*]) => {
        $crate::compose!($($done),*)
    };
    ([$($done:expr),*] $head:expr $(, $tail:expr)*) => {
        $crate::__compose_reversed!([$head $(, $done)*] $($tail),*)
    };
}

#[cfg(test)]
mod tests {
    fn div7(x: i32) -> i32 {
        x / 7
    }

    fn minus1(x: i32) -> i32 {
        x - 1
    }

    fn div3(x: i32) -> i32 {
        x / 3
    }

    #[test]
    fn test_compose_macro_order() {
        let g = compose!(div3, minus1, div7);
        assert_eq!(g(49), div3(minus1(div7(49))));
    }

    #[test]
    fn test_compose_macro_closures() {
        let offset = 3;
        let g = compose!(|x: i32| x * 10, move |x: i32| x + offset);
        assert_eq!(g(1), 40);
    }

    #[test]
    fn test_compose_macro_empty() {
        let g = compose!();
        assert_eq!(g(5), 5);
    }

    #[test]
    fn test_compose_macro_single() {
        let g = compose!(div7);
        assert_eq!(g(21), 3);
    }

    #[test]
    fn test_compose_macro_changes_type() {
        let g = compose!(|n: usize| n % 2 == 0, |s: String| s.len());
        assert!(g(String::from("ab")));
        assert!(!g(String::from("abc")));
    }

    #[test]
    fn test_compose_right_to_left_macro_order() {
        let g = compose_right_to_left!(div7, minus1, div3);
        assert_eq!(g(49), div3(minus1(div7(49))));
    }

    #[test]
    fn test_compose_right_to_left_macro_two() {
        let g = compose_right_to_left!(|x: i32| x * 10, |x: i32| x + 3);
        assert_eq!(g(1), 13);
    }

    #[test]
    fn test_compose_right_to_left_macro_empty() {
        let g = compose_right_to_left!();
        assert_eq!(g("same"), "same");
    }

    #[test]
    fn test_compose_right_to_left_macro_trailing_comma() {
        let g = compose_right_to_left!(div7, minus1,);
        assert_eq!(g(49), 6);
    }
}
