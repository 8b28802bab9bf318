//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to every value inside a container while
//! preserving the container's shape: a `Vec` of five elements maps to a
//! `Vec` of five elements, `None` stays `None`, an `Err` keeps its error.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! K::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! K::map(K::map(fa, f), g) == K::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Functor, FunctorSyntax, OptionInstance, VecInstance};
//!
//! assert_eq!(OptionInstance::map(Some(5), |n: i32| n.to_string()), Some("5".to_string()));
//! assert_eq!(VecInstance::map(vec![1, 2, 3], |n| n * 2), vec![2, 4, 6]);
//!
//! // Method syntax resolves the instance from the value's type.
//! assert_eq!(Some(5).fmap(|n| n + 1), Some(6));
//! ```

use super::higher::TypeConstructor;
use super::identity::{Identity, IdentityInstance};
use super::instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
use crate::control::Either;

/// A type class for type constructors whose contents can be mapped.
///
/// Functions are `FnMut` because containers with several elements call
/// them once per element.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Functor, ResultInstance};
///
/// let parsed: Result<i32, String> = Ok(20);
/// assert_eq!(ResultInstance::map(parsed, |n| n + 1), Ok(21));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside `fa`.
    fn map<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        F: FnMut(A) -> B;

    /// Replaces every value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Functor, VecInstance};
    ///
    /// assert_eq!(VecInstance::replace(vec![1, 2], "x"), vec!["x", "x"]);
    /// ```
    fn replace<A, B>(fa: Self::Applied<A>, value: B) -> Self::Applied<B>
    where
        B: Clone,
    {
        Self::map(fa, move |_| value.clone())
    }

    /// Discards the values, keeping only the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Functor, OptionInstance};
    ///
    /// assert_eq!(OptionInstance::void(Some(3)), Some(()));
    /// ```
    fn void<A>(fa: Self::Applied<A>) -> Self::Applied<()> {
        Self::map(fa, |_| ())
    }

    /// Pairs every value with the result of `function` applied to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Functor, VecInstance};
    ///
    /// let words = vec!["a", "bcd"];
    /// assert_eq!(VecInstance::fproduct(words, |word| word.len()), vec![("a", 1), ("bcd", 3)]);
    /// ```
    fn fproduct<A, B, F>(fa: Self::Applied<A>, mut function: F) -> Self::Applied<(A, B)>
    where
        F: FnMut(&A) -> B,
    {
        Self::map(fa, move |value| {
            let derived = function(&value);
            (value, derived)
        })
    }

    /// Pairs every value with `left` on the left.
    fn tuple_left<A, B>(fa: Self::Applied<A>, left: B) -> Self::Applied<(B, A)>
    where
        B: Clone,
    {
        Self::map(fa, move |value| (left.clone(), value))
    }

    /// Pairs every value with `right` on the right.
    fn tuple_right<A, B>(fa: Self::Applied<A>, right: B) -> Self::Applied<(A, B)>
    where
        B: Clone,
    {
        Self::map(fa, move |value| (value, right.clone()))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Functor for OptionInstance {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(function)
    }
}

// =============================================================================
// Result<A, E> Implementation
// =============================================================================

impl<E> Functor for ResultInstance<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        fa.map(function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl Functor for VecInstance {
    #[inline]
    fn map<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl Functor for IdentityInstance {
    #[inline]
    fn map<A, B, F>(fa: Identity<A>, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(fa.0))
    }
}

// =============================================================================
// Either<L, A> Implementation
// =============================================================================

impl<L> Functor for EitherInstance<L> {
    #[inline]
    fn map<A, B, F>(fa: Either<L, A>, function: F) -> Either<L, B>
    where
        F: FnMut(A) -> B,
    {
        fa.map_right(function)
    }
}

// =============================================================================
// (E, A) Implementation
// =============================================================================

impl<E> Functor for PairInstance<E> {
    #[inline]
    fn map<A, B, F>(fa: (E, A), mut function: F) -> (E, B)
    where
        F: FnMut(A) -> B,
    {
        let (context, value) = fa;
        (context, function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_map_calls_function_per_element() {
        let mut calls = 0;
        let mapped = VecInstance::map(vec![1, 2, 3], |value| {
            calls += 1;
            value * value
        });
        assert_eq!(mapped, vec![1, 4, 9]);
        assert_eq!(calls, 3);
    }

    #[rstest]
    fn option_map_preserves_none() {
        assert_eq!(OptionInstance::map(None::<i32>, |value| value + 1), None);
    }

    #[rstest]
    fn result_map_keeps_error() {
        let failed: Result<i32, &str> = Err("bad");
        assert_eq!(ResultInstance::map(failed, |value| value + 1), Err("bad"));
    }

    #[rstest]
    fn either_map_is_right_biased() {
        let left: Either<&str, i32> = Either::Left("stop");
        assert_eq!(EitherInstance::map(left, |value| value * 2), Either::Left("stop"));
        assert_eq!(EitherInstance::<&str>::map(Either::Right(4), |value| value * 2), Either::Right(8));
    }

    #[rstest]
    fn pair_map_keeps_context() {
        assert_eq!(PairInstance::map(("log", 2), |value| value + 1), ("log", 3));
    }

    #[rstest]
    fn tuple_helpers_pair_values() {
        assert_eq!(OptionInstance::tuple_left(Some(1), 'a'), Some(('a', 1)));
        assert_eq!(OptionInstance::tuple_right(Some(1), 'a'), Some((1, 'a')));
    }

    #[rstest]
    fn identity_replace_discards_value() {
        assert_eq!(IdentityInstance::replace(Identity(1), "new"), Identity("new"));
    }
}
