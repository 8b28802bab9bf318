//! Apply type class - combining independent effects.
//!
//! `Apply` extends [`Functor`] with the ability to combine two containers
//! into one. Multi-element containers combine as a cartesian product in
//! `flat_map` order (every left element, each paired with every right
//! element).
//!
//! # Laws
//!
//! ## Composition
//!
//! ```text
//! K::map2(K::map2(fa, fb, f), fc, g) == K::map2(fa, K::product(fb, fc), |a, (b, c)| g(f(a, b), c))
//! ```
//!
//! ## Map2 / Product Consistency
//!
//! ```text
//! K::map2(fa, fb, f) == K::map(K::product(fa, fb), |(a, b)| f(a, b))
//! ```
//!
//! ## ProductL / ProductR Consistency
//!
//! ```text
//! K::product_left(fa, fb)  == K::map2(fa, fb, |a, _| a)
//! K::product_right(fa, fb) == K::map2(fa, fb, |_, b| b)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Apply, OptionInstance, VecInstance};
//!
//! assert_eq!(OptionInstance::map2(Some(1), Some(2), |a, b| a + b), Some(3));
//! assert_eq!(OptionInstance::map2(Some(1), None::<i32>, |a, b| a + b), None);
//! assert_eq!(
//!     VecInstance::product(vec![1, 2], vec!['a', 'b']),
//!     vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
//! );
//! ```

use super::functor::Functor;
use super::identity::{Identity, IdentityInstance};
use super::instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
use super::semigroup::Semigroup;
use crate::control::Either;

/// A functor that can combine independent containers.
///
/// `ap` and `map2` are both required so that each instance can supply the
/// direct version; instances built on `flat_map` delegate both to
/// [`FlatMap::ap_via_flat_map`](super::FlatMap::ap_via_flat_map) and
/// [`FlatMap::map2_via_flat_map`](super::FlatMap::map2_via_flat_map).
///
/// The `Clone` bounds let multi-element containers reuse values across the
/// cartesian product.
pub trait Apply: Functor {
    /// Applies the functions in `ff` to the values in `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Apply, VecInstance};
    ///
    /// let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
    /// assert_eq!(VecInstance::ap(functions, vec![1, 2]), vec![2, 3, 10, 20]);
    /// ```
    fn ap<A, B, F>(ff: Self::Applied<F>, fa: Self::Applied<A>) -> Self::Applied<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        Self::Applied<A>: Clone;

    /// Combines the values of `fa` and `fb` with `function`.
    fn map2<A, B, C, F>(fa: Self::Applied<A>, fb: Self::Applied<B>, function: F) -> Self::Applied<C>
    where
        A: Clone,
        B: Clone,
        Self::Applied<B>: Clone,
        F: FnMut(A, B) -> C;

    /// Pairs the values of `fa` and `fb`.
    fn product<A, B>(fa: Self::Applied<A>, fb: Self::Applied<B>) -> Self::Applied<(A, B)>
    where
        A: Clone,
        B: Clone,
        Self::Applied<B>: Clone,
    {
        Self::map2(fa, fb, |left, right| (left, right))
    }

    /// Combines both effects, keeping the left values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Apply, OptionInstance};
    ///
    /// assert_eq!(OptionInstance::product_left(Some(1), Some("ignored")), Some(1));
    /// assert_eq!(OptionInstance::product_left(Some(1), None::<&str>), None);
    /// ```
    fn product_left<A, B>(fa: Self::Applied<A>, fb: Self::Applied<B>) -> Self::Applied<A>
    where
        A: Clone,
        B: Clone,
        Self::Applied<B>: Clone,
    {
        Self::map2(fa, fb, |left, _| left)
    }

    /// Combines both effects, keeping the right values.
    fn product_right<A, B>(fa: Self::Applied<A>, fb: Self::Applied<B>) -> Self::Applied<B>
    where
        A: Clone,
        B: Clone,
        Self::Applied<B>: Clone,
    {
        Self::map2(fa, fb, |_, right| right)
    }

    /// Combines three containers with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Apply, ResultInstance};
    ///
    /// let sum = ResultInstance::<String>::map3(Ok(1), Ok(2), Ok(3), |a, b, c| a + b + c);
    /// assert_eq!(sum, Ok(6));
    /// ```
    fn map3<A, B, C, D, F>(
        fa: Self::Applied<A>,
        fb: Self::Applied<B>,
        fc: Self::Applied<C>,
        mut function: F,
    ) -> Self::Applied<D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        Self::Applied<B>: Clone,
        Self::Applied<C>: Clone,
        F: FnMut(A, B, C) -> D,
    {
        Self::map2(Self::product(fa, fb), fc, move |(first, second), third| {
            function(first, second, third)
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Apply for OptionInstance {
    fn ap<A, B, F>(ff: Option<F>, fa: Option<A>) -> Option<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        Option<A>: Clone,
    {
        match (ff, fa) {
            (Some(mut function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }

    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, mut function: F) -> Option<C>
    where
        A: Clone,
        B: Clone,
        Option<B>: Clone,
        F: FnMut(A, B) -> C,
    {
        match (fa, fb) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<A, E> Implementation
// =============================================================================

/// The first error, in left-to-right order, wins.
impl<E> Apply for ResultInstance<E> {
    fn ap<A, B, F>(ff: Result<F, E>, fa: Result<A, E>) -> Result<B, E>
    where
        F: FnMut(A) -> B,
        A: Clone,
        Result<A, E>: Clone,
    {
        match (ff, fa) {
            (Ok(mut function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, mut function: F) -> Result<C, E>
    where
        A: Clone,
        B: Clone,
        Result<B, E>: Clone,
        F: FnMut(A, B) -> C,
    {
        match (fa, fb) {
            (Ok(left), Ok(right)) => Ok(function(left, right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl Apply for VecInstance {
    fn ap<A, B, F>(ff: Vec<F>, fa: Vec<A>) -> Vec<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        Vec<A>: Clone,
    {
        let mut result = Vec::with_capacity(ff.len() * fa.len());
        for mut function in ff {
            for value in &fa {
                result.push(function(value.clone()));
            }
        }
        result
    }

    fn map2<A, B, C, F>(fa: Vec<A>, fb: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        B: Clone,
        Vec<B>: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(fa.len() * fb.len());
        for left in fa {
            for right in &fb {
                result.push(function(left.clone(), right.clone()));
            }
        }
        result
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl Apply for IdentityInstance {
    fn ap<A, B, F>(ff: Identity<F>, fa: Identity<A>) -> Identity<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        Identity<A>: Clone,
    {
        let Identity(mut function) = ff;
        Identity(function(fa.0))
    }

    fn map2<A, B, C, F>(fa: Identity<A>, fb: Identity<B>, mut function: F) -> Identity<C>
    where
        A: Clone,
        B: Clone,
        Identity<B>: Clone,
        F: FnMut(A, B) -> C,
    {
        Identity(function(fa.0, fb.0))
    }
}

// =============================================================================
// Either<L, A> Implementation
// =============================================================================

impl<L> Apply for EitherInstance<L> {
    fn ap<A, B, F>(ff: Either<L, F>, fa: Either<L, A>) -> Either<L, B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        Either<L, A>: Clone,
    {
        match (ff, fa) {
            (Either::Right(mut function), Either::Right(value)) => Either::Right(function(value)),
            (Either::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    fn map2<A, B, C, F>(fa: Either<L, A>, fb: Either<L, B>, mut function: F) -> Either<L, C>
    where
        A: Clone,
        B: Clone,
        Either<L, B>: Clone,
        F: FnMut(A, B) -> C,
    {
        match (fa, fb) {
            (Either::Right(left), Either::Right(right)) => Either::Right(function(left, right)),
            (Either::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

// =============================================================================
// (E, A) Implementation
// =============================================================================

/// The contexts are combined left to right.
impl<E: Semigroup> Apply for PairInstance<E> {
    fn ap<A, B, F>(ff: (E, F), fa: (E, A)) -> (E, B)
    where
        F: FnMut(A) -> B,
        A: Clone,
        (E, A): Clone,
    {
        let (left_context, mut function) = ff;
        let (right_context, value) = fa;
        (left_context.combine(right_context), function(value))
    }

    fn map2<A, B, C, F>(fa: (E, A), fb: (E, B), mut function: F) -> (E, C)
    where
        A: Clone,
        B: Clone,
        (E, B): Clone,
        F: FnMut(A, B) -> C,
    {
        let (left_context, left) = fa;
        let (right_context, right) = fb;
        (left_context.combine(right_context), function(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(3), Some(6))]
    #[case(None, Some(3), None)]
    #[case(Some(2), None, None)]
    fn option_map2_requires_both(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionInstance::map2(left, right, |a, b| a * b), expected);
    }

    #[rstest]
    fn result_map2_reports_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(ResultInstance::map2(first, second, |a, b| a + b), Err("first"));
    }

    #[rstest]
    fn vec_map2_is_cartesian_in_order() {
        let combined = VecInstance::map2(vec![1, 2], vec![10, 20, 30], |a, b| a + b);
        assert_eq!(combined, vec![11, 21, 31, 12, 22, 32]);
    }

    #[rstest]
    fn vec_product_with_empty_is_empty() {
        assert_eq!(VecInstance::product(vec![1, 2], Vec::<char>::new()), Vec::<(i32, char)>::new());
    }

    #[rstest]
    fn pair_map2_combines_context() {
        let combined = PairInstance::map2((String::from("a"), 1), (String::from("b"), 2), |x, y| x + y);
        assert_eq!(combined, (String::from("ab"), 3));
    }

    #[rstest]
    fn map3_combines_three() {
        let result = OptionInstance::map3(Some(1), Some(2), Some(3), |a, b, c| a * 100 + b * 10 + c);
        assert_eq!(result, Some(123));
    }

    #[rstest]
    fn product_right_keeps_right_values() {
        assert_eq!(VecInstance::product_right(vec![1, 2], vec!['x']), vec!['x', 'x']);
        assert_eq!(IdentityInstance::product_right(Identity(1), Identity('x')), Identity('x'));
    }
}
