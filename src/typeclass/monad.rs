//! Monad type class - sequencing computations within a context.
//!
//! `Monad` is [`FlatMap`] together with [`Applicative`]: dependent
//! sequencing plus a way to lift plain values. On top of those it provides
//! the `iterate_*` loops, all of which run through `tail_rec_m` and so stay
//! within constant native stack space.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! K::flat_map(K::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! K::flat_map(fa, K::pure) == fa
//! ```
//!
//! ## Map Consistency
//!
//! ```text
//! K::map(fa, f) == K::flat_map(fa, |a| K::pure(f(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monad, OptionInstance};
//!
//! // Doubles until the value reaches 1000, one step per iteration.
//! let doubled = OptionInstance::iterate_while_m(1_u32, |n| Some(n * 2), |n| *n < 1000);
//! assert_eq!(doubled, Some(1024));
//! ```

use super::applicative::Applicative;
use super::flat_map::FlatMap;
use super::identity::IdentityInstance;
use super::instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
use super::monoid::Monoid;
use crate::control::Either;

/// A [`FlatMap`] that is also [`Applicative`].
///
/// Nothing is required beyond the two parent traits; every instance with
/// both is a monad.
pub trait Monad: FlatMap + Applicative {
    /// Applies `function` repeatedly, starting from `init`, while `predicate`
    /// holds for the current value.
    ///
    /// `predicate` is checked before every step, including the first, so an
    /// `init` that fails it is returned without running `function`.
    fn iterate_while_m<A, F, P>(init: A, mut function: F, mut predicate: P) -> Self::Applied<A>
    where
        F: FnMut(A) -> Self::Applied<A>,
        P: FnMut(&A) -> bool,
    {
        Self::tail_rec_m(init, move |current| {
            if predicate(&current) {
                Self::map(function(current), Either::Left)
            } else {
                Self::pure(Either::Right(current))
            }
        })
    }

    /// Applies `function` repeatedly, starting from `init`, until `predicate`
    /// holds for the current value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Monad, ResultInstance};
    ///
    /// let result: Result<u64, String> =
    ///     ResultInstance::iterate_until_m(0, |n| Ok(n + 3), |n| *n >= 10);
    /// assert_eq!(result, Ok(12));
    /// ```
    fn iterate_until_m<A, F, P>(init: A, function: F, mut predicate: P) -> Self::Applied<A>
    where
        F: FnMut(A) -> Self::Applied<A>,
        P: FnMut(&A) -> bool,
    {
        Self::iterate_while_m(init, function, move |current| !predicate(current))
    }

    /// Runs `fa`, then keeps re-running it while its result satisfies
    /// `predicate`. Only the final result is kept.
    fn iterate_while<A, P>(fa: Self::Applied<A>, mut predicate: P) -> Self::Applied<A>
    where
        Self::Applied<A>: Clone,
        P: FnMut(&A) -> bool,
    {
        let repeated = fa.clone();
        Self::flat_map(fa, move |first| {
            Self::iterate_while_m(first, |_| repeated.clone(), &mut predicate)
        })
    }

    /// Runs `fa`, then keeps re-running it until its result satisfies
    /// `predicate`. Only the final result is kept.
    fn iterate_until<A, P>(fa: Self::Applied<A>, mut predicate: P) -> Self::Applied<A>
    where
        Self::Applied<A>: Clone,
        P: FnMut(&A) -> bool,
    {
        Self::iterate_while(fa, move |current| !predicate(current))
    }
}

impl Monad for OptionInstance {}

impl<E> Monad for ResultInstance<E> {}

impl Monad for VecInstance {}

impl Monad for IdentityInstance {}

impl<L> Monad for EitherInstance<L> {}

impl<E: Monoid> Monad for PairInstance<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, Sum};
    use rstest::rstest;

    #[rstest]
    fn iterate_while_m_runs_many_steps() {
        let result = OptionInstance::iterate_while_m(0_u64, |n| Some(n + 1), |n| *n < 500_000);
        assert_eq!(result, Some(500_000));
    }

    #[rstest]
    fn iterate_while_m_checks_initial_value() {
        let mut calls = 0;
        let result = IdentityInstance::iterate_while_m(
            10,
            |n| {
                calls += 1;
                Identity(n + 1)
            },
            |n| *n < 5,
        );
        assert_eq!(result, Identity(10));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn iterate_until_m_stops_on_failure() {
        let result: Result<i32, &str> =
            ResultInstance::iterate_until_m(1, |n| if n > 50 { Err("too big") } else { Ok(n * 3) }, |n| *n > 1000);
        assert_eq!(result, Err("too big"));
    }

    #[rstest]
    fn iterate_until_m_in_pair_accumulates_log() {
        let result = PairInstance::iterate_until_m(0_u32, |n| (Sum::new(1_u32), n + 2), |n| *n >= 10);
        assert_eq!(result, (Sum::new(5), 10));
    }

    #[rstest]
    #[case(Some(5), Some(5))]
    #[case(None, None)]
    fn iterate_while_returns_first_failing_result(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionInstance::iterate_while(input, |n| *n > 10), expected);
    }

    #[rstest]
    fn iterate_until_keeps_satisfying_result() {
        assert_eq!(
            PairInstance::iterate_until((Sum::new(1_i32), 4), |n| *n == 4),
            (Sum::new(1), 4)
        );
    }

    #[rstest]
    fn vec_iterate_while_m_branches_depth_first() {
        let result = VecInstance::iterate_while_m(1, |n| vec![n * 2, n * 2 + 1], |n| *n < 4);
        assert_eq!(result, vec![4, 5, 6, 7]);
    }
}
