//! Applicative type class - lifting pure values.
//!
//! `Applicative` extends [`Apply`] with `pure`, which places a value into a
//! minimal context: `Some(a)`, `Ok(a)`, `vec![a]`, or `(E::empty(), a)`.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! K::ap(K::pure(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! K::ap(K::pure(f), K::pure(a)) == K::pure(f(a))
//! ```
//!
//! ## Map Consistency
//!
//! ```text
//! K::map(fa, f) == K::ap(K::pure(f), fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Applicative, OptionInstance, VecInstance};
//!
//! assert_eq!(OptionInstance::pure(42), Some(42));
//! assert_eq!(VecInstance::pure('a'), vec!['a']);
//! ```

use super::apply::Apply;
use super::identity::{Identity, IdentityInstance};
use super::instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
use super::monoid::Monoid;
use crate::control::Either;

/// An [`Apply`] with a way to lift plain values.
pub trait Applicative: Apply {
    /// Lifts `value` into the minimal context.
    fn pure<A>(value: A) -> Self::Applied<A>;

    /// The minimal context holding `()`.
    #[inline]
    fn unit() -> Self::Applied<()> {
        Self::pure(())
    }

    /// Runs `action` only when `condition` holds, otherwise [`unit`](Self::unit).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Applicative, ResultInstance};
    ///
    /// let failing: Result<(), &str> = Err("boom");
    /// assert_eq!(ResultInstance::when(false, failing), Ok(()));
    /// assert_eq!(ResultInstance::when(true, failing), Err("boom"));
    /// ```
    fn when(condition: bool, action: Self::Applied<()>) -> Self::Applied<()> {
        if condition { action } else { Self::unit() }
    }

    /// Runs `action` only when `condition` does not hold.
    fn unless(condition: bool, action: Self::Applied<()>) -> Self::Applied<()> {
        Self::when(!condition, action)
    }
}

impl Applicative for OptionInstance {
    #[inline]
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }
}

impl<E> Applicative for ResultInstance<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }
}

impl Applicative for VecInstance {
    #[inline]
    fn pure<A>(value: A) -> Vec<A> {
        vec![value]
    }
}

impl Applicative for IdentityInstance {
    #[inline]
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }
}

impl<L> Applicative for EitherInstance<L> {
    #[inline]
    fn pure<A>(value: A) -> Either<L, A> {
        Either::Right(value)
    }
}

impl<E: Monoid> Applicative for PairInstance<E> {
    #[inline]
    fn pure<A>(value: A) -> (E, A) {
        (E::empty(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Functor;
    use rstest::rstest;

    #[rstest]
    fn pure_for_each_instance() {
        assert_eq!(OptionInstance::pure(1), Some(1));
        assert_eq!(ResultInstance::<()>::pure(1), Ok(1));
        assert_eq!(VecInstance::pure(1), vec![1]);
        assert_eq!(IdentityInstance::pure(1), Identity(1));
        assert_eq!(EitherInstance::<()>::pure(1), Either::Right(1));
        assert_eq!(PairInstance::<String>::pure(1), (String::new(), 1));
    }

    #[rstest]
    fn map_is_ap_of_pure() {
        let function = |value: i32| value * 3;
        let values = vec![1, 2, 3];
        assert_eq!(
            VecInstance::map(values.clone(), function),
            VecInstance::ap(VecInstance::pure(function), values)
        );
    }

    #[rstest]
    #[case(true, vec![()])]
    #[case(false, vec![])]
    fn unless_skips_action_when_condition_holds(#[case] condition: bool, #[case] expected: Vec<()>) {
        assert_eq!(VecInstance::unless(condition, Vec::new()), expected);
    }

    #[rstest]
    #[case(true, vec![(), (), ()])]
    #[case(false, vec![()])]
    fn when_runs_action_only_when_condition_holds(#[case] condition: bool, #[case] expected: Vec<()>) {
        assert_eq!(VecInstance::when(condition, vec![(); 3]), expected);
    }
}
