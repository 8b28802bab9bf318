//! `FlatMap` type class - sequencing dependent computations.
//!
//! `FlatMap` extends [`Apply`] with `flat_map`, where the next container may
//! depend on the previous value, and with `tail_rec_m`, a loop expressed as
//! repeated `flat_map` that runs in constant native stack space.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! K::flat_map(K::flat_map(fa, f), g) == K::flat_map(fa, |a| K::flat_map(f(a), g))
//! ```
//!
//! ## Apply Consistency
//!
//! ```text
//! K::ap(ff, fa) == K::flat_map(ff, |f| K::map(fa, f))
//! ```
//!
//! ## `tail_rec_m` Consistency
//!
//! ```text
//! K::tail_rec_m(a, f) == K::flat_map(f(a), |step| match step {
//!     Left(next) => K::tail_rec_m(next, f),
//!     Right(done) => K::pure(done),
//! })
//! ```
//!
//! ## Stack Safety
//!
//! `tail_rec_m` never recurses through `flat_map`: every instance drives
//! its steps with an explicit loop, so the iteration count is bounded only
//! by memory.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Either;
//! use lawful::typeclass::{FlatMap, OptionInstance};
//!
//! let halved = OptionInstance::flat_map(Some(8), |n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(4));
//!
//! let counted = OptionInstance::tail_rec_m(0_u32, |n| {
//!     Some(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
//! });
//! assert_eq!(counted, Some(100_000));
//! ```

use std::convert::Infallible;

use super::apply::Apply;
use super::identity::{Identity, IdentityInstance};
use super::instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
use super::semigroup::Semigroup;
use crate::control::{Either, Eval, Lazy, tail_rec};

/// An [`Apply`] whose containers can be sequenced dependently.
///
/// # Required methods
///
/// - [`flat_map`](Self::flat_map)
/// - [`tail_rec_m`](Self::tail_rec_m), which must loop explicitly
///
/// Everything else is derived from these two and `map`.
pub trait FlatMap: Apply {
    /// Feeds every value of `fa` to `function` and joins the results.
    fn flat_map<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        F: FnMut(A) -> Self::Applied<B>;

    /// Repeats `step` from `seed` until every branch yields `Either::Right`.
    ///
    /// `Either::Left(next)` continues with `next`; `Either::Right(done)`
    /// contributes `done` to the result.
    fn tail_rec_m<A, B, F>(seed: A, step: F) -> Self::Applied<B>
    where
        F: FnMut(A) -> Self::Applied<Either<A, B>>;

    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{FlatMap, VecInstance};
    ///
    /// assert_eq!(VecInstance::flatten(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    /// ```
    fn flatten<A>(ffa: Self::Applied<Self::Applied<A>>) -> Self::Applied<A> {
        Self::flat_map(ffa, |fa| fa)
    }

    /// Chooses between two branches by an effectful condition.
    ///
    /// The branches are thunks: only the selected one is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{FlatMap, VecInstance};
    ///
    /// let chosen = VecInstance::if_m(vec![true, false], || vec![1, 2], || vec![0]);
    /// assert_eq!(chosen, vec![1, 2, 0]);
    /// ```
    fn if_m<B, T, E>(condition: Self::Applied<bool>, mut if_true: T, mut if_false: E) -> Self::Applied<B>
    where
        T: FnMut() -> Self::Applied<B>,
        E: FnMut() -> Self::Applied<B>,
    {
        Self::flat_map(condition, move |holds| if holds { if_true() } else { if_false() })
    }

    /// Runs the effect of `function` for every value, keeping the original values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{FlatMap, OptionInstance};
    ///
    /// let checked = OptionInstance::flat_tap(Some(4), |n: i32| if n > 0 { Some(()) } else { None });
    /// assert_eq!(checked, Some(4));
    /// let rejected = OptionInstance::flat_tap(Some(-4), |n: i32| if n > 0 { Some(()) } else { None });
    /// assert_eq!(rejected, None);
    /// ```
    fn flat_tap<A, B, F>(fa: Self::Applied<A>, mut function: F) -> Self::Applied<A>
    where
        A: Clone,
        F: FnMut(A) -> Self::Applied<B>,
    {
        Self::flat_map(fa, move |value| {
            let effect = function(value.clone());
            Self::map(effect, move |_| value.clone())
        })
    }

    /// Pairs every value with the values of the container it produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{FlatMap, VecInstance};
    ///
    /// let pairs = VecInstance::mproduct(vec![1, 2], |n| vec![n * 10; n as usize]);
    /// assert_eq!(pairs, vec![(1, 10), (2, 20), (2, 20)]);
    /// ```
    fn mproduct<A, B, F>(fa: Self::Applied<A>, mut function: F) -> Self::Applied<(A, B)>
    where
        A: Clone,
        F: FnMut(A) -> Self::Applied<B>,
    {
        Self::flat_map(fa, move |value| {
            let produced = function(value.clone());
            Self::map(produced, move |derived| (value.clone(), derived))
        })
    }

    /// Sequences `fa` then `fb`, keeping the values of `fb`.
    fn followed_by<A, B>(fa: Self::Applied<A>, fb: Self::Applied<B>) -> Self::Applied<B>
    where
        Self::Applied<B>: Clone,
    {
        Self::flat_map(fa, move |_| fb.clone())
    }

    /// Sequences `fa` then a deferred `fb`, keeping the values of `fb`.
    ///
    /// `fb` is evaluated at most once, and only if `fa` produces a value to
    /// continue with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Eval;
    /// use lawful::typeclass::{FlatMap, OptionInstance};
    ///
    /// let skipped = OptionInstance::product_right_eval(None::<i32>, Eval::later(|| panic!("not forced")));
    /// assert_eq!(skipped, None::<i32>);
    ///
    /// let ran = OptionInstance::product_right_eval(Some(1), Eval::later(|| Some("second")));
    /// assert_eq!(ran, Some("second"));
    /// ```
    fn product_right_eval<A, B>(fa: Self::Applied<A>, fb: Eval<Self::Applied<B>>) -> Self::Applied<B>
    where
        Self::Applied<B>: Clone + 'static,
    {
        let deferred = Lazy::new(move || fb.value());
        Self::flat_map(fa, move |_| deferred.force().clone())
    }

    /// Sequences `fa` then a deferred `fb`, keeping the values of `fa`.
    ///
    /// `fb` is evaluated at most once, and only if `fa` produces a value to
    /// continue with.
    fn product_left_eval<A, B>(fa: Self::Applied<A>, fb: Eval<Self::Applied<B>>) -> Self::Applied<A>
    where
        A: Clone,
        Self::Applied<B>: Clone + 'static,
    {
        let deferred = Lazy::new(move || fb.value());
        Self::flat_map(fa, move |value| {
            Self::map(deferred.force().clone(), move |_| value.clone())
        })
    }

    /// `ap` expressed through `flat_map` and `map`.
    ///
    /// Instances without a more direct `ap` delegate their
    /// [`Apply::ap`] here.
    fn ap_via_flat_map<A, B, F>(ff: Self::Applied<F>, fa: Self::Applied<A>) -> Self::Applied<B>
    where
        F: FnMut(A) -> B,
        Self::Applied<A>: Clone,
    {
        Self::flat_map(ff, move |function| Self::map(fa.clone(), function))
    }

    /// `map2` expressed through `flat_map` and `map`.
    ///
    /// Instances without a more direct `map2` delegate their
    /// [`Apply::map2`] here.
    fn map2_via_flat_map<A, B, C, F>(
        fa: Self::Applied<A>,
        fb: Self::Applied<B>,
        mut function: F,
    ) -> Self::Applied<C>
    where
        A: Clone,
        Self::Applied<B>: Clone,
        F: FnMut(A, B) -> C,
    {
        Self::flat_map(fa, move |left| {
            Self::map(fb.clone(), |right| function(left.clone(), right))
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl FlatMap for OptionInstance {
    #[inline]
    fn flat_map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        fa.and_then(function)
    }

    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> Option<B>
    where
        F: FnMut(A) -> Option<Either<A, B>>,
    {
        tail_rec(seed, |current| step(current).ok_or(())).ok()
    }
}

// =============================================================================
// Result<A, E> Implementation
// =============================================================================

impl<E> FlatMap for ResultInstance<E> {
    #[inline]
    fn flat_map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        fa.and_then(function)
    }

    fn tail_rec_m<A, B, F>(seed: A, step: F) -> Result<B, E>
    where
        F: FnMut(A) -> Result<Either<A, B>, E>,
    {
        tail_rec(seed, step)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl FlatMap for VecInstance {
    #[inline]
    fn flat_map<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        fa.into_iter().flat_map(function).collect()
    }

    /// Depth-first, matching the order `flat_map` would produce.
    ///
    /// Pending branches live on a heap stack of iterators. An exhausted
    /// iterator is dropped before its last `Left` is expanded, so a linear
    /// chain of steps runs in constant memory.
    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<Either<A, B>>,
    {
        let mut result = Vec::new();
        let mut pending = vec![step(seed).into_iter()];
        let mut iterations: u64 = 1;

        while let Some(branch) = pending.last_mut() {
            match branch.next() {
                Some(Either::Left(next)) => {
                    if branch.len() == 0 {
                        pending.pop();
                    }
                    iterations += 1;
                    pending.push(step(next).into_iter());
                }
                Some(Either::Right(done)) => result.push(done),
                None => {
                    pending.pop();
                }
            }
        }

        trace_event!(iterations = iterations, produced = result.len(); "vec tail_rec_m finished");
        result
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl FlatMap for IdentityInstance {
    #[inline]
    fn flat_map<A, B, F>(fa: Identity<A>, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        function(fa.0)
    }

    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<Either<A, B>>,
    {
        match tail_rec::<_, _, Infallible, _>(seed, |current| Ok(step(current).0)) {
            Ok(done) => Identity(done),
            Err(never) => match never {},
        }
    }
}

// =============================================================================
// Either<L, A> Implementation
// =============================================================================

impl<L> FlatMap for EitherInstance<L> {
    #[inline]
    fn flat_map<A, B, F>(fa: Either<L, A>, function: F) -> Either<L, B>
    where
        F: FnMut(A) -> Either<L, B>,
    {
        fa.flat_map_right(function)
    }

    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> Either<L, B>
    where
        F: FnMut(A) -> Either<L, Either<A, B>>,
    {
        tail_rec(seed, |current| Result::from(step(current))).into()
    }
}

// =============================================================================
// (E, A) Implementation
// =============================================================================

/// The log of each step is appended to the log of the steps before it.
impl<E: Semigroup> FlatMap for PairInstance<E> {
    fn flat_map<A, B, F>(fa: (E, A), mut function: F) -> (E, B)
    where
        F: FnMut(A) -> (E, B),
    {
        let (log, value) = fa;
        let (more, result) = function(value);
        (log.combine(more), result)
    }

    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> (E, B)
    where
        F: FnMut(A) -> (E, Either<A, B>),
    {
        let (mut log, mut outcome) = step(seed);
        loop {
            match outcome {
                Either::Right(done) => return (log, done),
                Either::Left(next) => {
                    let (more, following) = step(next);
                    log = log.combine(more);
                    outcome = following;
                }
            }
        }
    }
}
