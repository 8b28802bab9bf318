//! Laws of the value-level algebras.
//!
//! Each law set is a namespace of functions returning [`IsEq`], plus a
//! `check_samples` driver that states every law on every combination of a
//! few sample values. The drivers back the [`kernel_law_tests!`] macro.
//!
//! [`kernel_law_tests!`]: crate::kernel_law_tests

use std::fmt::Debug;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use super::is_eq::{IsEq, LawViolation};
use crate::typeclass::{CommutativeSemigroup, Group, Monoid, Semigroup};

/// Laws every [`Semigroup`] satisfies.
pub struct SemigroupLaws<S>(PhantomData<fn() -> S>);

impl<S: Semigroup + Clone> SemigroupLaws<S> {
    /// `(a ⊕ b) ⊕ c == a ⊕ (b ⊕ c)`
    pub fn associativity(a: S, b: S, c: S) -> IsEq<S> {
        IsEq::new(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c)),
        )
    }

    /// `combine_n(a, 1) == a`
    pub fn repeat_1(a: S) -> IsEq<S> {
        IsEq::new(a.clone().combine_n(NonZeroUsize::MIN), a)
    }

    /// `combine_n(a, 2) == a ⊕ a`
    pub fn repeat_2(a: S) -> IsEq<S> {
        let two = NonZeroUsize::MIN.saturating_add(1);
        IsEq::new(a.clone().combine_n(two), a.clone().combine(a))
    }

    /// Doubling agrees with combining `count` copies one at a time.
    pub fn combine_n_matches_fold(a: S, count: NonZeroUsize) -> IsEq<S> {
        let folded = (1..count.get()).fold(a.clone(), |accumulated, _| accumulated.combine(a.clone()));
        IsEq::new(a.combine_n(count), folded)
    }

    /// `reduce_all` agrees with a left fold, and is `None` only when empty.
    pub fn reduce_all_matches_fold(values: Vec<S>) -> IsEq<Option<S>> {
        let folded = values
            .clone()
            .into_iter()
            .reduce(|accumulated, value| accumulated.combine(value));
        IsEq::new(S::reduce_all(values), folded)
    }
}

impl<S: Semigroup + Clone + PartialEq + Debug> SemigroupLaws<S> {
    /// States every semigroup law on all combinations of `samples`.
    ///
    /// # Errors
    ///
    /// Returns the first law that fails.
    pub fn check_samples(samples: &[S]) -> Result<(), LawViolation> {
        for a in samples {
            Self::repeat_1(a.clone()).check("semigroup repeat 1")?;
            Self::repeat_2(a.clone()).check("semigroup repeat 2")?;
            for count in [1, 3, 4, 7] {
                if let Some(count) = NonZeroUsize::new(count) {
                    Self::combine_n_matches_fold(a.clone(), count).check("semigroup combine_n")?;
                }
            }
            for b in samples {
                for c in samples {
                    Self::associativity(a.clone(), b.clone(), c.clone())
                        .check("semigroup associativity")?;
                }
            }
        }
        Self::reduce_all_matches_fold(samples.to_vec()).check("semigroup reduce_all")
    }
}

/// Laws every [`Monoid`] satisfies, on top of [`SemigroupLaws`].
pub struct MonoidLaws<M>(PhantomData<fn() -> M>);

impl<M: Monoid + Clone> MonoidLaws<M> {
    /// `empty ⊕ a == a`
    pub fn left_identity(a: M) -> IsEq<M> {
        IsEq::new(M::empty().combine(a.clone()), a)
    }

    /// `a ⊕ empty == a`
    pub fn right_identity(a: M) -> IsEq<M> {
        IsEq::new(a.clone().combine(M::empty()), a)
    }

    /// `combine_n_or_empty(a, 0) == empty`
    pub fn repeat_0(a: M) -> IsEq<M> {
        IsEq::new(a.combine_n_or_empty(0), M::empty())
    }

    /// `combine_all` agrees with a fold starting from `empty`.
    pub fn combine_all_matches_fold(values: Vec<M>) -> IsEq<M> {
        let folded = values.clone().into_iter().fold(M::empty(), Semigroup::combine);
        IsEq::new(M::combine_all(values), folded)
    }

    /// `empty` is recognised by `is_empty_value`.
    pub fn is_empty_value(a: M) -> IsEq<bool>
    where
        M: PartialEq,
    {
        IsEq::new(a.is_empty_value(), a == M::empty())
    }
}

impl<M: Monoid + Clone + PartialEq + Debug> MonoidLaws<M> {
    /// States every monoid and semigroup law on all combinations of `samples`.
    ///
    /// # Errors
    ///
    /// Returns the first law that fails.
    pub fn check_samples(samples: &[M]) -> Result<(), LawViolation> {
        SemigroupLaws::check_samples(samples)?;
        for a in samples {
            Self::left_identity(a.clone()).check("monoid left identity")?;
            Self::right_identity(a.clone()).check("monoid right identity")?;
            Self::repeat_0(a.clone()).check("monoid repeat 0")?;
            Self::is_empty_value(a.clone()).check("monoid is_empty_value")?;
        }
        Self::combine_all_matches_fold(samples.to_vec()).check("monoid combine_all")?;
        Self::combine_all_matches_fold(Vec::new()).check("monoid combine_all of nothing")
    }
}

/// Laws every [`Group`] satisfies, on top of [`MonoidLaws`].
pub struct GroupLaws<G>(PhantomData<fn() -> G>);

impl<G: Group + Clone> GroupLaws<G> {
    /// `inverse(a) ⊕ a == empty`
    pub fn left_inverse(a: G) -> IsEq<G> {
        IsEq::new(a.clone().inverse().combine(a), G::empty())
    }

    /// `a ⊕ inverse(a) == empty`
    pub fn right_inverse(a: G) -> IsEq<G> {
        IsEq::new(a.clone().combine(a.inverse()), G::empty())
    }

    /// `remove(a, b) == a ⊕ inverse(b)`
    pub fn remove_consistency(a: G, b: G) -> IsEq<G> {
        IsEq::new(a.clone().remove(b.clone()), a.combine(b.inverse()))
    }

    /// `combine_n_signed` agrees with repeating `a` or its inverse
    /// `|count|` times, including at `i8::MIN`.
    pub fn combine_n_signed_matches_repeat(a: G, count: i8) -> IsEq<G> {
        let magnitude = usize::from(count.unsigned_abs());
        let repeated = if count < 0 {
            a.clone().inverse().combine_n_or_empty(magnitude)
        } else {
            a.clone().combine_n_or_empty(magnitude)
        };
        IsEq::new(a.combine_n_signed(count), repeated)
    }
}

impl<G: Group + Clone + PartialEq + Debug> GroupLaws<G> {
    /// States every group, monoid and semigroup law on all combinations of
    /// `samples`.
    ///
    /// # Errors
    ///
    /// Returns the first law that fails.
    pub fn check_samples(samples: &[G]) -> Result<(), LawViolation> {
        MonoidLaws::check_samples(samples)?;
        for a in samples {
            Self::left_inverse(a.clone()).check("group left inverse")?;
            Self::right_inverse(a.clone()).check("group right inverse")?;
            for count in [i8::MIN, -7, -2, -1, 0, 1, 2, 7, i8::MAX] {
                Self::combine_n_signed_matches_repeat(a.clone(), count)
                    .check("group combine_n_signed")?;
            }
            for b in samples {
                Self::remove_consistency(a.clone(), b.clone()).check("group remove")?;
            }
        }
        Ok(())
    }
}

/// The extra law of the commutative markers.
pub struct CommutativeLaws<S>(PhantomData<fn() -> S>);

impl<S: CommutativeSemigroup + Clone> CommutativeLaws<S> {
    /// `a ⊕ b == b ⊕ a`
    pub fn commutativity(a: S, b: S) -> IsEq<S> {
        IsEq::new(a.clone().combine(b.clone()), b.combine(a))
    }
}

impl<S: CommutativeSemigroup + Clone + PartialEq + Debug> CommutativeLaws<S> {
    /// States commutativity on every pair of `samples`.
    ///
    /// # Errors
    ///
    /// Returns the first pair that does not commute.
    pub fn check_samples(samples: &[S]) -> Result<(), LawViolation> {
        for a in samples {
            for b in samples {
                Self::commutativity(a.clone(), b.clone()).check("commutativity")?;
            }
        }
        Ok(())
    }
}
