//! Laws of [`FlatMap`] and [`Monad`].

use std::marker::PhantomData;

use super::is_eq::IsEq;
use crate::control::Either;
use crate::typeclass::{Applied, FlatMap, Monad};

/// Laws every [`FlatMap`] satisfies.
pub struct FlatMapLaws<K>(PhantomData<fn() -> K>);

impl<K: FlatMap> FlatMapLaws<K> {
    /// `flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))`
    pub fn associativity<A, B, C, F, G>(fa: Applied<K, A>, f: F, g: G) -> IsEq<Applied<K, C>>
    where
        Applied<K, A>: Clone,
        F: Fn(A) -> Applied<K, B>,
        G: Fn(B) -> Applied<K, C>,
    {
        IsEq::new(
            K::flat_map(K::flat_map(fa.clone(), &f), &g),
            K::flat_map(fa, |value| K::flat_map(f(value), &g)),
        )
    }

    /// `ap(ff, fa) == flat_map(ff, |f| map(fa, f))`
    pub fn flat_map_consistent_apply<A, B, F>(ff: Applied<K, F>, fa: Applied<K, A>) -> IsEq<Applied<K, B>>
    where
        A: Clone,
        Applied<K, A>: Clone,
        Applied<K, F>: Clone,
        F: FnMut(A) -> B,
    {
        IsEq::new(
            K::ap(ff.clone(), fa.clone()),
            K::flat_map(ff, |function| K::map(fa.clone(), function)),
        )
    }

    /// `mproduct(fa, f) == flat_map(fa, |a| map(f(a), |b| (a, b)))`
    pub fn mproduct_consistency<A, B, F>(fa: Applied<K, A>, f: F) -> IsEq<Applied<K, (A, B)>>
    where
        A: Clone,
        Applied<K, A>: Clone,
        F: Fn(A) -> Applied<K, B>,
    {
        IsEq::new(
            K::mproduct(fa.clone(), &f),
            K::flat_map(fa, |value: A| {
                K::map(f(value.clone()), move |derived| (value.clone(), derived))
            }),
        )
    }

    /// Looping `count + 1` times with `tail_rec_m` equals looping `count`
    /// times and then running `f` once more with `flat_map`.
    ///
    /// `count` is reduced to a small number so the law can run on effects
    /// that branch.
    pub fn tail_rec_m_consistent_flat_map<A, F>(seed: A, count: u8, f: F) -> IsEq<Applied<K, A>>
    where
        A: Clone,
        F: Fn(A) -> Applied<K, A>,
    {
        let bounce = |rounds: u8| {
            K::tail_rec_m((seed.clone(), rounds), |(current, remaining)| {
                K::map(f(current), move |next| {
                    if remaining > 0 {
                        Either::Left((next, remaining - 1))
                    } else {
                        Either::Right(next)
                    }
                })
            })
        };
        let small = count % 2 + 1;
        IsEq::new(bounce(small), K::flat_map(bounce(small - 1), &f))
    }
}

/// Laws every [`Monad`] satisfies, on top of [`FlatMapLaws`].
///
/// # Examples
///
/// ```rust
/// use lawful::laws::MonadLaws;
/// use lawful::typeclass::OptionInstance;
///
/// assert!(MonadLaws::<OptionInstance>::left_identity(3, |n| Some(n * 2)).holds());
/// assert!(MonadLaws::<OptionInstance>::tail_rec_m_stack_safety(100_000).holds());
/// ```
pub struct MonadLaws<K>(PhantomData<fn() -> K>);

impl<K: Monad> MonadLaws<K> {
    /// `flat_map(pure(a), f) == f(a)`
    pub fn left_identity<A, B, F>(a: A, f: F) -> IsEq<Applied<K, B>>
    where
        A: Clone,
        F: Fn(A) -> Applied<K, B>,
    {
        IsEq::new(K::flat_map(K::pure(a.clone()), &f), f(a))
    }

    /// `flat_map(fa, pure) == fa`
    pub fn right_identity<A>(fa: Applied<K, A>) -> IsEq<Applied<K, A>>
    where
        Applied<K, A>: Clone,
    {
        IsEq::new(K::flat_map(fa.clone(), K::pure), fa)
    }

    /// `flat_map(fa, |a| pure(f(a))) == map(fa, f)`
    pub fn map_flat_map_coherence<A, B, F>(fa: Applied<K, A>, f: F) -> IsEq<Applied<K, B>>
    where
        Applied<K, A>: Clone,
        F: Fn(A) -> B,
    {
        IsEq::new(K::flat_map(fa.clone(), |value| K::pure(f(value))), K::map(fa, &f))
    }

    /// Counting to `iterations` with `tail_rec_m` finishes and yields
    /// `pure(iterations)`.
    pub fn tail_rec_m_stack_safety(iterations: usize) -> IsEq<Applied<K, usize>> {
        let counted = K::tail_rec_m(0_usize, |current| {
            K::pure(if current < iterations {
                Either::Left(current + 1)
            } else {
                Either::Right(current)
            })
        });
        IsEq::new(counted, K::pure(iterations))
    }
}
