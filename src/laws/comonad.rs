//! Laws of [`CoflatMap`] and [`Comonad`].

use std::marker::PhantomData;

use super::is_eq::IsEq;
use crate::typeclass::{Applied, CoflatMap, Comonad};

/// Laws every [`CoflatMap`] satisfies.
pub struct CoflatMapLaws<K>(PhantomData<fn() -> K>);

impl<K: CoflatMap> CoflatMapLaws<K> {
    /// `coflat_map(coflat_map(fa, f), g) == coflat_map(fa, |x| g(coflat_map(x, f)))`
    pub fn coflat_map_associativity<A, B, C, F, G>(fa: Applied<K, A>, f: F, g: G) -> IsEq<Applied<K, C>>
    where
        A: Clone,
        B: Clone,
        Applied<K, A>: Clone,
        F: Fn(Applied<K, A>) -> B,
        G: Fn(Applied<K, B>) -> C,
    {
        IsEq::new(
            K::coflat_map(K::coflat_map(fa.clone(), &f), &g),
            K::coflat_map(fa, |view| g(K::coflat_map(view, &f))),
        )
    }

    /// `coflatten(coflatten(fa)) == map(coflatten(fa), coflatten)`
    pub fn coflatten_through_map<A>(fa: Applied<K, A>) -> IsEq<Applied<K, Applied<K, Applied<K, A>>>>
    where
        A: Clone,
        Applied<K, A>: Clone,
    {
        IsEq::new(
            K::coflatten(K::coflatten(fa.clone())),
            K::map(K::coflatten(fa), K::coflatten),
        )
    }

    /// `coflat_map(fa, f) == map(coflatten(fa), f)`
    pub fn coflatten_coherence<A, B, F>(fa: Applied<K, A>, f: F) -> IsEq<Applied<K, B>>
    where
        A: Clone,
        Applied<K, A>: Clone,
        F: Fn(Applied<K, A>) -> B,
    {
        IsEq::new(K::coflat_map(fa.clone(), &f), K::map(K::coflatten(fa), &f))
    }
}

/// Laws every [`Comonad`] satisfies, on top of [`CoflatMapLaws`].
///
/// # Examples
///
/// ```rust
/// use lawful::laws::ComonadLaws;
/// use lawful::typeclass::PairInstance;
///
/// assert!(ComonadLaws::<PairInstance<&str>>::extract_coflatten_identity(("env", 1)).holds());
/// assert!(ComonadLaws::<PairInstance<&str>>::map_coflatten_identity(("env", 1)).holds());
/// ```
pub struct ComonadLaws<K>(PhantomData<fn() -> K>);

impl<K: Comonad> ComonadLaws<K> {
    /// `extract(coflatten(fa)) == fa`
    pub fn extract_coflatten_identity<A>(fa: Applied<K, A>) -> IsEq<Applied<K, A>>
    where
        A: Clone,
        Applied<K, A>: Clone,
    {
        IsEq::new(K::extract(K::coflatten(fa.clone())), fa)
    }

    /// `map(coflatten(fa), extract) == fa`
    pub fn map_coflatten_identity<A>(fa: Applied<K, A>) -> IsEq<Applied<K, A>>
    where
        A: Clone,
        Applied<K, A>: Clone,
    {
        IsEq::new(K::map(K::coflatten(fa.clone()), K::extract), fa)
    }

    /// `coflat_map(fa, extract) == fa`
    pub fn coflat_map_left_identity<A>(fa: Applied<K, A>) -> IsEq<Applied<K, A>>
    where
        A: Clone,
        Applied<K, A>: Clone,
    {
        IsEq::new(K::coflat_map(fa.clone(), K::extract), fa)
    }

    /// `extract(coflat_map(fa, f)) == f(fa)`
    pub fn coflat_map_right_identity<A, B, F>(fa: Applied<K, A>, f: F) -> IsEq<B>
    where
        A: Clone,
        Applied<K, A>: Clone,
        F: Fn(Applied<K, A>) -> B,
    {
        IsEq::new(K::extract(K::coflat_map(fa.clone(), &f)), f(fa))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityInstance, OptionInstance, VecInstance};
    use rstest::rstest;

    #[rstest]
    fn vec_coflat_map_laws() {
        let sum = |values: Vec<i32>| values.iter().sum::<i32>();
        let first = |values: Vec<i32>| values.first().copied().unwrap_or_default();
        assert!(CoflatMapLaws::<VecInstance>::coflat_map_associativity(vec![1, 2, 3], sum, first).holds());
        assert!(CoflatMapLaws::<VecInstance>::coflatten_through_map(vec![4, 5, 6]).holds());
        assert!(CoflatMapLaws::<VecInstance>::coflatten_coherence(vec![1, 2], |values: Vec<i32>| values.len()).holds());
    }

    #[rstest]
    fn option_coflat_map_laws() {
        assert!(CoflatMapLaws::<OptionInstance>::coflatten_through_map(Some('x')).holds());
        assert!(CoflatMapLaws::<OptionInstance>::coflatten_through_map(None::<char>).holds());
    }

    #[rstest]
    fn identity_comonad_laws() {
        assert!(ComonadLaws::<IdentityInstance>::coflat_map_left_identity(Identity(5)).holds());
        assert!(ComonadLaws::<IdentityInstance>::coflat_map_right_identity(Identity(5), |Identity(n)| n * 3).holds());
    }
}
