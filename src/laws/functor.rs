//! Laws of [`Functor`] and [`Apply`].

use std::marker::PhantomData;

use super::is_eq::IsEq;
use crate::typeclass::{Applied, Apply, Functor};

/// Laws every [`Functor`] satisfies.
///
/// # Examples
///
/// ```rust
/// use lawful::laws::FunctorLaws;
/// use lawful::typeclass::VecInstance;
///
/// assert!(FunctorLaws::<VecInstance>::covariant_identity(vec![1, 2, 3]).holds());
/// assert!(FunctorLaws::<VecInstance>::covariant_composition(vec![1, 2], |n| n + 1, |n| n * 2).holds());
/// ```
pub struct FunctorLaws<K>(PhantomData<fn() -> K>);

impl<K: Functor> FunctorLaws<K> {
    /// `map(fa, id) == fa`
    pub fn covariant_identity<A>(fa: Applied<K, A>) -> IsEq<Applied<K, A>>
    where
        Applied<K, A>: Clone,
    {
        IsEq::new(K::map(fa.clone(), |value| value), fa)
    }

    /// `map(map(fa, f), g) == map(fa, g ∘ f)`
    pub fn covariant_composition<A, B, C, F, G>(fa: Applied<K, A>, f: F, g: G) -> IsEq<Applied<K, C>>
    where
        Applied<K, A>: Clone,
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        IsEq::new(K::map(K::map(fa.clone(), &f), &g), K::map(fa, |value| g(f(value))))
    }

    /// `replace(fa, b) == map(fa, |_| b)`
    pub fn replace_consistency<A, B>(fa: Applied<K, A>, value: B) -> IsEq<Applied<K, B>>
    where
        Applied<K, A>: Clone,
        B: Clone,
    {
        let expected = value.clone();
        IsEq::new(K::replace(fa.clone(), value), K::map(fa, move |_| expected.clone()))
    }
}

/// Laws every [`Apply`] satisfies.
pub struct ApplyLaws<K>(PhantomData<fn() -> K>);

impl<K: Apply> ApplyLaws<K> {
    /// `map2(fa, fb, f) == map(product(fa, fb), f)`
    pub fn map2_product_consistency<A, B, C, F>(
        fa: Applied<K, A>,
        fb: Applied<K, B>,
        f: F,
    ) -> IsEq<Applied<K, C>>
    where
        A: Clone,
        B: Clone,
        Applied<K, A>: Clone,
        Applied<K, B>: Clone,
        F: Fn(A, B) -> C,
    {
        IsEq::new(
            K::map2(fa.clone(), fb.clone(), &f),
            K::map(K::product(fa, fb), |(a, b)| f(a, b)),
        )
    }

    /// `ap(ff, fa) == map2(ff, fa, |f, a| f(a))`
    pub fn ap_map2_consistency<A, B, F>(ff: Applied<K, F>, fa: Applied<K, A>) -> IsEq<Applied<K, B>>
    where
        A: Clone,
        Applied<K, A>: Clone,
        Applied<K, F>: Clone,
        F: FnMut(A) -> B + Clone,
    {
        IsEq::new(
            K::ap(ff.clone(), fa.clone()),
            K::map2(ff, fa, |mut function, value| function(value)),
        )
    }

    /// `product_left(fa, fb) == map2(fa, fb, |a, _| a)`
    pub fn product_left_consistency<A, B>(fa: Applied<K, A>, fb: Applied<K, B>) -> IsEq<Applied<K, A>>
    where
        A: Clone,
        B: Clone,
        Applied<K, A>: Clone,
        Applied<K, B>: Clone,
    {
        IsEq::new(
            K::product_left(fa.clone(), fb.clone()),
            K::map2(fa, fb, |left, _| left),
        )
    }

    /// `product_right(fa, fb) == map2(fa, fb, |_, b| b)`
    pub fn product_right_consistency<A, B>(fa: Applied<K, A>, fb: Applied<K, B>) -> IsEq<Applied<K, B>>
    where
        A: Clone,
        B: Clone,
        Applied<K, A>: Clone,
        Applied<K, B>: Clone,
    {
        IsEq::new(
            K::product_right(fa.clone(), fb.clone()),
            K::map2(fa, fb, |_, right| right),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionInstance, PairInstance, VecInstance};
    use rstest::rstest;

    #[rstest]
    fn vec_functor_laws() {
        assert!(FunctorLaws::<VecInstance>::replace_consistency(vec![1, 2], 'z').holds());
    }

    #[rstest]
    fn vec_apply_laws() {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n - 1, |n| n * n];
        assert!(ApplyLaws::<VecInstance>::ap_map2_consistency(functions, vec![2, 3]).holds());
        assert!(ApplyLaws::<VecInstance>::product_left_consistency(vec![1, 2], vec!['a', 'b']).holds());
        assert!(ApplyLaws::<VecInstance>::map2_product_consistency(vec![1], vec![2, 3], |a, b| a * b).holds());
    }

    #[rstest]
    fn pair_apply_laws_combine_logs() {
        let law = ApplyLaws::<PairInstance<String>>::product_right_consistency(
            ("a".to_string(), 1),
            ("b".to_string(), 2),
        );
        assert_eq!(law.lhs, ("ab".to_string(), 2));
        assert!(law.holds());
    }

    #[rstest]
    fn option_apply_laws_with_none() {
        assert!(ApplyLaws::<OptionInstance>::product_left_consistency(Some(1), None::<u8>).holds());
    }
}
