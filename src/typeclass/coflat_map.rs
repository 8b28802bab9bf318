//! `CoflatMap` type class - extending context-dependent computations.
//!
//! Where `flat_map` consumes a value and produces a container,
//! `coflat_map` consumes a whole container and produces a value, applying
//! it at every position the container can be "refocused" on. For `Vec`
//! those positions are the non-empty suffixes; for `Option` there is the
//! single value, if any.
//!
//! # Laws
//!
//! ## Coassociativity
//!
//! ```text
//! K::coflat_map(K::coflat_map(fa, f), g) == K::coflat_map(fa, |x| g(K::coflat_map(x, &mut f)))
//! ```
//!
//! ## Coflatten Consistency
//!
//! ```text
//! K::coflat_map(fa, f) == K::map(K::coflatten(fa), f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{CoflatMap, VecInstance};
//!
//! // Running totals from the right.
//! let totals = VecInstance::coflat_map(vec![1, 2, 3], |rest: Vec<i32>| rest.iter().sum::<i32>());
//! assert_eq!(totals, vec![6, 5, 3]);
//! ```

use super::functor::Functor;
use super::identity::{Identity, IdentityInstance};
use super::instances::{OptionInstance, PairInstance, VecInstance};

/// A [`Functor`] that can extend a function on whole containers.
pub trait CoflatMap: Functor {
    /// Applies `function` to every refocused view of `fa`.
    fn coflat_map<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: Clone,
        F: FnMut(Self::Applied<A>) -> B;

    /// Replaces every position with its refocused view.
    fn coflatten<A>(fa: Self::Applied<A>) -> Self::Applied<Self::Applied<A>>
    where
        A: Clone,
    {
        Self::coflat_map(fa, |view| view)
    }
}

impl CoflatMap for OptionInstance {
    fn coflat_map<A, B, F>(fa: Option<A>, mut function: F) -> Option<B>
    where
        A: Clone,
        F: FnMut(Option<A>) -> B,
    {
        fa.map(|value| function(Some(value)))
    }
}

impl CoflatMap for VecInstance {
    fn coflat_map<A, B, F>(fa: Vec<A>, mut function: F) -> Vec<B>
    where
        A: Clone,
        F: FnMut(Vec<A>) -> B,
    {
        (0..fa.len()).map(|start| function(fa[start..].to_vec())).collect()
    }
}

impl CoflatMap for IdentityInstance {
    fn coflat_map<A, B, F>(fa: Identity<A>, mut function: F) -> Identity<B>
    where
        A: Clone,
        F: FnMut(Identity<A>) -> B,
    {
        Identity(function(fa))
    }
}

/// The environment is duplicated into every view, so it must be `Clone`.
impl<E: Clone> CoflatMap for PairInstance<E> {
    fn coflat_map<A, B, F>(fa: (E, A), mut function: F) -> (E, B)
    where
        A: Clone,
        F: FnMut((E, A)) -> B,
    {
        let environment = fa.0.clone();
        (environment, function(fa))
    }
}
