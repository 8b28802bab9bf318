//! Comonad type class - extracting the focused value.
//!
//! A `Comonad` is a [`CoflatMap`] that always has a value in focus. It is
//! the dual of `Monad`: `extract` undoes `pure`, `coflat_map` mirrors
//! `flat_map`. Containers that may be empty, like `Option` and `Vec`, have
//! no lawful `extract` and so stop at `CoflatMap`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! K::coflat_map(fa, K::extract) == fa
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! K::extract(K::coflat_map(fa, f)) == f(fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Comonad, PairInstance};
//!
//! assert_eq!(PairInstance::extract(("config", 7)), 7);
//! ```

use super::coflat_map::CoflatMap;
use super::identity::{Identity, IdentityInstance};
use super::instances::PairInstance;

/// A [`CoflatMap`] with a value always in focus.
pub trait Comonad: CoflatMap {
    /// Returns the focused value.
    fn extract<A>(fa: Self::Applied<A>) -> A;
}

impl Comonad for IdentityInstance {
    #[inline]
    fn extract<A>(fa: Identity<A>) -> A {
        fa.0
    }
}

impl<E: Clone> Comonad for PairInstance<E> {
    #[inline]
    fn extract<A>(fa: (E, A)) -> A {
        fa.1
    }
}
