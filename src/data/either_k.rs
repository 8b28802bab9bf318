//! `EitherK` - the sum of two functors over one element type.
//!
//! `EitherK<F, G, A>` holds either an `F[A]` or a `G[A]`. Every capability
//! is forwarded to the side that is present, so `EitherK` is a
//! [`Comonad`] whenever both sides are.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{EitherK, EitherKInstance};
//! use lawful::typeclass::{Comonad, Identity, IdentityInstance, PairInstance};
//!
//! type Source = EitherKInstance<IdentityInstance, PairInstance<&'static str>>;
//!
//! let local: EitherK<IdentityInstance, PairInstance<&str>, i32> = EitherK::left(Identity(1));
//! let remote: EitherK<IdentityInstance, PairInstance<&str>, i32> = EitherK::right(("host", 2));
//! assert_eq!(Source::extract(local), 1);
//! assert_eq!(Source::extract(remote), 2);
//! ```

use std::fmt;

use crate::control::Either;
use crate::typeclass::{Applied, CoflatMap, Comonad, Functor, Registered, TypeConstructor};

/// Either an `F[A]` or a `G[A]`.
pub enum EitherK<F: TypeConstructor, G: TypeConstructor, A> {
    /// The `F` side.
    Left(Applied<F, A>),
    /// The `G` side.
    Right(Applied<G, A>),
}

impl<F: TypeConstructor, G: TypeConstructor, A> EitherK<F, G, A> {
    /// Wraps an `F[A]`.
    #[inline]
    pub const fn left(inner: Applied<F, A>) -> Self {
        Self::Left(inner)
    }

    /// Wraps a `G[A]`.
    #[inline]
    pub const fn right(inner: Applied<G, A>) -> Self {
        Self::Right(inner)
    }

    /// Whether this is the `F` side.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether this is the `G` side.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Eliminates the sum.
    pub fn fold<B, L, R>(self, on_left: L, on_right: R) -> B
    where
        L: FnOnce(Applied<F, A>) -> B,
        R: FnOnce(Applied<G, A>) -> B,
    {
        match self {
            Self::Left(inner) => on_left(inner),
            Self::Right(inner) => on_right(inner),
        }
    }

    /// Exchanges the sides.
    pub fn swap(self) -> EitherK<G, F, A> {
        match self {
            Self::Left(inner) => EitherK::Right(inner),
            Self::Right(inner) => EitherK::Left(inner),
        }
    }

    /// Converts into a plain [`Either`] of the two containers.
    pub fn into_either(self) -> Either<Applied<F, A>, Applied<G, A>> {
        self.fold(Either::Left, Either::Right)
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> Clone for EitherK<F, G, A>
where
    Applied<F, A>: Clone,
    Applied<G, A>: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Left(inner) => Self::Left(inner.clone()),
            Self::Right(inner) => Self::Right(inner.clone()),
        }
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> PartialEq for EitherK<F, G, A>
where
    Applied<F, A>: PartialEq,
    Applied<G, A>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Left(left), Self::Left(right)) => left == right,
            (Self::Right(left), Self::Right(right)) => left == right,
            _ => false,
        }
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> Eq for EitherK<F, G, A>
where
    Applied<F, A>: Eq,
    Applied<G, A>: Eq,
{
}

impl<F: TypeConstructor, G: TypeConstructor, A> fmt::Debug for EitherK<F, G, A>
where
    Applied<F, A>: fmt::Debug,
    Applied<G, A>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(inner) => formatter.debug_tuple("EitherK::Left").field(inner).finish(),
            Self::Right(inner) => formatter.debug_tuple("EitherK::Right").field(inner).finish(),
        }
    }
}

instance_marker! {
    /// Instance marker for [`EitherK`] over `F` and `G`.
    EitherKInstance<F, G>
}

impl<F: TypeConstructor, G: TypeConstructor> TypeConstructor for EitherKInstance<F, G> {
    type Applied<A> = EitherK<F, G, A>;
}

impl<F: TypeConstructor, G: TypeConstructor, A> Registered for EitherK<F, G, A> {
    type Instance = EitherKInstance<F, G>;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<F: Functor, G: Functor> Functor for EitherKInstance<F, G> {
    fn map<A, B, Function>(fa: EitherK<F, G, A>, function: Function) -> EitherK<F, G, B>
    where
        Function: FnMut(A) -> B,
    {
        match fa {
            EitherK::Left(inner) => EitherK::Left(F::map(inner, function)),
            EitherK::Right(inner) => EitherK::Right(G::map(inner, function)),
        }
    }
}

/// The function sees each view re-wrapped on the side it came from.
impl<F: CoflatMap, G: CoflatMap> CoflatMap for EitherKInstance<F, G> {
    fn coflat_map<A, B, Function>(fa: EitherK<F, G, A>, mut function: Function) -> EitherK<F, G, B>
    where
        A: Clone,
        Function: FnMut(EitherK<F, G, A>) -> B,
    {
        match fa {
            EitherK::Left(inner) => {
                EitherK::Left(F::coflat_map(inner, |view| function(EitherK::Left(view))))
            }
            EitherK::Right(inner) => {
                EitherK::Right(G::coflat_map(inner, |view| function(EitherK::Right(view))))
            }
        }
    }
}

impl<F: Comonad, G: Comonad> Comonad for EitherKInstance<F, G> {
    fn extract<A>(fa: EitherK<F, G, A>) -> A {
        match fa {
            EitherK::Left(inner) => F::extract(inner),
            EitherK::Right(inner) => G::extract(inner),
        }
    }
}
