//! The algebra registry: from a concrete container to its canonical instance.
//!
//! [`Registered`] answers "which instance marker handles this value?". The
//! answer is an associated type, so it is computed by the compiler and
//! there is exactly one answer per container type. Asking for a capability
//! that the resolved marker lacks is a compile error at the call site, not
//! a runtime lookup failure.
//!
//! # Resolution rules
//!
//! 1. Every container type has a single canonical marker. Coherence rules
//!    out a second one.
//! 2. A marker implements the longest capability chain its components
//!    allow: `Monad` implies `FlatMap`, `Applicative`, `Apply` and `Functor`;
//!    `Comonad` implies `CoflatMap` and `Functor`. Generic code asking for
//!    the weaker capability is served by the same impl.
//! 3. Composite markers choose their capability by the bounds they place
//!    on their components. When a capability could be derived from a
//!    component in two ways, only the derivation consistent with `flat_map`
//!    is provided, so the choice is never ambiguous.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{FunctorSyntax, InstanceOf, OptionInstance, Registered};
//!
//! fn same<T>(_: T, _: T) {}
//! same(<InstanceOf<Option<u8>> as Default>::default(), OptionInstance);
//!
//! assert_eq!(vec![1, 2, 3].fmap(|value| value * 10), vec![10, 20, 30]);
//! ```

use super::identity::{Identity, IdentityInstance};
use super::instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
use super::{Applied, TypeConstructor};
use crate::control::Either;

/// A container with a canonical instance marker.
///
/// # Laws
///
/// `into_applied` is the identity on values: it only restates the type of
/// `self` as `Applied<Self::Instance, Self::Inner>`.
pub trait Registered: Sized {
    /// The canonical instance marker.
    type Instance: TypeConstructor;

    /// The element type the container is applied to.
    type Inner;

    /// Restates `self` in terms of its instance marker.
    fn into_applied(self) -> Applied<Self::Instance, Self::Inner>;
}

/// The canonical instance marker of a registered container.
pub type InstanceOf<T> = <T as Registered>::Instance;

impl<A> Registered for Option<A> {
    type Instance = OptionInstance;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<A> Registered for Vec<A> {
    type Instance = VecInstance;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<A, E> Registered for Result<A, E> {
    type Instance = ResultInstance<E>;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<L, A> Registered for Either<L, A> {
    type Instance = EitherInstance<L>;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<E, A> Registered for (E, A) {
    type Instance = PairInstance<E>;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<A> Registered for Identity<A> {
    type Instance = IdentityInstance;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}
