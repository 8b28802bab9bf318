//! Method syntax over registered containers.
//!
//! Each extension trait is blanket-implemented for every [`Registered`]
//! type and forwards to the capability of its canonical instance, so
//! `Some(1).fmap(..)` is `OptionInstance::map(Some(1), ..)`. Capabilities
//! are required per method, which means a missing capability is reported at
//! the call site.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{ApplySyntax, ComonadSyntax, FlatMapSyntax, FunctorSyntax, Identity};
//!
//! assert_eq!(Some(2).fmap(|n| n * 3), Some(6));
//! assert_eq!(vec![1, 2].bind(|n| vec![n; n]), vec![1, 2, 2]);
//! assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
//! assert_eq!(Identity("focus").extract(), "focus");
//! ```

use super::apply::Apply;
use super::coflat_map::CoflatMap;
use super::comonad::Comonad;
use super::flat_map::FlatMap;
use super::functor::Functor;
use super::registry::Registered;
use super::{Applied, InstanceOf};

/// [`Functor`] operations as methods.
pub trait FunctorSyntax: Registered {
    /// See [`Functor::map`].
    fn fmap<B, F>(self, function: F) -> Applied<InstanceOf<Self>, B>
    where
        InstanceOf<Self>: Functor,
        F: FnMut(Self::Inner) -> B,
    {
        <InstanceOf<Self> as Functor>::map(self.into_applied(), function)
    }

    /// See [`Functor::replace`].
    fn map_to<B>(self, value: B) -> Applied<InstanceOf<Self>, B>
    where
        InstanceOf<Self>: Functor,
        B: Clone,
    {
        <InstanceOf<Self> as Functor>::replace(self.into_applied(), value)
    }

    /// See [`Functor::void`].
    fn void(self) -> Applied<InstanceOf<Self>, ()>
    where
        InstanceOf<Self>: Functor,
    {
        <InstanceOf<Self> as Functor>::void(self.into_applied())
    }
}

impl<T: Registered> FunctorSyntax for T {}

/// [`Apply`] operations as methods.
pub trait ApplySyntax: Registered {
    /// See [`Apply::map2`].
    fn map2<B, C, F>(self, other: Applied<InstanceOf<Self>, B>, function: F) -> Applied<InstanceOf<Self>, C>
    where
        InstanceOf<Self>: Apply,
        Self::Inner: Clone,
        B: Clone,
        Applied<InstanceOf<Self>, B>: Clone,
        F: FnMut(Self::Inner, B) -> C,
    {
        <InstanceOf<Self> as Apply>::map2(self.into_applied(), other, function)
    }

    /// See [`Apply::product`].
    fn zip_product<B>(self, other: Applied<InstanceOf<Self>, B>) -> Applied<InstanceOf<Self>, (Self::Inner, B)>
    where
        InstanceOf<Self>: Apply,
        Self::Inner: Clone,
        B: Clone,
        Applied<InstanceOf<Self>, B>: Clone,
    {
        <InstanceOf<Self> as Apply>::product(self.into_applied(), other)
    }

    /// See [`Apply::product_left`].
    fn product_left<B>(self, other: Applied<InstanceOf<Self>, B>) -> Applied<InstanceOf<Self>, Self::Inner>
    where
        InstanceOf<Self>: Apply,
        Self::Inner: Clone,
        B: Clone,
        Applied<InstanceOf<Self>, B>: Clone,
    {
        <InstanceOf<Self> as Apply>::product_left(self.into_applied(), other)
    }

    /// See [`Apply::product_right`].
    fn product_right<B>(self, other: Applied<InstanceOf<Self>, B>) -> Applied<InstanceOf<Self>, B>
    where
        InstanceOf<Self>: Apply,
        Self::Inner: Clone,
        B: Clone,
        Applied<InstanceOf<Self>, B>: Clone,
    {
        <InstanceOf<Self> as Apply>::product_right(self.into_applied(), other)
    }
}

impl<T: Registered> ApplySyntax for T {}

/// [`FlatMap`] operations as methods.
///
/// The sequencing method is named `bind` so it never shadows
/// `Iterator::flat_map` or `Option::and_then`.
pub trait FlatMapSyntax: Registered {
    /// See [`FlatMap::flat_map`].
    fn bind<B, F>(self, function: F) -> Applied<InstanceOf<Self>, B>
    where
        InstanceOf<Self>: FlatMap,
        F: FnMut(Self::Inner) -> Applied<InstanceOf<Self>, B>,
    {
        <InstanceOf<Self> as FlatMap>::flat_map(self.into_applied(), function)
    }

    /// See [`FlatMap::flat_tap`].
    fn flat_tap<B, F>(self, function: F) -> Applied<InstanceOf<Self>, Self::Inner>
    where
        InstanceOf<Self>: FlatMap,
        Self::Inner: Clone,
        F: FnMut(Self::Inner) -> Applied<InstanceOf<Self>, B>,
    {
        <InstanceOf<Self> as FlatMap>::flat_tap(self.into_applied(), function)
    }

    /// See [`FlatMap::mproduct`].
    fn mproduct<B, F>(self, function: F) -> Applied<InstanceOf<Self>, (Self::Inner, B)>
    where
        InstanceOf<Self>: FlatMap,
        Self::Inner: Clone,
        F: FnMut(Self::Inner) -> Applied<InstanceOf<Self>, B>,
    {
        <InstanceOf<Self> as FlatMap>::mproduct(self.into_applied(), function)
    }
}

impl<T: Registered> FlatMapSyntax for T {}

/// [`CoflatMap`] operations as methods.
pub trait CoflatMapSyntax: Registered {
    /// See [`CoflatMap::coflat_map`].
    fn coflat_map<B, F>(self, function: F) -> Applied<InstanceOf<Self>, B>
    where
        InstanceOf<Self>: CoflatMap,
        Self::Inner: Clone,
        F: FnMut(Applied<InstanceOf<Self>, Self::Inner>) -> B,
    {
        <InstanceOf<Self> as CoflatMap>::coflat_map(self.into_applied(), function)
    }

    /// See [`CoflatMap::coflatten`].
    fn coflatten(self) -> Applied<InstanceOf<Self>, Applied<InstanceOf<Self>, Self::Inner>>
    where
        InstanceOf<Self>: CoflatMap,
        Self::Inner: Clone,
    {
        <InstanceOf<Self> as CoflatMap>::coflatten(self.into_applied())
    }
}

impl<T: Registered> CoflatMapSyntax for T {}

/// [`Comonad`] operations as methods.
pub trait ComonadSyntax: Registered {
    /// See [`Comonad::extract`].
    fn extract(self) -> Self::Inner
    where
        InstanceOf<Self>: Comonad,
    {
        <InstanceOf<Self> as Comonad>::extract(self.into_applied())
    }
}

impl<T: Registered> ComonadSyntax for T {}
