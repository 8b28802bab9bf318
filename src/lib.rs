//! # lawful
//!
//! Lawful algebraic type classes for Rust.
//!
//! ## Overview
//!
//! This library provides the classic algebraic abstractions of typed
//! functional programming, together with the law sheets that give them
//! meaning:
//!
//! - **Kernel algebra**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid), [`Group`](typeclass::Group) with
//!   logarithmic repeated combination
//! - **Effect capabilities**: Functor, Apply, Applicative, `FlatMap`, Monad
//!   with stack-safe `tail_rec_m`
//! - **Context capabilities**: `CoflatMap` and Comonad
//! - **Comparison**: a three-valued comparison result with numeric
//!   conversions
//! - **Derivation rules**: instances for tuples, `Either`, `EitherK`,
//!   `Tuple2K` and the `OptionT` transformer
//!
//! ## Instance resolution
//!
//! Each capability is a trait. Value-level algebras (semigroups and friends)
//! are implemented directly on the carrier type. Higher-kinded capabilities
//! are implemented on zero-sized *instance markers* such as
//! [`OptionInstance`](typeclass::OptionInstance), and the
//! [`Registered`](typeclass::Registered) trait maps every supported
//! container to its unique marker. Resolution therefore happens entirely at
//! compile time through trait coherence.
//!
//! ## Feature Flags
//!
//! - `data`: Composite data types (`NonEmptyVec`, `OptionT`, `Tuple2K`, `EitherK`, `Cokleisli`)
//! - `laws`: Law-checking kit for testing instances
//! - `derive`: `#[derive(Semigroup, Monoid, Group)]`
//! - `tracing`: Trace events from the stack-safe loop drivers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! let doubled = Some(21).fmap(|value| value * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let total = Sum::new(3).combine_n_or_empty(4);
//! assert_eq!(total, Sum::new(12));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `trace`-level event when the `tracing` feature is enabled.
///
/// Without the feature the field expressions are only borrowed, so the
/// call sites compile identically either way.
macro_rules! trace_event {
    ($($field:ident = $value:expr),+ ; $message:literal) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($field = $value),+, $message);
        #[cfg(not(feature = "tracing"))]
        {
            $(let _ = &$value;)+
        }
    };
}

/// Declares a zero-sized instance marker.
///
/// Generic markers hold their parameters in `PhantomData<fn() -> _>`, so
/// they are `Copy + Send + Sync + Default` whatever the parameters are.
macro_rules! instance_marker {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;
    };
    ($(#[$meta:meta])* $name:ident < $($param:ident),+ >) => {
        $(#[$meta])*
        pub struct $name<$($param),+>(::std::marker::PhantomData<fn() -> ($($param,)+)>);

        impl<$($param),+> $name<$($param),+> {
            /// Returns the marker value.
            #[inline]
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> Default for $name<$($param),+> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param),+> ::std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::AlgebraError;
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "laws")]
    pub use crate::laws::*;
}

pub mod control;
pub mod error;
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "laws")]
pub mod laws;

#[cfg(feature = "derive")]
pub use lawful_derive::{Group, Monoid, Semigroup};

pub use error::AlgebraError;

#[doc(hidden)]
pub use paste;
