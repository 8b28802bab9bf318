//! Capability traits, the algebra registry and the kernel instances.
//!
//! Two families of capabilities live here:
//!
//! - **Value-level algebras**, implemented directly on the carrier type:
//!   [`Semigroup`], [`Monoid`], [`Group`] and their commutative markers.
//!   Alternative algebras on one carrier are picked with the [`Sum`],
//!   [`Product`], [`Max`] and [`Min`] wrappers.
//! - **Instance-level capabilities**, implemented on zero-sized instance
//!   markers: [`Functor`] → [`Apply`] → [`Applicative`] / [`FlatMap`] →
//!   [`Monad`], and [`Functor`] → [`CoflatMap`] → [`Comonad`].
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. A marker such as
//! [`OptionInstance`] implements [`TypeConstructor`], whose generic
//! associated type `Applied<A>` names the container (`Option<A>`). The
//! capability traits are written against `Self::Applied<_>`, so one trait
//! covers every element type.
//!
//! [`Registered`] maps a concrete container back to its marker, which is
//! what the method syntax traits ([`FunctorSyntax`] and friends) use.
//!
//! # Examples
//!
//! ## Value-level algebras
//!
//! ```rust
//! use lawful::typeclass::{Group, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(3).combine_n_or_empty(4), Sum::new(12));
//! assert_eq!(Sum::new(3).combine_n_or_empty(0), Sum::new(0));
//! assert_eq!(Sum::new(5).remove(Sum::new(2)), Sum::new(3));
//! assert_eq!(Sum::new(1_i32).combine_n_signed(i32::MIN), Sum::new(i32::MIN));
//! ```
//!
//! ## Instance-level capabilities
//!
//! ```rust
//! use lawful::control::Either;
//! use lawful::typeclass::{FlatMap, Functor, VecInstance};
//!
//! assert_eq!(VecInstance::map(vec![1, 2], |n| n + 1), vec![2, 3]);
//!
//! let countdown = VecInstance::tail_rec_m(3_u32, |n| {
//!     if n == 0 { vec![Either::Right("liftoff")] } else { vec![Either::Left(n - 1)] }
//! });
//! assert_eq!(countdown, vec!["liftoff"]);
//! ```

mod applicative;
mod apply;
mod coflat_map;
mod commutative;
mod comonad;
mod comparison;
mod flat_map;
mod functor;
mod group;
mod higher;
mod identity;
mod instances;
mod monad;
mod monoid;
mod registry;
mod semigroup;
mod syntax;
mod tuples;
mod wrappers;

pub use applicative::Applicative;
pub use apply::Apply;
pub use coflat_map::CoflatMap;
pub use commutative::{CommutativeGroup, CommutativeMonoid, CommutativeSemigroup};
pub use comonad::Comonad;
pub use comparison::Comparison;
pub use flat_map::FlatMap;
pub use functor::Functor;
pub use group::Group;
pub use higher::{Applied, TypeConstructor};
pub use identity::{Identity, IdentityInstance};
pub use instances::{EitherInstance, OptionInstance, PairInstance, ResultInstance, VecInstance};
pub use monad::Monad;
pub use monoid::Monoid;
pub use registry::{InstanceOf, Registered};
pub use semigroup::Semigroup;
pub use syntax::{ApplySyntax, CoflatMapSyntax, ComonadSyntax, FlatMapSyntax, FunctorSyntax};
pub use wrappers::{Max, Min, Product, Sum};
