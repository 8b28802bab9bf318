//! Commutative refinements of the kernel algebras.
//!
//! These are marker traits: they add no operations, only the law
//!
//! ```text
//! a.combine(b) == b.combine(a)
//! ```
//!
//! Generic code can require them where the order of combination is not
//! under its control, e.g. when merging partial results.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{CommutativeMonoid, Monoid, Sum};
//!
//! fn total<M: CommutativeMonoid>(parts: Vec<M>) -> M {
//!     M::combine_all(parts.into_iter().rev())
//! }
//!
//! assert_eq!(total(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::group::Group;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::wrappers::{Max, Min, Product, Sum};

/// A semigroup whose `combine` is commutative.
pub trait CommutativeSemigroup: Semigroup {}

/// A monoid whose `combine` is commutative.
pub trait CommutativeMonoid: Monoid + CommutativeSemigroup {}

/// A group whose `combine` is commutative (an abelian group).
pub trait CommutativeGroup: Group + CommutativeMonoid {}

impl<T: Monoid + CommutativeSemigroup> CommutativeMonoid for T {}
impl<T: Group + CommutativeMonoid> CommutativeGroup for T {}

impl CommutativeSemigroup for () {}
impl<T: CommutativeSemigroup> CommutativeSemigroup for Identity<T> {}
impl<T: CommutativeSemigroup> CommutativeSemigroup for Option<T> {}

impl<A: Add<Output = A>> CommutativeSemigroup for Sum<A> {}
impl<A: Mul<Output = A>> CommutativeSemigroup for Product<A> {}
impl<A: PartialOrd> CommutativeSemigroup for Max<A> {}
impl<A: PartialOrd> CommutativeSemigroup for Min<A> {}
