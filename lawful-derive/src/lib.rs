//! Derive macros for lawful algebras.
//!
//! This crate generates field-wise implementations of the value-level
//! algebras from `lawful::typeclass`. A struct whose fields are all
//! semigroups is a semigroup under field-wise `combine`, and likewise for
//! monoids (field-wise `empty`) and groups (field-wise `inverse`).
//!
//! # Available Derive Macros
//!
//! - [`Semigroup`]: field-wise `combine`
//! - [`Monoid`]: field-wise `empty`
//! - [`Group`]: field-wise `inverse`
//!
//! Named, tuple and unit structs are supported. Every field type receives
//! a bound on the derived trait in the generated `where` clause, so generic
//! structs only get the instance when their fields have one.
//!
//! # Example
//!
//! ```rust,ignore
//! use lawful::typeclass::{Max, Monoid, Semigroup, Sum};
//! use lawful::{Monoid, Semigroup};
//!
//! #[derive(Debug, PartialEq, Semigroup, Monoid)]
//! struct Stats {
//!     count: Sum<u32>,
//!     peak: Max<i64>,
//! }
//!
//! let total = Stats { count: Sum::new(1), peak: Max::new(4) }
//!     .combine(Stats { count: Sum::new(2), peak: Max::new(-3) });
//! assert_eq!(total, Stats { count: Sum::new(3), peak: Max::new(4) });
//! assert_eq!(Stats::empty().count, Sum::new(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod algebra;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro for `lawful::typeclass::Semigroup`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Semigroup for Pair where A: Semigroup, B: Semigroup {
///     fn combine(self, other: Self) -> Self {
///         Self { first: Semigroup::combine(self.first, other.first), ... }
///     }
/// }
/// ```
///
/// Enums and unions are rejected: there is no field-wise way to combine two
/// different variants.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(algebra::expand(&input, algebra::Algebra::Semigroup))
}

/// Derive macro for `lawful::typeclass::Monoid`.
///
/// The struct must also implement `Semigroup`, typically through
/// `#[derive(Semigroup)]`. `empty` builds every field from its own
/// `Monoid::empty`.
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(algebra::expand(&input, algebra::Algebra::Monoid))
}

/// Derive macro for `lawful::typeclass::Group`.
///
/// The struct must also implement `Monoid`. `inverse` inverts each field;
/// `remove` and `combine_n_signed` keep their default definitions.
///
/// # Example
///
/// ```rust,ignore
/// use lawful::typeclass::{Group, Sum};
/// use lawful::{Group, Monoid, Semigroup};
///
/// #[derive(Debug, PartialEq, Semigroup, Monoid, Group)]
/// struct Offset(Sum<i32>, Sum<i64>);
///
/// assert_eq!(Offset(Sum::new(2), Sum::new(-5)).inverse(), Offset(Sum::new(-2), Sum::new(5)));
/// ```
#[proc_macro_derive(Group)]
pub fn derive_group(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(algebra::expand(&input, algebra::Algebra::Group))
}
