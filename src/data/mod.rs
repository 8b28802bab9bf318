//! Composite data types derived from the capability traits.
//!
//! Every type here is built from component instances named as type
//! parameters, and gets its capabilities from theirs:
//!
//! - [`NonEmptyVec`]: a vector with at least one element; a monad and a
//!   comonad
//! - [`OptionT`]: the optional-value transformer over any monad
//! - [`Tuple2K`]: the product of two functors over the same element
//! - [`EitherK`]: the sum of two functors over the same element
//! - [`Cokleisli`]: functions `F[A] -> B`, composed through `coflat_map`
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{OptionT, OptionTInstance};
//! use lawful::typeclass::{FlatMap, VecInstance};
//!
//! type Search = OptionTInstance<VecInstance>;
//!
//! let found = OptionT::<VecInstance, i32>::new(vec![Some(1), None, Some(3)]);
//! let doubled = Search::flat_map(found, |n| OptionT::new(vec![Some(n * 2)]));
//! assert_eq!(doubled.value(), vec![Some(2), None, Some(6)]);
//! ```

mod cokleisli;
mod either_k;
mod non_empty_vec;
mod option_t;
mod tuple2k;

pub use cokleisli::Cokleisli;
pub use either_k::{EitherK, EitherKInstance};
pub use non_empty_vec::{NonEmptyVec, NonEmptyVecInstance};
pub use option_t::{OptionT, OptionTInstance};
pub use tuple2k::{Tuple2K, Tuple2KInstance};
