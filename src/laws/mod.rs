//! Law-checking kit.
//!
//! Every capability in this crate comes with equations its instances must
//! satisfy. The type system cannot enforce them, so they are provided here
//! as functions that state a law on concrete inputs and return both sides
//! as an [`IsEq`]. Property tests feed them generated inputs; the
//! [`kernel_law_tests!`](crate::kernel_law_tests) macro stamps out sample
//! based tests for the value-level algebras.
//!
//! | Law set              | Capability                      |
//! |----------------------|---------------------------------|
//! | [`SemigroupLaws`]    | `Semigroup`                     |
//! | [`MonoidLaws`]       | `Monoid`                        |
//! | [`GroupLaws`]        | `Group`                         |
//! | [`CommutativeLaws`]  | `CommutativeSemigroup`          |
//! | [`FunctorLaws`]      | `Functor`                       |
//! | [`ApplyLaws`]        | `Apply`                         |
//! | [`FlatMapLaws`]      | `FlatMap`                       |
//! | [`MonadLaws`]        | `Monad`, including stack safety |
//! | [`CoflatMapLaws`]    | `CoflatMap`                     |
//! | [`ComonadLaws`]      | `Comonad`                       |
//!
//! # Examples
//!
//! ```rust
//! use lawful::laws::{GroupLaws, MonadLaws};
//! use lawful::typeclass::{Sum, VecInstance};
//!
//! assert!(GroupLaws::combine_n_signed_matches_repeat(Sum::new(3_i32), i8::MIN).holds());
//! assert!(MonadLaws::<VecInstance>::right_identity(vec![1, 2, 3]).holds());
//! ```

mod comonad;
mod functor;
mod is_eq;
mod kernel;
mod macros;
mod monad;

pub use comonad::{CoflatMapLaws, ComonadLaws};
pub use functor::{ApplyLaws, FunctorLaws};
pub use is_eq::{IsEq, LawViolation};
pub use kernel::{CommutativeLaws, GroupLaws, MonoidLaws, SemigroupLaws};
pub use monad::{FlatMapLaws, MonadLaws};
