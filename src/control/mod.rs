//! Control structures for stack-safe, deferred computation.
//!
//! - [`Either`]: the step result of `tail_rec_m` (`Left` = continue, `Right` = done)
//! - [`tail_rec`]: the explicit loop behind single-valued `tail_rec_m`
//! - [`Eval`]: deferred evaluation with stack-safe `flat_map`
//! - [`Lazy`]: memoized evaluation
//!
//! # Examples
//!
//! ## Stack-Safe Recursion
//!
//! ```rust
//! use lawful::control::{Either, Eval};
//!
//! fn factorial(n: u64) -> Eval<u64> {
//!     Eval::tail_rec_m((n, 1_u64), |(remaining, accumulator)| {
//!         Eval::now(if remaining <= 1 {
//!             Either::Right(accumulator)
//!         } else {
//!             Either::Left((remaining - 1, remaining * accumulator))
//!         })
//!     })
//! }
//!
//! assert_eq!(factorial(10).value(), 3_628_800);
//! ```
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use lawful::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert_eq!(*lazy.force(), 42);
//! ```

mod either;
mod eval;
mod lazy;
mod tail_rec;

pub use either::Either;
pub use eval::Eval;
pub use lazy::Lazy;
pub use tail_rec::tail_rec;
