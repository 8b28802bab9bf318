//! Newtype wrappers selecting an algebra for a shared carrier.
//!
//! A carrier type has exactly one canonical instance per capability, so a
//! number cannot be "the" additive monoid and "the" multiplicative monoid
//! at the same time. These wrappers pick the algebra explicitly.
//!
//! # Available Wrappers
//!
//! | Wrapper      | `combine`  | `empty`                       | `inverse` |
//! |--------------|------------|-------------------------------|-----------|
//! | [`Sum`]      | `a + b`    | `Zero::zero()`                | `-a`      |
//! | [`Product`]  | `a * b`    | `One::one()`                  | -         |
//! | [`Max`]      | `max(a,b)` | `Bounded::min_value()`        | -         |
//! | [`Min`]      | `min(a,b)` | `Bounded::max_value()`        | -         |
//!
//! The identity elements come from `num-traits`, so every primitive number
//! and any user type implementing the corresponding `num-traits` trait
//! gets a monoid for free.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Max, Monoid, Product, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
//! assert_eq!(Product::<i32>::empty(), Product::new(1));
//! assert_eq!(Max::combine_all(vec![Max::new(2), Max::new(9), Max::new(4)]), Max::new(9));
//! assert_eq!(Max::<u8>::empty(), Max::new(0));
//! ```

use std::fmt;

macro_rules! define_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Wraps `value` in `", stringify!($name), "`.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the inner value.
            #[inline]
            pub const fn get(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            #[inline]
            fn from(value: A) -> Self {
                Self(value)
            }
        }

        impl<A: fmt::Display> fmt::Display for $name<A> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_wrapper! {
    /// The additive algebra: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    ///
    /// `Sum` is a commutative group whenever the carrier can be negated,
    /// which makes it the reference instance for signed repetition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Group, Sum};
    ///
    /// assert_eq!(Sum::new(5).remove(Sum::new(2)), Sum::new(3));
    /// assert_eq!(Sum::new(1).combine_n_signed(i32::MIN), Sum::new(i32::MIN));
    /// ```
    Sum
}

define_wrapper! {
    /// The multiplicative algebra: `Product(a).combine(Product(b)) == Product(a * b)`.
    Product
}

define_wrapper! {
    /// The maximum algebra: keeps the larger value.
    Max
}

define_wrapper! {
    /// The minimum algebra: keeps the smaller value.
    Min
}
