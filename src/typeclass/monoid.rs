//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty` such that
//! combining any value with `empty` (on either side) yields the original
//! value.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```
//!
//! ## Repetition
//!
//! ```text
//! a.combine_n_or_empty(0) == Self::empty()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Sum::new(3).combine_n_or_empty(4), Sum::new(12));
//! assert_eq!(Sum::new(3).combine_n_or_empty(0), Sum::new(0));
//! ```

use num_traits::{Bounded, One, Zero};
use std::ops::{Add, Mul};

use super::Identity;
use super::semigroup::{Semigroup, repeated_combine};
use super::wrappers::{Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(String::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Monoid, Sum};
    ///
    /// let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
    /// assert_eq!(Sum::combine_all(numbers), Sum::new(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum::new(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("hello").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }

    /// Combines a value with itself `count` times; zero yields [`empty`](Self::empty).
    ///
    /// Positive counts use the same doubling strategy as
    /// [`Semigroup::combine_n`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine_n_or_empty(4), Sum::new(12));
    /// assert_eq!(Sum::new(3).combine_n_or_empty(0), Sum::new(0));
    /// assert_eq!(String::from("na").combine_n_or_empty(2), "nana");
    /// ```
    #[must_use]
    fn combine_n_or_empty(self, count: usize) -> Self
    where
        Self: Clone + Sized,
    {
        if count == 0 {
            Self::empty()
        } else {
            repeated_combine(self, count)
        }
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// `None` is the identity, so any semigroup becomes a monoid under `Option`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Zero> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::zero())
    }
}

impl<A: Mul<Output = A> + One> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::one())
    }
}

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::min_value())
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::max_value())
    }
}

// =============================================================================
// Tests
// =============================================================================
