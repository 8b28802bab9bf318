//! Group type class - monoids where every element has an inverse.
//!
//! # Laws
//!
//! In addition to the Monoid laws, for all `a`:
//!
//! ## Left Inverse
//!
//! ```text
//! a.clone().inverse().combine(a) == Self::empty()
//! ```
//!
//! ## Right Inverse
//!
//! ```text
//! a.clone().combine(a.inverse()) == Self::empty()
//! ```
//!
//! ## Signed Repetition
//!
//! ```text
//! a.combine_n_signed(0)  == Self::empty()
//! a.combine_n_signed(-n) == a.inverse().combine_n_signed(n)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Group, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(5).remove(Sum::new(2)), Sum::new(3));
//! assert_eq!(Sum::new(4).combine(Sum::new(4).inverse()), Sum::empty());
//! assert_eq!(Sum::new(3).combine_n_signed(-4), Sum::new(-12));
//! ```

use num_traits::{PrimInt, Signed, Zero};
use std::ops::{Add, Neg};

use super::Identity;
use super::monoid::Monoid;
use super::semigroup::repeated_combine;
use super::wrappers::Sum;

/// A type class for monoids with inverses.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Group, Sum};
///
/// assert_eq!(Sum::new(7).inverse(), Sum::new(-7));
/// ```
pub trait Group: Monoid {
    /// Returns the inverse of this value.
    #[must_use]
    fn inverse(self) -> Self;

    /// Combines `self` with the inverse of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Group, Sum};
    ///
    /// assert_eq!(Sum::new(5).remove(Sum::new(2)), Sum::new(3));
    /// ```
    #[must_use]
    fn remove(self, other: Self) -> Self
    where
        Self: Sized,
    {
        self.combine(other.inverse())
    }

    /// Combines a value with itself a signed number of times.
    ///
    /// - positive `count`: doubling, as [`Semigroup::combine_n`](super::Semigroup::combine_n)
    /// - zero: [`Monoid::empty`]
    /// - negative `count`: the inverse repeated `-count` times
    ///
    /// `N::MIN` has no positive counterpart, so it is rewritten as
    /// `(a ⊕ a)` repeated `N::MIN / 2` times. The halving is exact because
    /// `N::MIN` is even and `combine_n(x, 2k) == combine_n(x ⊕ x, k)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Group, Sum};
    ///
    /// assert_eq!(Sum::new(2).combine_n_signed(5_i32), Sum::new(10));
    /// assert_eq!(Sum::new(2).combine_n_signed(0_i64), Sum::new(0));
    /// assert_eq!(Sum::new(2).combine_n_signed(-3_i8), Sum::new(-6));
    /// assert_eq!(Sum::new(1).combine_n_signed(i32::MIN), Sum::new(i32::MIN));
    /// ```
    #[must_use]
    fn combine_n_signed<N>(self, count: N) -> Self
    where
        N: PrimInt + Signed,
        Self: Clone + Sized,
    {
        if count > N::zero() {
            repeated_combine(self, count)
        } else if count.is_zero() {
            Self::empty()
        } else if count == <N as num_traits::Bounded>::min_value() {
            let two = N::one() + N::one();
            self.clone().combine(self).combine_n_signed(count / two)
        } else {
            repeated_combine(self.inverse(), -count)
        }
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

impl Group for () {
    fn inverse(self) -> Self {}
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl<G: Group> Group for Identity<G> {
    fn inverse(self) -> Self {
        Self(self.0.inverse())
    }
}

// =============================================================================
// Sum Implementation
// =============================================================================

impl<A: Add<Output = A> + Neg<Output = A> + Zero> Group for Sum<A> {
    fn inverse(self) -> Self {
        Self(-self.0)
    }

    fn remove(self, other: Self) -> Self {
        Self(self.0 + -other.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
