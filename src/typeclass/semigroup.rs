//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is an algebraic structure consisting of a set together with
//! an associative binary operation. In programming terms, a type `T` is a
//! semigroup if there exists a function `combine: (T, T) -> T` that is
//! associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! ## Repetition
//!
//! ```text
//! a.combine_n(1) == a
//! a.combine_n(n + 1) == a.combine(a.combine_n(n))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Semigroup;
//! use std::num::NonZeroUsize;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let three = NonZeroUsize::new(3).unwrap();
//! assert_eq!(vec![1, 2].combine_n(three), vec![1, 2, 1, 2, 1, 2]);
//! ```

use std::num::NonZeroUsize;
use std::ops::{Add, Mul};

use num_traits::PrimInt;

use super::Identity;
use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// let result = a.combine_ref(&b);
    /// assert_eq!(a, "Hello, ");
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// Uses binary doubling, so only `O(log count)` combines are performed.
    /// Associativity guarantees the result equals the left-to-right fold
    /// `a.combine(a).combine(a)...`. A zero count is unrepresentable; see
    /// [`Monoid::combine_n_or_empty`](super::Monoid::combine_n_or_empty)
    /// for the version that accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Semigroup, Sum};
    /// use std::num::NonZeroUsize;
    ///
    /// let count = NonZeroUsize::new(1_000_000).unwrap();
    /// assert_eq!(Sum::new(3_u64).combine_n(count), Sum::new(3_000_000));
    ///
    /// let twice = NonZeroUsize::new(2).unwrap();
    /// assert_eq!(String::from("ab").combine_n(twice), "abab");
    /// ```
    #[must_use]
    fn combine_n(self, count: NonZeroUsize) -> Self
    where
        Self: Clone + Sized,
    {
        repeated_combine(self, count.get())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

/// Combines `value` with itself `count` times by binary doubling.
///
/// `count` must be at least one. `base` holds `value` combined `2^k` times
/// and `extra` accumulates the set bits; every intermediate is bounded by
/// the final result, so repetition of a fixed-width number never overflows
/// when the result itself fits.
pub(crate) fn repeated_combine<S, N>(value: S, count: N) -> S
where
    S: Semigroup + Clone,
    N: PrimInt,
{
    let one = N::one();
    debug_assert!(count >= one, "repetition count must be positive");
    if count == one {
        return value;
    }

    let mut base = value.clone();
    let mut extra = value;
    let mut remaining = count - one;
    loop {
        if remaining == one {
            return base.combine(extra);
        }
        if remaining & one == one {
            extra = base.clone().combine(extra);
        }
        base = base.clone().combine(base);
        remaining = remaining >> 1;
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option lifts a semigroup, treating `None` as "nothing to combine".
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

/// Result forms a semigroup when its success type is a semigroup.
///
/// The first error wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_combine_n_matches_fold(value in "[a-z]{0,4}", count in 1_usize..40) {
            let expected = std::iter::repeat_n(value.clone(), count).collect::<String>();
            let count = NonZeroUsize::new(count).unwrap();
            prop_assert_eq!(value.combine_n(count), expected);
        }

        #[test]
        fn prop_vec_associativity(
            first in prop::collection::vec(any::<i32>(), 0..8),
            second in prop::collection::vec(any::<i32>(), 0..8),
            third in prop::collection::vec(any::<i32>(), 0..8),
        ) {
            let left = first.clone().combine(second.clone()).combine(third.clone());
            let right = first.combine(second.combine(third));
            prop_assert_eq!(left, right);
        }
    }
}
