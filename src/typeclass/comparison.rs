//! The three-way comparison result.
//!
//! [`Comparison`] is a value type with no transitions. It converts to and
//! from integer signs, floating-point signs (failing for NaN, which has no
//! ordering), and [`std::cmp::Ordering`]. Its monoid is lexicographic:
//! the first non-equal comparison decides.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Comparison, Monoid, Semigroup};
//!
//! assert_eq!(Comparison::from_int(-5), Comparison::LessThan);
//! assert_eq!(Comparison::from_double(f64::NAN), None);
//!
//! // Compare by length first, then alphabetically.
//! let by_length = Comparison::of(&"pear".len(), &"plum".len());
//! let by_letters = Comparison::of(&"pear", &"plum");
//! assert_eq!(by_length.combine(by_letters), Comparison::LessThan);
//! ```

use std::cmp::Ordering;

use super::monoid::Monoid;
use super::semigroup::Semigroup;
use crate::error::AlgebraError;

/// The result of comparing two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The left value is greater.
    GreaterThan,
    /// The values are equal.
    EqualTo,
    /// The left value is smaller.
    LessThan,
}

impl Comparison {
    /// Reads the sign of an integer: positive, zero or negative.
    #[must_use]
    pub const fn from_int(value: i32) -> Self {
        if value > 0 {
            Self::GreaterThan
        } else if value == 0 {
            Self::EqualTo
        } else {
            Self::LessThan
        }
    }

    /// Reads the sign of a double, or `None` for NaN.
    ///
    /// Both `0.0` and `-0.0` are [`EqualTo`](Self::EqualTo).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Comparison;
    ///
    /// assert_eq!(Comparison::from_double(-0.0), Some(Comparison::EqualTo));
    /// assert_eq!(Comparison::from_double(f64::INFINITY), Some(Comparison::GreaterThan));
    /// ```
    #[must_use]
    pub fn from_double(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else if value > 0.0 {
            Some(Self::GreaterThan)
        } else if value < 0.0 {
            Some(Self::LessThan)
        } else {
            Some(Self::EqualTo)
        }
    }

    /// Compares two totally ordered values.
    #[must_use]
    pub fn of<T: Ord + ?Sized>(left: &T, right: &T) -> Self {
        left.cmp(right).into()
    }

    /// `1`, `0` or `-1`.
    #[must_use]
    pub const fn to_int(self) -> i32 {
        match self {
            Self::GreaterThan => 1,
            Self::EqualTo => 0,
            Self::LessThan => -1,
        }
    }

    /// `1.0`, `0.0` or `-1.0`.
    #[must_use]
    pub const fn to_double(self) -> f64 {
        match self {
            Self::GreaterThan => 1.0,
            Self::EqualTo => 0.0,
            Self::LessThan => -1.0,
        }
    }

    /// Swaps `GreaterThan` and `LessThan`.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::GreaterThan => Self::LessThan,
            Self::EqualTo => Self::EqualTo,
            Self::LessThan => Self::GreaterThan,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::GreaterThan,
            Ordering::Equal => Self::EqualTo,
            Ordering::Less => Self::LessThan,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::GreaterThan => Self::Greater,
            Comparison::EqualTo => Self::Equal,
            Comparison::LessThan => Self::Less,
        }
    }
}

impl TryFrom<f64> for Comparison {
    type Error = AlgebraError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_double(value).ok_or(AlgebraError::NotANumber)
    }
}

impl Semigroup for Comparison {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match self {
            Self::EqualTo => other,
            decided => decided,
        }
    }
}

impl Monoid for Comparison {
    #[inline]
    fn empty() -> Self {
        Self::EqualTo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(42, Comparison::GreaterThan)]
    #[case(0, Comparison::EqualTo)]
    #[case(-5, Comparison::LessThan)]
    #[case(i32::MIN, Comparison::LessThan)]
    fn from_int_reads_sign(#[case] value: i32, #[case] expected: Comparison) {
        assert_eq!(Comparison::from_int(value), expected);
    }

    #[rstest]
    #[case(f64::NAN, None)]
    #[case(0.0, Some(Comparison::EqualTo))]
    #[case(-0.0, Some(Comparison::EqualTo))]
    #[case(1e-300, Some(Comparison::GreaterThan))]
    #[case(f64::NEG_INFINITY, Some(Comparison::LessThan))]
    fn from_double_reads_sign(#[case] value: f64, #[case] expected: Option<Comparison>) {
        assert_eq!(Comparison::from_double(value), expected);
    }

    #[rstest]
    fn try_from_nan_is_an_error() {
        assert_eq!(Comparison::try_from(f64::NAN), Err(AlgebraError::NotANumber));
        assert_eq!(Comparison::try_from(-2.5), Ok(Comparison::LessThan));
    }

    #[rstest]
    fn empty_is_equal_to() {
        assert!(Comparison::EqualTo.is_empty_value());
        assert_eq!(Comparison::combine_all(Vec::new()), Comparison::EqualTo);
    }

    proptest! {
        #[test]
        fn int_round_trip_preserves_sign(value in any::<i32>()) {
            prop_assert_eq!(Comparison::from_int(value).to_int(), value.signum());
        }

        #[test]
        fn of_agrees_with_ordering(left in any::<i64>(), right in any::<i64>()) {
            prop_assert_eq!(Ordering::from(Comparison::of(&left, &right)), left.cmp(&right));
            prop_assert_eq!(Comparison::of(&left, &right).reverse(), Comparison::of(&right, &left));
        }

        #[test]
        fn double_sign_matches_int_sign(value in -1_000_i32..1_000) {
            prop_assert_eq!(Comparison::from_double(f64::from(value)), Some(Comparison::from_int(value)));
        }
    }
}
