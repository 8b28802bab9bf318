//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the step result of every `tail_rec_m` loop in this
//! crate: `Left` carries the next seed ("keep going") and `Right` carries
//! the final answer ("done"). It is also a right-biased monad in its own
//! right through [`EitherInstance`](crate::typeclass::EitherInstance).
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Either;
//!
//! let step: Either<u32, String> = Either::Left(3);
//! let described = step.fold(
//!     |seed| format!("continue from {seed}"),
//!     |done| format!("finished with {done}"),
//! );
//! assert_eq!(described, "continue from 3");
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// # Examples
///
/// ```rust
/// use lawful::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|value| value * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant. In a `tail_rec_m` step this means "continue".
    Left(L),
    /// The right variant. In a `tail_rec_m` step this means "done".
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Some(left)` or `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(right)` or `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a `Left` value, leaving `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(20);
    /// assert_eq!(left.map_left(|value| value + 1), Either::Left(21));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a `Right` value, leaving `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the `Right` value.
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Eliminates the either by handling both cases.
    #[inline]
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(1);
    /// assert_eq!(left.swap(), Either::Right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the `Right` value or computes one from the `Left` value.
    #[inline]
    pub fn right_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }
}

impl<T> Either<T, T> {
    /// Extracts the value when both sides share a type.
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Result conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true)]
    #[case(Either::Right("done"), false)]
    fn is_left_reports_variant(#[case] either: Either<i32, &str>, #[case] expected: bool) {
        assert_eq!(either.is_left(), expected);
        assert_eq!(either.is_right(), !expected);
    }

    #[rstest]
    fn map_right_leaves_left_untouched() {
        let left: Either<i32, i32> = Either::Left(1);
        assert_eq!(left.map_right(|value| value * 10), Either::Left(1));
    }

    #[rstest]
    fn flat_map_right_short_circuits_on_left() {
        let left: Either<&str, i32> = Either::Left("stop");
        let chained = left.flat_map_right(|value| Either::Right(value + 1));
        assert_eq!(chained, Either::Left("stop"));
    }

    #[rstest]
    fn swap_twice_is_identity() {
        let either: Either<i32, &str> = Either::Right("value");
        assert_eq!(either.swap().swap(), either);
    }

    #[rstest]
    fn merge_extracts_either_side() {
        assert_eq!(Either::<i32, i32>::Left(3).merge(), 3);
        assert_eq!(Either::<i32, i32>::Right(4).merge(), 4);
    }

    #[rstest]
    fn result_round_trip_preserves_sides() {
        let ok: Result<i32, String> = Ok(5);
        let either: Either<String, i32> = ok.into();
        assert_eq!(either, Either::Right(5));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Ok(5));
    }

    #[rstest]
    fn display_names_the_side() {
        let either: Either<i32, &str> = Either::Left(7);
        assert_eq!(either.to_string(), "Left(7)");
    }
}
