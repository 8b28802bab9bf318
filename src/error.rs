//! Error types for fallible construction boundaries.
//!
//! Every algebraic operation in this crate is total. Errors only arise when
//! a value is built from input that cannot represent it, such as a
//! comparison derived from `NaN` or a non-empty collection built from an
//! empty one.

use thiserror::Error;

/// Represents errors raised when constructing algebraic values.
///
/// # Examples
///
/// ```rust
/// use lawful::AlgebraError;
/// use lawful::typeclass::Comparison;
///
/// let error = Comparison::try_from(f64::NAN).unwrap_err();
/// assert_eq!(error, AlgebraError::NotANumber);
/// assert_eq!(format!("{error}"), "cannot derive a comparison from NaN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AlgebraError {
    /// A comparison was requested for a floating-point `NaN`.
    #[error("cannot derive a comparison from NaN")]
    NotANumber,

    /// A non-empty collection was requested from an empty one.
    #[error("cannot build a non-empty collection from an empty one")]
    EmptyCollection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AlgebraError::NotANumber, "cannot derive a comparison from NaN")]
    #[case(
        AlgebraError::EmptyCollection,
        "cannot build a non-empty collection from an empty one"
    )]
    fn display_describes_the_failure(#[case] error: AlgebraError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<AlgebraError>();
    }
}
