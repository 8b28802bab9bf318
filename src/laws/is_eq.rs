//! The result of stating a law on concrete inputs.

use std::fmt;

use thiserror::Error;

/// Two sides of a law that must be equal.
///
/// Law functions compute both sides and return them unevaluated for
/// equality, so callers can compare with `==`, `prop_assert_eq!`, or
/// [`check`](Self::check) as they prefer.
///
/// # Examples
///
/// ```rust
/// use lawful::laws::{IsEq, SemigroupLaws};
///
/// let law = SemigroupLaws::associativity(String::from("a"), String::from("b"), String::from("c"));
/// assert!(law.holds());
/// assert_eq!(IsEq::new(1, 2).check("made up"), Err(lawful::laws::LawViolation {
///     law: "made up",
///     lhs: "1".to_string(),
///     rhs: "2".to_string(),
/// }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsEq<A> {
    /// The left-hand side.
    pub lhs: A,
    /// The right-hand side.
    pub rhs: A,
}

impl<A> IsEq<A> {
    /// Pairs both sides.
    #[inline]
    pub const fn new(lhs: A, rhs: A) -> Self {
        Self { lhs, rhs }
    }

    /// Whether both sides are equal.
    pub fn holds(&self) -> bool
    where
        A: PartialEq,
    {
        self.lhs == self.rhs
    }

    /// Applies `function` to both sides, for comparing through a projection.
    pub fn map<B, F>(self, mut function: F) -> IsEq<B>
    where
        F: FnMut(A) -> B,
    {
        IsEq::new(function(self.lhs), function(self.rhs))
    }

    /// Reports a failure as a [`LawViolation`] naming `law`.
    ///
    /// # Errors
    ///
    /// Returns the violation, with both sides rendered through `Debug`, when
    /// the sides differ.
    pub fn check(self, law: &'static str) -> Result<(), LawViolation>
    where
        A: PartialEq + fmt::Debug,
    {
        if self.holds() {
            Ok(())
        } else {
            Err(LawViolation {
                law,
                lhs: format!("{:?}", self.lhs),
                rhs: format!("{:?}", self.rhs),
            })
        }
    }
}

/// A law that failed on some input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("law `{law}` does not hold: {lhs} != {rhs}")]
pub struct LawViolation {
    /// The name of the law.
    pub law: &'static str,
    /// The left-hand side, rendered with `Debug`.
    pub lhs: String,
    /// The right-hand side, rendered with `Debug`.
    pub rhs: String,
}
