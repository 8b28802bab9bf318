//! Identity wrapper type - the identity functor.
//!
//! `Identity` adds no effect and no context. It is at the same time a
//! monad (`flat_map` just applies the function) and a comonad (`extract`
//! just unwraps), which makes it the reference model for both families of
//! laws and the base of transformer stacks.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Identity;
    ///
    /// let wrapped = Identity::new(String::from("hello"));
    /// assert_eq!(wrapped.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns a mutable reference to the inner value.
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut A {
        &mut self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

instance_marker! {
    /// Instance marker for [`Identity`]: a `Monad` and a `Comonad`.
    IdentityInstance
}

impl TypeConstructor for IdentityInstance {
    type Applied<A> = Identity<A>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_wraps_and_into_inner_unwraps() {
        assert_eq!(Identity::new("value").into_inner(), "value");
    }

    #[rstest]
    fn as_inner_mut_allows_update() {
        let mut wrapped = Identity::new(1);
        *wrapped.as_inner_mut() += 41;
        assert_eq!(wrapped, Identity(42));
    }

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Identity<Vec<i32>> = vec![1].into();
        assert_eq!(wrapped.as_inner(), &vec![1]);
    }
}
