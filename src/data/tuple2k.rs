//! `Tuple2K` - the product of two functors over one element type.
//!
//! `Tuple2K<F, G, A>` holds an `F[A]` and a `G[A]` side by side. Mapping
//! maps both. Combining two products combines each side with its own
//! semigroup.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{Tuple2K, Tuple2KInstance};
//! use lawful::typeclass::{Functor, OptionInstance, VecInstance};
//!
//! let both = Tuple2K::<OptionInstance, VecInstance, i32>::new(Some(1), vec![2, 3]);
//! let mapped = Tuple2KInstance::map(both, |n| n * 10);
//! assert_eq!(mapped.into_parts(), (Some(10), vec![20, 30]));
//! ```

use std::fmt;

use crate::typeclass::{Applied, Functor, Monoid, Registered, Semigroup, TypeConstructor};

/// An `F[A]` paired with a `G[A]`.
pub struct Tuple2K<F: TypeConstructor, G: TypeConstructor, A> {
    first: Applied<F, A>,
    second: Applied<G, A>,
}

impl<F: TypeConstructor, G: TypeConstructor, A> Tuple2K<F, G, A> {
    /// Pairs the two sides.
    #[inline]
    pub const fn new(first: Applied<F, A>, second: Applied<G, A>) -> Self {
        Self { first, second }
    }

    /// The `F` side.
    #[inline]
    pub const fn first(&self) -> &Applied<F, A> {
        &self.first
    }

    /// The `G` side.
    #[inline]
    pub const fn second(&self) -> &Applied<G, A> {
        &self.second
    }

    /// Splits into both sides.
    #[inline]
    pub fn into_parts(self) -> (Applied<F, A>, Applied<G, A>) {
        (self.first, self.second)
    }

    /// Exchanges the sides.
    #[inline]
    pub fn swap(self) -> Tuple2K<G, F, A> {
        Tuple2K::new(self.second, self.first)
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> Clone for Tuple2K<F, G, A>
where
    Applied<F, A>: Clone,
    Applied<G, A>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> PartialEq for Tuple2K<F, G, A>
where
    Applied<F, A>: PartialEq,
    Applied<G, A>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> Eq for Tuple2K<F, G, A>
where
    Applied<F, A>: Eq,
    Applied<G, A>: Eq,
{
}

impl<F: TypeConstructor, G: TypeConstructor, A> fmt::Debug for Tuple2K<F, G, A>
where
    Applied<F, A>: fmt::Debug,
    Applied<G, A>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Tuple2K")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> Semigroup for Tuple2K<F, G, A>
where
    Applied<F, A>: Semigroup,
    Applied<G, A>: Semigroup,
{
    fn combine(self, other: Self) -> Self {
        Self::new(self.first.combine(other.first), self.second.combine(other.second))
    }
}

impl<F: TypeConstructor, G: TypeConstructor, A> Monoid for Tuple2K<F, G, A>
where
    Applied<F, A>: Monoid,
    Applied<G, A>: Monoid,
{
    fn empty() -> Self {
        Self::new(Monoid::empty(), Monoid::empty())
    }
}

instance_marker! {
    /// Instance marker for [`Tuple2K`] over `F` and `G`.
    Tuple2KInstance<F, G>
}

impl<F: TypeConstructor, G: TypeConstructor> TypeConstructor for Tuple2KInstance<F, G> {
    type Applied<A> = Tuple2K<F, G, A>;
}

impl<F: TypeConstructor, G: TypeConstructor, A> Registered for Tuple2K<F, G, A> {
    type Instance = Tuple2KInstance<F, G>;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<F: Functor, G: Functor> Functor for Tuple2KInstance<F, G> {
    fn map<A, B, Function>(fa: Tuple2K<F, G, A>, mut function: Function) -> Tuple2K<F, G, B>
    where
        Function: FnMut(A) -> B,
    {
        let first = F::map(fa.first, &mut function);
        Tuple2K::new(first, G::map(fa.second, function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityInstance, OptionInstance, VecInstance};
    use rstest::rstest;

    type Pair<A> = Tuple2K<OptionInstance, VecInstance, A>;

    #[rstest]
    fn map_visits_first_side_before_second() {
        let mut order = Vec::new();
        let both: Pair<char> = Tuple2K::new(Some('a'), vec!['b', 'c']);
        let mapped = Tuple2KInstance::map(both, |letter| {
            order.push(letter);
            letter.to_ascii_uppercase()
        });
        assert_eq!(mapped, Tuple2K::new(Some('A'), vec!['B', 'C']));
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn combine_is_pointwise() {
        let left: Pair<String> = Tuple2K::new(Some("a".to_string()), vec!["x".to_string()]);
        let right: Pair<String> = Tuple2K::new(None, vec!["y".to_string()]);
        let combined = left.combine(right);
        assert_eq!(combined.first(), &Some("a".to_string()));
        assert_eq!(combined.second(), &vec!["x".to_string(), "y".to_string()]);
        assert_eq!(Pair::<String>::empty(), Tuple2K::new(None, Vec::new()));
    }

    #[rstest]
    fn swap_exchanges_sides() {
        let both = Tuple2K::<IdentityInstance, OptionInstance, u8>::new(Identity(1), Some(2));
        let swapped = both.swap();
        assert_eq!(swapped.into_parts(), (Some(2), Identity(1)));
    }
}
