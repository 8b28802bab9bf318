//! `NonEmptyVec` - a vector that always holds at least one element.
//!
//! Guaranteeing an element makes `NonEmptyVec` a [`Comonad`]: `extract`
//! returns the head, and `coflat_map` runs a function over every non-empty
//! suffix. It is also a [`Monad`] whose `tail_rec_m` shares the depth-first
//! loop of `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{NonEmptyVec, NonEmptyVecInstance};
//! use lawful::typeclass::{CoflatMap, Comonad};
//!
//! let values = NonEmptyVec::new(1, vec![2, 3]);
//! let sums = NonEmptyVecInstance::coflat_map(values, |suffix| suffix.iter().sum::<i32>());
//! assert_eq!(NonEmptyVecInstance::extract(sums), 6);
//!
//! assert!(NonEmptyVec::try_from(Vec::<i32>::new()).is_err());
//! ```

use std::slice;
use std::vec;

use crate::control::Either;
use crate::error::AlgebraError;
use crate::typeclass::{
    Applicative, Apply, CoflatMap, Comonad, FlatMap, Functor, Monad, Registered, Semigroup,
    TypeConstructor, VecInstance,
};

/// A vector with a mandatory first element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Creates a vector from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// Creates a vector holding exactly one element.
    #[inline]
    pub const fn single(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// The number of elements, always at least one.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Appends an element at the end.
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    /// Converts into a plain `Vec`, head first.
    pub fn into_vec(self) -> Vec<A> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.head);
        all.extend(self.tail);
        all
    }

    /// Converts a `Vec` known to come from a non-empty source.
    ///
    /// Only used where every producing path yields at least one element.
    fn from_nonempty_source(values: Vec<A>) -> Self {
        let mut values = values.into_iter();
        match values.next() {
            Some(head) => Self::new(head, values.collect()),
            None => unreachable!("a non-empty source produced no elements"),
        }
    }
}

impl<A> TryFrom<Vec<A>> for NonEmptyVec<A> {
    type Error = AlgebraError;

    /// Fails with [`AlgebraError::EmptyCollection`] for an empty `Vec`.
    fn try_from(values: Vec<A>) -> Result<Self, Self::Error> {
        let mut values = values.into_iter();
        let head = values.next().ok_or(AlgebraError::EmptyCollection)?;
        Ok(Self::new(head, values.collect()))
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(values: NonEmptyVec<A>) -> Self {
        values.into_vec()
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::iter::Chain<std::iter::Once<A>, vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, A> IntoIterator for &'a NonEmptyVec<A> {
    type Item = &'a A;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a A>, slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

/// Concatenation. There is no empty value, so this is not a monoid.
impl<A> Semigroup for NonEmptyVec<A> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

instance_marker! {
    /// Instance marker for [`NonEmptyVec`].
    NonEmptyVecInstance
}

impl TypeConstructor for NonEmptyVecInstance {
    type Applied<A> = NonEmptyVec<A>;
}

impl<A> Registered for NonEmptyVec<A> {
    type Instance = NonEmptyVecInstance;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl Functor for NonEmptyVecInstance {
    fn map<A, B, F>(fa: NonEmptyVec<A>, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        let head = function(fa.head);
        NonEmptyVec::new(head, fa.tail.into_iter().map(function).collect())
    }
}

impl Apply for NonEmptyVecInstance {
    fn ap<A, B, F>(ff: NonEmptyVec<F>, fa: NonEmptyVec<A>) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        NonEmptyVec<A>: Clone,
    {
        Self::ap_via_flat_map(ff, fa)
    }

    fn map2<A, B, C, F>(fa: NonEmptyVec<A>, fb: NonEmptyVec<B>, function: F) -> NonEmptyVec<C>
    where
        A: Clone,
        B: Clone,
        NonEmptyVec<B>: Clone,
        F: FnMut(A, B) -> C,
    {
        Self::map2_via_flat_map(fa, fb, function)
    }
}

impl Applicative for NonEmptyVecInstance {
    #[inline]
    fn pure<A>(value: A) -> NonEmptyVec<A> {
        NonEmptyVec::single(value)
    }
}

impl FlatMap for NonEmptyVecInstance {
    fn flat_map<A, B, F>(fa: NonEmptyVec<A>, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> NonEmptyVec<B>,
    {
        let first = function(fa.head);
        fa.tail
            .into_iter()
            .fold(first, |joined, value| joined.combine(function(value)))
    }

    /// Every step yields at least one branch, so a finished loop has at
    /// least one result.
    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> NonEmptyVec<Either<A, B>>,
    {
        let results = VecInstance::tail_rec_m(seed, |current| step(current).into_vec());
        NonEmptyVec::from_nonempty_source(results)
    }
}

impl Monad for NonEmptyVecInstance {}

impl CoflatMap for NonEmptyVecInstance {
    fn coflat_map<A, B, F>(fa: NonEmptyVec<A>, mut function: F) -> NonEmptyVec<B>
    where
        A: Clone,
        F: FnMut(NonEmptyVec<A>) -> B,
    {
        let NonEmptyVec { head, tail } = fa;
        let first = function(NonEmptyVec::new(head, tail.clone()));
        let rest = (0..tail.len())
            .map(|start| function(NonEmptyVec::new(tail[start].clone(), tail[start + 1..].to_vec())))
            .collect();
        NonEmptyVec::new(first, rest)
    }
}

impl Comonad for NonEmptyVecInstance {
    #[inline]
    fn extract<A>(fa: NonEmptyVec<A>) -> A {
        fa.head
    }
}
