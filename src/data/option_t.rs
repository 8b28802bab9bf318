//! `OptionT` - Option Monad Transformer.
//!
//! `OptionT<M, A>` wraps `M[Option<A>]`: a computation in the monad `M`
//! that may also have no result. `flat_map` stops at the first `None`
//! without leaving `M`.
//!
//! `M` is an instance marker, so one implementation covers every inner
//! monad: `OptionT<VecInstance, A>` over `Vec<Option<A>>`,
//! `OptionT<ResultInstance<E>, A>` over `Result<Option<A>, E>`, and so on.
//!
//! # Instances
//!
//! | Capability                              | Requires        |
//! |-----------------------------------------|-----------------|
//! | `Functor`                               | `M: Functor`    |
//! | `Apply`, `Applicative`, `FlatMap`, `Monad` | `M: Monad`   |
//!
//! `Apply` is only derived from `M: Monad`, through `flat_map`, so `ap`
//! always agrees with `flat_map` even when `M`'s own `ap` would evaluate
//! differently.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{OptionT, OptionTInstance};
//! use lawful::typeclass::{FlatMap, ResultInstance};
//!
//! type Lookup = OptionTInstance<ResultInstance<String>>;
//!
//! let found: OptionT<ResultInstance<String>, u32> = OptionT::some(4);
//! let halved = Lookup::flat_map(found, |n| {
//!     if n % 2 == 0 { OptionT::some(n / 2) } else { OptionT::none() }
//! });
//! assert_eq!(halved.value(), Ok(Some(2)));
//! ```

use std::fmt;

use crate::control::Either;
use crate::typeclass::{
    Applicative, Applied, Apply, FlatMap, Functor, Monad, Registered, TypeConstructor,
};

/// An optional value inside the monad `M`.
pub struct OptionT<M: TypeConstructor, A> {
    value: Applied<M, Option<A>>,
}

impl<M: TypeConstructor, A> OptionT<M, A> {
    /// Wraps an existing `M[Option<A>]`.
    #[inline]
    pub const fn new(value: Applied<M, Option<A>>) -> Self {
        Self { value }
    }

    /// Unwraps to the underlying `M[Option<A>]`.
    #[inline]
    pub fn value(self) -> Applied<M, Option<A>> {
        self.value
    }

    /// Borrows the underlying `M[Option<A>]`.
    #[inline]
    pub const fn as_value(&self) -> &Applied<M, Option<A>> {
        &self.value
    }

    /// A present value.
    pub fn some(value: A) -> Self
    where
        M: Applicative,
    {
        Self::new(M::pure(Some(value)))
    }

    /// An absent value.
    pub fn none() -> Self
    where
        M: Applicative,
    {
        Self::new(M::pure(None))
    }

    /// Lifts an `Option` into `M`.
    pub fn from_option(option: Option<A>) -> Self
    where
        M: Applicative,
    {
        Self::new(M::pure(option))
    }

    /// Lifts a computation of `M`, treating each of its values as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::OptionT;
    /// use lawful::typeclass::VecInstance;
    ///
    /// let lifted = OptionT::<VecInstance, _>::lift(vec![1, 2]);
    /// assert_eq!(lifted.value(), vec![Some(1), Some(2)]);
    /// ```
    pub fn lift(inner: Applied<M, A>) -> Self
    where
        M: Functor,
    {
        Self::new(M::map(inner, Some))
    }

    /// Replaces every absent value with `default`.
    pub fn get_or_else(self, default: A) -> Applied<M, A>
    where
        M: Functor,
        A: Clone,
    {
        M::map(self.value, move |option| option.unwrap_or_else(|| default.clone()))
    }

    /// Whether each value is present.
    pub fn is_defined(self) -> Applied<M, bool>
    where
        M: Functor,
    {
        M::map(self.value, |option| option.is_some())
    }

    /// Eliminates the option inside `M`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::OptionT;
    /// use lawful::typeclass::VecInstance;
    ///
    /// let values = OptionT::<VecInstance, i32>::new(vec![Some(3), None]);
    /// assert_eq!(values.fold(|| "missing".to_string(), |n| n.to_string()), vec!["3", "missing"]);
    /// ```
    pub fn fold<B, N, S>(self, mut if_none: N, mut if_some: S) -> Applied<M, B>
    where
        M: Functor,
        N: FnMut() -> B,
        S: FnMut(A) -> B,
    {
        M::map(self.value, move |option| match option {
            Some(value) => if_some(value),
            None => if_none(),
        })
    }

    /// Continues with `alternative` wherever this value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::OptionT;
    /// use lawful::typeclass::OptionInstance;
    ///
    /// let missing = OptionT::<OptionInstance, i32>::none();
    /// assert_eq!(missing.or_else(OptionT::some(7)).value(), Some(Some(7)));
    /// ```
    pub fn or_else(self, alternative: Self) -> Self
    where
        M: Monad,
        Applied<M, Option<A>>: Clone,
    {
        let fallback = alternative.value;
        Self::new(M::flat_map(self.value, move |option| match option {
            Some(value) => M::pure(Some(value)),
            None => fallback.clone(),
        }))
    }
}

impl<M: TypeConstructor, A> Clone for OptionT<M, A>
where
    Applied<M, Option<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: TypeConstructor, A> PartialEq for OptionT<M, A>
where
    Applied<M, Option<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: TypeConstructor, A> Eq for OptionT<M, A> where Applied<M, Option<A>>: Eq {}

impl<M: TypeConstructor, A> fmt::Debug for OptionT<M, A>
where
    Applied<M, Option<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("OptionT").field(&self.value).finish()
    }
}

instance_marker! {
    /// Instance marker for [`OptionT`] over the monad `M`.
    OptionTInstance<M>
}

impl<M: TypeConstructor> TypeConstructor for OptionTInstance<M> {
    type Applied<A> = OptionT<M, A>;
}

impl<M: TypeConstructor, A> Registered for OptionT<M, A> {
    type Instance = OptionTInstance<M>;
    type Inner = A;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<M: Functor> Functor for OptionTInstance<M> {
    fn map<A, B, F>(fa: OptionT<M, A>, mut function: F) -> OptionT<M, B>
    where
        F: FnMut(A) -> B,
    {
        OptionT::new(M::map(fa.value, move |option| option.map(&mut function)))
    }
}

impl<M: Monad> Apply for OptionTInstance<M> {
    fn ap<A, B, F>(ff: OptionT<M, F>, fa: OptionT<M, A>) -> OptionT<M, B>
    where
        F: FnMut(A) -> B,
        A: Clone,
        OptionT<M, A>: Clone,
    {
        Self::ap_via_flat_map(ff, fa)
    }

    fn map2<A, B, C, F>(fa: OptionT<M, A>, fb: OptionT<M, B>, function: F) -> OptionT<M, C>
    where
        A: Clone,
        B: Clone,
        OptionT<M, B>: Clone,
        F: FnMut(A, B) -> C,
    {
        Self::map2_via_flat_map(fa, fb, function)
    }
}

impl<M: Monad> Applicative for OptionTInstance<M> {
    #[inline]
    fn pure<A>(value: A) -> OptionT<M, A> {
        OptionT::some(value)
    }
}

impl<M: Monad> FlatMap for OptionTInstance<M> {
    fn flat_map<A, B, F>(fa: OptionT<M, A>, mut function: F) -> OptionT<M, B>
    where
        F: FnMut(A) -> OptionT<M, B>,
    {
        OptionT::new(M::flat_map(fa.value, move |option| match option {
            Some(value) => function(value).value,
            None => M::pure(None),
        }))
    }

    /// Runs on `M::tail_rec_m`: an absent step ends that branch as `None`.
    fn tail_rec_m<A, B, F>(seed: A, mut step: F) -> OptionT<M, B>
    where
        F: FnMut(A) -> OptionT<M, Either<A, B>>,
    {
        OptionT::new(M::tail_rec_m(seed, move |current| {
            M::map(step(current).value, |option| match option {
                None => Either::Right(None),
                Some(Either::Left(next)) => Either::Left(next),
                Some(Either::Right(done)) => Either::Right(Some(done)),
            })
        }))
    }
}

impl<M: Monad> Monad for OptionTInstance<M> {}
