//! `Cokleisli` - functions out of a context.
//!
//! A `Cokleisli<F, A, B>` wraps `F[A] -> B`: it reads a whole context and
//! produces a plain value. Two such arrows compose through `coflat_map`,
//! which lets the second arrow see the first one's result at every
//! position. With a [`Comonad`], `extract` is the identity arrow.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::Cokleisli;
//! use lawful::typeclass::VecInstance;
//!
//! // Sum of the remaining elements, then the largest such sum.
//! let suffix_sum = Cokleisli::<VecInstance, i32, i32>::new(|rest: Vec<i32>| rest.iter().sum());
//! let largest = Cokleisli::<VecInstance, i32, i32>::new(|sums: Vec<i32>| sums.into_iter().max().unwrap_or(0));
//!
//! let mut pipeline = suffix_sum.and_then(largest);
//! assert_eq!(pipeline.run(vec![3, -1, 4]), 6);
//! ```

use std::fmt;

use crate::typeclass::{Applied, CoflatMap, Comonad, Functor, TypeConstructor};

/// A function from `F[A]` to `B`.
pub struct Cokleisli<F: TypeConstructor, A, B> {
    function: Box<dyn FnMut(Applied<F, A>) -> B>,
}

impl<F, A, B> Cokleisli<F, A, B>
where
    F: TypeConstructor + 'static,
    A: 'static,
    B: 'static,
{
    /// Wraps a function.
    pub fn new<Function>(function: Function) -> Self
    where
        Function: FnMut(Applied<F, A>) -> B + 'static,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Applies the arrow to a context.
    pub fn run(&mut self, context: Applied<F, A>) -> B {
        (self.function)(context)
    }

    /// Runs `self` at every position, then `next` over the results.
    pub fn and_then<C: 'static>(self, next: Cokleisli<F, B, C>) -> Cokleisli<F, A, C>
    where
        F: CoflatMap,
        A: Clone,
    {
        let mut first = self.function;
        let mut second = next.function;
        Cokleisli::new(move |context| second(F::coflat_map(context, &mut first)))
    }

    /// Runs `before` at every position, then `self` over the results.
    pub fn compose<Z: Clone + 'static>(self, before: Cokleisli<F, Z, A>) -> Cokleisli<F, Z, B>
    where
        F: CoflatMap,
    {
        before.and_then(self)
    }

    /// Post-processes the result.
    pub fn map<C, Function>(self, mut after: Function) -> Cokleisli<F, A, C>
    where
        C: 'static,
        Function: FnMut(B) -> C + 'static,
    {
        let mut function = self.function;
        Cokleisli::new(move |context| after(function(context)))
    }

    /// Pre-processes every element of the context.
    pub fn lmap<Z, Function>(self, mut before: Function) -> Cokleisli<F, Z, B>
    where
        F: Functor,
        Z: 'static,
        Function: FnMut(Z) -> A + 'static,
    {
        let mut function = self.function;
        Cokleisli::new(move |context| function(F::map(context, &mut before)))
    }
}

impl<F, A> Cokleisli<F, A, A>
where
    F: Comonad + 'static,
    A: 'static,
{
    /// The arrow that returns the focused value.
    pub fn identity() -> Self {
        Self::new(F::extract)
    }
}

impl<F: TypeConstructor, A, B> fmt::Debug for Cokleisli<F, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Cokleisli(<function>)")
    }
}
