//! Deferred, stack-safe evaluation.
//!
//! `Eval<A>` describes a computation producing an `A` without running it.
//! Running happens in [`Eval::value`], which interprets the description in
//! a loop with an explicit continuation stack, so `flat_map` chains of any
//! depth evaluate in constant native stack space whether they are nested
//! to the left (`m.flat_map(f).flat_map(g)`) or to the right
//! (`m.flat_map(|x| f(x).flat_map(g))`).
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Eval;
//!
//! fn count_down(remaining: u64) -> Eval<u64> {
//!     if remaining == 0 {
//!         Eval::now(0)
//!     } else {
//!         Eval::defer(move || count_down(remaining - 1))
//!     }
//! }
//!
//! assert_eq!(count_down(1_000_000).value(), 0);
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use super::either::Either;

type Erased = Box<dyn Any>;
type Continuation = Box<dyn FnOnce(Erased) -> Node>;

/// Untyped program tree interpreted by [`Eval::value`].
///
/// The type parameter of the surrounding `Eval` guarantees that every
/// value flowing into a continuation has the type that continuation
/// expects.
enum Node {
    Now(Erased),
    Later(Box<dyn FnOnce() -> Erased>),
    Defer(Box<dyn FnOnce() -> Node>),
    Bind(Box<Node>, Continuation),
}

impl Node {
    /// A node owning nothing, left behind when a node is moved out of an `Eval`.
    fn vacant() -> Self {
        Self::Now(Box::new(()))
    }
}

fn downcast<A: 'static>(erased: Erased) -> A {
    match erased.downcast::<A>() {
        Ok(value) => *value,
        Err(_) => unreachable!("Eval produced a value of an unexpected type"),
    }
}

/// A lazily described computation with stack-safe `flat_map`.
///
/// # Type Parameters
///
/// * `A` - The type of the result. Must be `'static` because intermediate
///   steps are stored as boxed closures.
///
/// # Laws
///
/// - **Left Identity**: `Eval::now(a).flat_map(f).value() == f(a).value()`
/// - **Right Identity**: `m.flat_map(Eval::now).value() == m.value()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).value() == m.flat_map(|x| f(x).flat_map(g)).value()`
///
/// # Note
///
/// `Eval` has no instance marker: the `'static` requirement of its boxed
/// steps would propagate into every generic capability signature.
/// `map`, `flat_map` and `tail_rec_m` are provided as inherent methods.
pub struct Eval<A> {
    node: Node,
    marker: PhantomData<fn() -> A>,
}

impl<A: 'static> Eval<A> {
    const fn from_node(node: Node) -> Self {
        Self {
            node,
            marker: PhantomData,
        }
    }

    /// An already-computed value.
    #[inline]
    pub fn now(value: A) -> Self {
        Self::from_node(Node::Now(Box::new(value)))
    }

    /// A value computed by `thunk` when the evaluation is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Eval;
    /// use std::rc::Rc;
    /// use std::cell::Cell;
    ///
    /// let ran = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&ran);
    /// let eval = Eval::later(move || {
    ///     flag.set(true);
    ///     10
    /// });
    /// assert!(!ran.get());
    /// assert_eq!(eval.value(), 10);
    /// assert!(ran.get());
    /// ```
    #[inline]
    pub fn later<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::from_node(Node::Later(Box::new(move || Box::new(thunk()) as Erased)))
    }

    /// An evaluation produced by `thunk` when the evaluation is run.
    #[inline]
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::from_node(Node::Defer(Box::new(move || thunk().take_node())))
    }

    /// Sequences a dependent evaluation.
    pub fn flat_map<B, F>(mut self, function: F) -> Eval<B>
    where
        B: 'static,
        F: FnOnce(A) -> Eval<B> + 'static,
    {
        let continuation: Continuation = Box::new(move |erased| function(downcast::<A>(erased)).take_node());
        Eval::from_node(Node::Bind(Box::new(self.take_node()), continuation))
    }

    /// Transforms the eventual result.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Eval<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.flat_map(move |value| Eval::now(function(value)))
    }

    /// Repeats `step` from `seed` until it yields `Either::Right`.
    ///
    /// Each iteration is a fresh `flat_map` node, interpreted by the same
    /// loop as everything else, so the iteration count is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::{Either, Eval};
    ///
    /// let total = Eval::tail_rec_m((0_u64, 0_u64), |(index, sum)| {
    ///     Eval::now(if index == 100_000 {
    ///         Either::Right(sum)
    ///     } else {
    ///         Either::Left((index + 1, sum + index))
    ///     })
    /// });
    /// assert_eq!(total.value(), 4_999_950_000);
    /// ```
    pub fn tail_rec_m<S, F>(seed: S, mut step: F) -> Self
    where
        S: 'static,
        F: FnMut(S) -> Eval<Either<S, A>> + 'static,
    {
        step(seed).flat_map(move |outcome| match outcome {
            Either::Left(next) => Self::tail_rec_m(next, step),
            Either::Right(done) => Self::now(done),
        })
    }

    /// Runs the computation to completion.
    pub fn value(mut self) -> A {
        let mut current = self.take_node();
        let mut pending: Vec<Continuation> = Vec::new();
        let mut steps: u64 = 0;

        let result = loop {
            steps += 1;
            let produced = match current {
                Node::Bind(source, continuation) => {
                    pending.push(continuation);
                    current = *source;
                    continue;
                }
                Node::Defer(thunk) => {
                    current = thunk();
                    continue;
                }
                Node::Now(value) => value,
                Node::Later(thunk) => thunk(),
            };
            match pending.pop() {
                Some(continuation) => current = continuation(produced),
                None => break produced,
            }
        };

        trace_event!(steps = steps; "eval finished");
        downcast::<A>(result)
    }
}

impl<A> Eval<A> {
    fn take_node(&mut self) -> Node {
        mem::replace(&mut self.node, Node::vacant())
    }
}

/// Unforced `Bind` chains are dismantled in a loop; the derived drop would
/// recurse once per `flat_map`.
impl<A> Drop for Eval<A> {
    fn drop(&mut self) {
        let mut sources = match self.take_node() {
            Node::Bind(source, _) => vec![*source],
            _ => return,
        };
        while let Some(node) = sources.pop() {
            if let Node::Bind(source, _) = node {
                sources.push(*source);
            }
        }
    }
}

impl<A> fmt::Debug for Eval<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.node {
            Node::Now(_) => "Now",
            Node::Later(_) => "Later",
            Node::Defer(_) => "Defer",
            Node::Bind(..) => "Bind",
        };
        write!(formatter, "Eval::{state}(<deferred>)")
    }
}
