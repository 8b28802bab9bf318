//! Property-based tests for FlatMap and Monad laws.
//!
//! Besides the algebraic laws, every instance runs a `tail_rec_m` loop of
//! at least 100,000 iterations to confirm that it does not grow the native
//! call stack.

#[macro_use]
mod common;

use lawful::control::Either;
use lawful::data::{NonEmptyVec, NonEmptyVecInstance, OptionT, OptionTInstance};
use lawful::laws::{FlatMapLaws, MonadLaws};
use lawful::typeclass::{
    EitherInstance, FlatMap, Functor, Identity, IdentityInstance, OptionInstance, PairInstance,
    ResultInstance, VecInstance,
};
use proptest::prelude::*;
use rstest::rstest;

fn either_strategy() -> impl Strategy<Value = Either<u8, i32>> {
    prop_oneof![
        any::<u8>().prop_map(Either::<u8, i32>::Left),
        any::<i32>().prop_map(Either::<u8, i32>::Right),
    ]
}

fn non_empty_vec_strategy() -> impl Strategy<Value = NonEmptyVec<i32>> {
    (any::<i32>(), prop::collection::vec(any::<i32>(), 0..3))
        .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
}

fn option_t_strategy() -> impl Strategy<Value = OptionT<VecInstance, i32>> {
    prop::collection::vec(any::<Option<i32>>(), 0..3).prop_map(OptionT::<VecInstance, i32>::new)
}

// =============================================================================
// Algebraic laws
// =============================================================================

monad_law_suite!(option, OptionInstance, any::<Option<i32>>(), |n: i32| {
    if n % 2 == 0 { Some(n / 2) } else { None }
});

monad_law_suite!(
    result,
    ResultInstance<String>,
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,4}"),
    |n: i32| if n > 0 { Ok(n - 1) } else { Err(format!("{n} is not positive")) }
);

monad_law_suite!(vec, VecInstance, prop::collection::vec(any::<i32>(), 0..4), |n: i32| {
    vec![n, n.wrapping_add(1)]
});

monad_law_suite!(identity, IdentityInstance, any::<i32>().prop_map(Identity), |n: i32| {
    Identity(n.wrapping_mul(2))
});

monad_law_suite!(either, EitherInstance<u8>, either_strategy(), |n: i32| {
    if n % 3 == 0 { Either::Left(7_u8) } else { Either::Right(n / 3) }
});

monad_law_suite!(pair, PairInstance<String>, ("[a-z]{0,3}", any::<i32>()), |n: i32| {
    (format!("{n};"), n.wrapping_add(1))
});

monad_law_suite!(non_empty_vec, NonEmptyVecInstance, non_empty_vec_strategy(), |n: i32| {
    NonEmptyVec::new(n, vec![n.wrapping_mul(2)])
});

monad_law_suite!(option_t_over_vec, OptionTInstance<VecInstance>, option_t_strategy(), |n: i32| {
    OptionT::<VecInstance, i32>::new(vec![Some(n), None])
});

// =============================================================================
// Stack safety
// =============================================================================

const ITERATIONS: usize = 100_000;

#[rstest]
fn option_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<OptionInstance>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn result_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<ResultInstance<String>>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn vec_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<VecInstance>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn identity_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<IdentityInstance>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn either_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<EitherInstance<u8>>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn pair_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<PairInstance<String>>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn non_empty_vec_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<NonEmptyVecInstance>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

#[rstest]
fn option_t_tail_rec_m_is_stack_safe() {
    assert!(MonadLaws::<OptionTInstance<IdentityInstance>>::tail_rec_m_stack_safety(ITERATIONS).holds());
}

// =============================================================================
// Branching recursion
// =============================================================================

/// A binary tree of depth 16 explored by `tail_rec_m` lists its leaves in
/// the order of the equivalent `flat_map` recursion.
#[rstest]
fn vec_tail_rec_m_enumerates_branches_in_order() {
    let leaves = VecInstance::tail_rec_m((0_u32, 0_u32), |(depth, path)| {
        if depth == 16 {
            vec![Either::Right(path)]
        } else {
            vec![Either::Left((depth + 1, path << 1)), Either::Left((depth + 1, (path << 1) | 1))]
        }
    });
    assert_eq!(leaves.len(), 1 << 16);
    assert!(leaves.windows(2).all(|pair| pair[0] < pair[1]));
}

#[rstest]
fn option_tail_rec_m_short_circuits_on_none() {
    let mut calls = 0;
    let result: Option<u32> = OptionInstance::tail_rec_m(0_u32, |n| {
        calls += 1;
        if n == 10 { None } else { Some(Either::Left(n + 1)) }
    });
    assert_eq!(result, None);
    assert_eq!(calls, 11);
}

#[rstest]
fn pair_tail_rec_m_combines_every_step_log() {
    let (log, total) = PairInstance::<Vec<u32>>::tail_rec_m(0_u32, |n| {
        (vec![n], if n < 4 { Either::Left(n + 1) } else { Either::Right(n * 10) })
    });
    assert_eq!(log, vec![0, 1, 2, 3, 4]);
    assert_eq!(total, 40);
}

#[rstest]
fn flat_map_and_map_agree_for_vec() {
    let values = vec![1, 2, 3];
    assert_eq!(
        VecInstance::flat_map(values.clone(), |n| vec![n + 1]),
        VecInstance::map(values, |n| n + 1)
    );
}
