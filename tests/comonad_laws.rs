//! Property-based tests for CoflatMap and Comonad laws.
//!
//! `Option` and `Vec` can be empty, so they only get the `CoflatMap`
//! laws. Every context that always holds a value also gets the `Comonad`
//! laws.

#[macro_use]
mod common;

use lawful::data::{EitherK, EitherKInstance, NonEmptyVec, NonEmptyVecInstance};
use lawful::laws::{CoflatMapLaws, ComonadLaws};
use lawful::typeclass::{Identity, IdentityInstance, OptionInstance, PairInstance, VecInstance};
use proptest::prelude::*;

fn non_empty_vec_strategy() -> impl Strategy<Value = NonEmptyVec<i32>> {
    (any::<i32>(), prop::collection::vec(any::<i32>(), 0..4))
        .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
}

type Context = EitherK<IdentityInstance, NonEmptyVecInstance, i32>;

fn either_k_strategy() -> impl Strategy<Value = Context> {
    prop_oneof![
        any::<i32>().prop_map(|value| Context::Left(Identity(value))),
        non_empty_vec_strategy().prop_map(Context::Right),
    ]
}

fn sum_all(values: &[i32]) -> i32 {
    values.iter().fold(0_i32, |total, value| total.wrapping_add(*value))
}

// =============================================================================
// CoflatMap only
// =============================================================================

coflat_map_law_suite!(
    option,
    OptionInstance,
    any::<Option<i32>>(),
    |context: Option<i32>| context.map_or(-1, |value| value.wrapping_mul(2)),
    |context: Option<i32>| context.unwrap_or_default()
);

coflat_map_law_suite!(
    vec,
    VecInstance,
    prop::collection::vec(any::<i32>(), 0..5),
    |context: Vec<i32>| sum_all(&context),
    |context: Vec<i32>| i32::try_from(context.len()).unwrap_or(i32::MAX)
);

// =============================================================================
// Comonads
// =============================================================================

comonad_law_suite!(
    identity,
    IdentityInstance,
    any::<i32>().prop_map(Identity),
    |context: Identity<i32>| context.0.wrapping_add(1),
    |context: Identity<i32>| context.0.wrapping_mul(3)
);

comonad_law_suite!(
    pair,
    PairInstance<u8>,
    (any::<u8>(), any::<i32>()),
    |context: (u8, i32)| context.1.wrapping_add(i32::from(context.0)),
    |context: (u8, i32)| context.1.wrapping_sub(1)
);

comonad_law_suite!(
    non_empty_vec,
    NonEmptyVecInstance,
    non_empty_vec_strategy(),
    |context: NonEmptyVec<i32>| sum_all(&context.clone().into_vec()),
    |context: NonEmptyVec<i32>| *context.last()
);

comonad_law_suite!(
    either_k,
    EitherKInstance<IdentityInstance, NonEmptyVecInstance>,
    either_k_strategy(),
    |context: Context| {
        context.fold(
            |identity: Identity<i32>| identity.0,
            |values: NonEmptyVec<i32>| sum_all(&values.into_vec()),
        )
    },
    |context: Context| i32::from(context.is_left())
);
