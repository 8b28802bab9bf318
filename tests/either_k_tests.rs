//! Tests for `EitherK`, the sum of two type constructors.

use lawful::control::Either;
use lawful::data::{EitherK, EitherKInstance, NonEmptyVec, NonEmptyVecInstance};
use lawful::typeclass::{
    CoflatMap, CoflatMapSyntax, Comonad, Functor, FunctorSyntax, Identity, IdentityInstance,
    OptionInstance, PairInstance, VecInstance,
};
use rstest::rstest;

type Source<A> = EitherK<IdentityInstance, PairInstance<&'static str>, A>;
type SourceInstance = EitherKInstance<IdentityInstance, PairInstance<&'static str>>;

#[rstest]
fn map_forwards_to_the_present_side() {
    let list: EitherK<OptionInstance, VecInstance, i32> = EitherK::right(vec![1, 2]);
    let mapped = EitherKInstance::<OptionInstance, VecInstance>::map(list, |n| n + 1);
    assert_eq!(mapped, EitherK::right(vec![2, 3]));

    let missing: EitherK<OptionInstance, VecInstance, i32> = EitherK::left(None);
    assert_eq!(missing.fmap(|n| n + 1), EitherK::left(None));
}

#[rstest]
fn coflat_map_sees_the_whole_side() {
    let located: Source<i32> = EitherK::right(("eu-west", 40));
    let described = SourceInstance::coflat_map(located, |context: Source<i32>| {
        context.fold(|local| format!("local {}", local.0), |(host, n)| format!("{host}:{n}"))
    });
    assert_eq!(described, EitherK::right(("eu-west", "eu-west:40".to_string())));
}

#[rstest]
fn extract_reads_either_side() {
    assert_eq!(SourceInstance::extract(Source::left(Identity(5))), 5);
    assert_eq!(SourceInstance::extract(Source::right(("host", 6))), 6);
}

#[rstest]
fn coflatten_then_extract_is_identity_on_non_empty_vec_side() {
    type Mixed<A> = EitherK<IdentityInstance, NonEmptyVecInstance, A>;
    let original: Mixed<i32> = EitherK::right(NonEmptyVec::new(1, vec![2, 3]));
    let nested = original.clone().coflatten();
    assert_eq!(EitherKInstance::<IdentityInstance, NonEmptyVecInstance>::extract(nested), original);
}

#[rstest]
fn swap_and_into_either() {
    let located: Source<u8> = EitherK::right(("host", 1));
    assert!(located.is_right());
    let swapped = located.clone().swap();
    assert!(swapped.is_left());
    assert_eq!(located.into_either(), Either::Right(("host", 1)));
}
