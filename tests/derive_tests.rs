//! Tests for `#[derive(Semigroup, Monoid, Group)]`.
//!
//! The derives combine field by field, so each derived instance must pass
//! the same law suites as the hand-written ones.

use lawful::kernel_law_tests;
use lawful::laws::GroupLaws;
use lawful::typeclass::{Group, Max, Min, Monoid, Semigroup, Sum};
use lawful::{Group, Monoid, Semigroup};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

/// Named fields of different algebras.
#[derive(Debug, Clone, PartialEq, Semigroup, Monoid)]
struct Stats {
    count: Sum<u32>,
    highest: Max<i64>,
    lowest: Min<i64>,
    tags: Vec<String>,
}

/// Tuple struct that is a group.
#[derive(Debug, Clone, Copy, PartialEq, Semigroup, Monoid, Group)]
struct Offset(Sum<i32>, Sum<i64>);

/// Unit struct: the trivial algebra.
#[derive(Debug, Clone, Copy, PartialEq, Semigroup, Monoid, Group)]
struct Nothing;

/// Generic struct: the instance exists whenever the field has one.
#[derive(Debug, Clone, PartialEq, Semigroup, Monoid)]
struct Labelled<T> {
    label: String,
    value: T,
}

fn stats(count: u32, value: i64, tag: &str) -> Stats {
    Stats {
        count: Sum::new(count),
        highest: Max::new(value),
        lowest: Min::new(value),
        tags: vec![tag.to_string()],
    }
}

// =============================================================================
// Named fields
// =============================================================================

#[rstest]
fn named_fields_combine_pairwise() {
    let combined = stats(1, 10, "a").combine(stats(2, -4, "b"));
    assert_eq!(
        combined,
        Stats {
            count: Sum::new(3),
            highest: Max::new(10),
            lowest: Min::new(-4),
            tags: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[rstest]
fn named_fields_empty_is_fieldwise() {
    let empty = Stats::empty();
    assert_eq!(empty.count, Sum::new(0));
    assert_eq!(empty.highest, Max::new(i64::MIN));
    assert_eq!(empty.lowest, Min::new(i64::MAX));
    assert!(empty.tags.is_empty());
    assert_eq!(stats(5, 1, "x").combine(Stats::empty()), stats(5, 1, "x"));
}

#[rstest]
fn combine_all_folds_every_record() {
    let total = Stats::combine_all(vec![stats(1, 3, "p"), stats(1, 9, "q"), stats(1, -2, "r")]);
    assert_eq!(total.count, Sum::new(3));
    assert_eq!(total.highest, Max::new(9));
    assert_eq!(total.lowest, Min::new(-2));
    assert_eq!(total.tags.len(), 3);
}

// =============================================================================
// Tuple, unit and generic structs
// =============================================================================

#[rstest]
fn tuple_struct_inverse_is_fieldwise() {
    let offset = Offset(Sum::new(2), Sum::new(-5));
    assert_eq!(offset.inverse(), Offset(Sum::new(-2), Sum::new(5)));
    assert_eq!(offset.remove(offset), Offset::empty());
    assert_eq!(offset.combine_n_signed(i8::MIN), Offset(Sum::new(-256), Sum::new(640)));
}

#[rstest]
fn unit_struct_is_trivial() {
    assert_eq!(Nothing.combine(Nothing), Nothing);
    assert_eq!(Nothing::empty(), Nothing);
    assert_eq!(Nothing.inverse(), Nothing);
}

#[rstest]
fn generic_struct_uses_field_instance() {
    let left = Labelled { label: "x".to_string(), value: Sum::new(1.5) };
    let right = Labelled { label: "y".to_string(), value: Sum::new(2.0) };
    let joined = left.combine(right);
    assert_eq!(joined.label, "xy");
    assert_eq!(joined.value, Sum::new(3.5));
    assert_eq!(Labelled::<Vec<u8>>::empty(), Labelled { label: String::new(), value: Vec::new() });
}

// =============================================================================
// Laws
// =============================================================================

kernel_law_tests! {
    derived_offset: Offset => Group [
        Offset(Sum::new(0), Sum::new(0)),
        Offset(Sum::new(3), Sum::new(-1)),
        Offset(Sum::new(-40), Sum::new(7)),
    ];
    derived_stats: Stats => Monoid [stats(0, 0, ""), stats(4, 100, "b"), stats(2, -8, "c")];
    derived_nothing: Nothing => Group [Nothing];
}

proptest! {
    /// Derived signed repetition agrees with repeated combination.
    #[test]
    fn prop_offset_combine_n_signed(a in -1000_i32..1000, b in -1000_i64..1000, count in any::<i8>()) {
        let law = GroupLaws::combine_n_signed_matches_repeat(Offset(Sum::new(a), Sum::new(b)), count);
        prop_assert_eq!(law.lhs, law.rhs);
    }
}
