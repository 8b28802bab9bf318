//! Shared law suites for the integration tests.
//!
//! Each macro stamps out one `proptest!` block per instance, naming every
//! test after the instance and the law it checks.

#![allow(unused_macros)]

/// Functor and Apply laws over `i32` values.
macro_rules! functor_law_suite {
    ($name:ident, $instance:ty, $strategy:expr) => {
        paste::paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _covariant_identity>](fa in $strategy) {
                    let law = FunctorLaws::<$instance>::covariant_identity(fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _covariant_composition>](fa in $strategy) {
                    let law = FunctorLaws::<$instance>::covariant_composition(
                        fa,
                        |n: i32| n.wrapping_add(1),
                        |n: i32| n.wrapping_mul(3),
                    );
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _replace_consistency>](fa in $strategy) {
                    let law = FunctorLaws::<$instance>::replace_consistency(fa, 'x');
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _map2_product_consistency>](fa in $strategy, fb in $strategy) {
                    let law = ApplyLaws::<$instance>::map2_product_consistency(
                        fa,
                        fb,
                        |a: i32, b: i32| a.wrapping_sub(b),
                    );
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _product_left_consistency>](fa in $strategy, fb in $strategy) {
                    let law = ApplyLaws::<$instance>::product_left_consistency(fa, fb);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _product_right_consistency>](fa in $strategy, fb in $strategy) {
                    let law = ApplyLaws::<$instance>::product_right_consistency(fa, fb);
                    prop_assert_eq!(law.lhs, law.rhs);
                }
            }
        }
    };
}

/// FlatMap and Monad laws over `i32` values, with `$f` as the Kleisli arrow.
macro_rules! monad_law_suite {
    ($name:ident, $instance:ty, $strategy:expr, $f:expr) => {
        paste::paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _flat_map_associativity>](fa in $strategy) {
                    let law = FlatMapLaws::<$instance>::associativity(fa, $f, $f);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _flat_map_consistent_apply>](fa in $strategy, fb in $strategy) {
                    let ff = <$instance as Functor>::map(fb, |n: i32| move |m: i32| n.wrapping_add(m));
                    let law = FlatMapLaws::<$instance>::flat_map_consistent_apply(ff, fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _mproduct_consistency>](fa in $strategy) {
                    let law = FlatMapLaws::<$instance>::mproduct_consistency(fa, $f);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _tail_rec_m_consistent_flat_map>](seed in any::<i32>(), count in any::<u8>()) {
                    let law = FlatMapLaws::<$instance>::tail_rec_m_consistent_flat_map(seed, count, $f);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _left_identity>](value in any::<i32>()) {
                    let law = MonadLaws::<$instance>::left_identity(value, $f);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _right_identity>](fa in $strategy) {
                    let law = MonadLaws::<$instance>::right_identity(fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _map_flat_map_coherence>](fa in $strategy) {
                    let law = MonadLaws::<$instance>::map_flat_map_coherence(fa, |n: i32| n.wrapping_neg());
                    prop_assert_eq!(law.lhs, law.rhs);
                }
            }
        }
    };
}

/// CoflatMap laws, with `$f` and `$g` reading a whole context into an `i32`.
macro_rules! coflat_map_law_suite {
    ($name:ident, $instance:ty, $strategy:expr, $f:expr, $g:expr) => {
        paste::paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _coflat_map_associativity>](fa in $strategy) {
                    let law = CoflatMapLaws::<$instance>::coflat_map_associativity(fa, $f, $g);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _coflatten_through_map>](fa in $strategy) {
                    let law = CoflatMapLaws::<$instance>::coflatten_through_map(fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _coflatten_coherence>](fa in $strategy) {
                    let law = CoflatMapLaws::<$instance>::coflatten_coherence(fa, $f);
                    prop_assert_eq!(law.lhs, law.rhs);
                }
            }
        }
    };
}

/// Comonad laws on top of [`coflat_map_law_suite`].
macro_rules! comonad_law_suite {
    ($name:ident, $instance:ty, $strategy:expr, $f:expr, $g:expr) => {
        coflat_map_law_suite!($name, $instance, $strategy, $f, $g);

        paste::paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _extract_coflatten_identity>](fa in $strategy) {
                    let law = ComonadLaws::<$instance>::extract_coflatten_identity(fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _map_coflatten_identity>](fa in $strategy) {
                    let law = ComonadLaws::<$instance>::map_coflatten_identity(fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _coflat_map_left_identity>](fa in $strategy) {
                    let law = ComonadLaws::<$instance>::coflat_map_left_identity(fa);
                    prop_assert_eq!(law.lhs, law.rhs);
                }

                #[test]
                fn [<prop_ $name _coflat_map_right_identity>](fa in $strategy) {
                    let law = ComonadLaws::<$instance>::coflat_map_right_identity(fa, $f);
                    prop_assert_eq!(law.lhs, law.rhs);
                }
            }
        }
    };
}
