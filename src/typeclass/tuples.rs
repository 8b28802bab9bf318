//! Product derivation for the kernel algebras.
//!
//! A tuple is a semigroup, monoid, group or commutative semigroup when every
//! component is, with every operation applied component-wise. The impls for
//! arities 2 through 6 are stamped out by one macro.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Group, Max, Monoid, Semigroup, Sum};
//!
//! let left = (Sum::new(1), String::from("a"), Max::new(3));
//! let right = (Sum::new(2), String::from("b"), Max::new(1));
//! assert_eq!(left.combine(right), (Sum::new(3), String::from("ab"), Max::new(3)));
//!
//! let empty: (Sum<i32>, String) = Monoid::empty();
//! assert_eq!(empty, (Sum::new(0), String::new()));
//!
//! assert_eq!((Sum::new(2), Sum::new(-5)).inverse(), (Sum::new(-2), Sum::new(5)));
//! ```

use super::commutative::CommutativeSemigroup;
use super::group::Group;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

macro_rules! tuple_algebra {
    ($($name:ident . $index:tt),+) => {
        impl<$($name: Semigroup),+> Semigroup for ($($name,)+) {
            fn combine(self, other: Self) -> Self {
                ($(self.$index.combine(other.$index),)+)
            }
        }

        impl<$($name: Monoid),+> Monoid for ($($name,)+) {
            fn empty() -> Self {
                ($($name::empty(),)+)
            }
        }

        impl<$($name: Group),+> Group for ($($name,)+) {
            fn inverse(self) -> Self {
                ($(self.$index.inverse(),)+)
            }
        }

        impl<$($name: CommutativeSemigroup),+> CommutativeSemigroup for ($($name,)+) {}
    };
}

tuple_algebra!(A.0, B.1);
tuple_algebra!(A.0, B.1, C.2);
tuple_algebra!(A.0, B.1, C.2, D.3);
tuple_algebra!(A.0, B.1, C.2, D.3, E.4);
tuple_algebra!(A.0, B.1, C.2, D.3, E.4, F.5);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{CommutativeGroup, Max, Min, Product, Sum};
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!((Sum<i32>, Sum<i64>): CommutativeGroup);
    assert_impl_all!((Sum<i32>, String, Max<u8>): Monoid);
    assert_not_impl_any!((Sum<i32>, String): CommutativeSemigroup, Group);

    #[rstest]
    fn six_tuple_combines_componentwise() {
        let left = (Sum::new(1), Product::new(2), Max::new(3), Min::new(4), vec![5], String::from("6"));
        let right = (Sum::new(10), Product::new(20), Max::new(1), Min::new(1), vec![50], String::from("60"));
        assert_eq!(
            left.combine(right),
            (Sum::new(11), Product::new(40), Max::new(3), Min::new(1), vec![5, 50], String::from("660"))
        );
    }

    #[rstest]
    fn pair_remove_is_componentwise() {
        let remaining = (Sum::new(5), Sum::new(1)).remove((Sum::new(2), Sum::new(4)));
        assert_eq!(remaining, (Sum::new(3), Sum::new(-3)));
    }

    #[rstest]
    fn pair_signed_repetition() {
        let repeated = (Sum::new(1_i64), Sum::new(-2_i64)).combine_n_signed(-3_i32);
        assert_eq!(repeated, (Sum::new(-3), Sum::new(6)));
    }
}
