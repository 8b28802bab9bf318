//! Test generators for the kernel law sets.

/// Generates one `#[test]` per line, checking a kernel law set on samples.
///
/// Each line names the test prefix, the carrier type, the law set
/// (`Semigroup`, `Monoid`, `Group` or `Commutative`) and a few sample
/// values. The generated test calls the law set's `check_samples` and
/// fails with the first violated law.
///
/// # Examples
///
/// ```rust
/// use lawful::kernel_law_tests;
/// use lawful::typeclass::{Max, Sum};
///
/// // Expands to `sum_i64_satisfies_group_laws` and
/// // `max_u8_satisfies_commutative_laws`.
/// kernel_law_tests! {
///     sum_i64: Sum<i64> => Group [Sum::new(0), Sum::new(3), Sum::new(-8)];
///     max_u8: Max<u8> => Commutative [Max::new(1), Max::new(200)];
/// }
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! kernel_law_tests {
    ($($name:ident : $carrier:ty => $laws:ident [$($sample:expr),+ $(,)?];)+) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$name _satisfies_ $laws:snake _laws>]() {
                    let samples: ::std::vec::Vec<$carrier> = ::std::vec![$($sample),+];
                    let outcome = $crate::laws::[<$laws Laws>]::<$carrier>::check_samples(&samples);
                    ::std::assert_eq!(outcome, ::std::result::Result::Ok(()));
                }
            )+
        }
    };
}
