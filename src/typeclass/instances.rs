//! Instance markers for standard-library containers.
//!
//! Each marker stands for one type constructor. Which capabilities a marker
//! has is decided by the trait impls found in the capability modules:
//!
//! | Marker               | Capabilities                               |
//! |----------------------|--------------------------------------------|
//! | [`OptionInstance`]   | `Monad`, `CoflatMap`                       |
//! | [`ResultInstance`]   | `Monad`                                    |
//! | [`VecInstance`]      | `Monad`, `CoflatMap`                       |
//! | [`EitherInstance`]   | `Monad` (right-biased)                     |
//! | [`PairInstance`]     | `Comonad`; `Monad` when `E: Monoid`        |

use super::TypeConstructor;
use crate::control::Either;

instance_marker! {
    /// Instance marker for `Option<A>`.
    OptionInstance
}

instance_marker! {
    /// Instance marker for `Vec<A>`.
    VecInstance
}

instance_marker! {
    /// Instance marker for `Result<A, E>`, fixed in the error type.
    ResultInstance<E>
}

instance_marker! {
    /// Instance marker for `Either<L, A>`, fixed in the left type.
    EitherInstance<L>
}

instance_marker! {
    /// Instance marker for the pair `(E, A)`, fixed in the first component.
    ///
    /// Read as a *writer*, `E` is a log combined by `flat_map`; read as an
    /// *environment*, `E` is context carried alongside the focus `A`.
    PairInstance<E>
}

impl TypeConstructor for OptionInstance {
    type Applied<A> = Option<A>;
}

impl TypeConstructor for VecInstance {
    type Applied<A> = Vec<A>;
}

impl<E> TypeConstructor for ResultInstance<E> {
    type Applied<A> = Result<A, E>;
}

impl<L> TypeConstructor for EitherInstance<L> {
    type Applied<A> = Either<L, A>;
}

impl<E> TypeConstructor for PairInstance<E> {
    type Applied<A> = (E, A);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(OptionInstance: Copy, Default, Send, Sync);
    assert_impl_all!(ResultInstance<std::rc::Rc<String>>: Copy, Default, Send, Sync);
    assert_impl_all!(PairInstance<std::cell::Cell<u8>>: Copy, Default, Send, Sync);

    #[rstest]
    fn generic_markers_debug_as_their_name() {
        assert_eq!(format!("{:?}", ResultInstance::<String>::new()), "ResultInstance");
        assert_eq!(format!("{:?}", EitherInstance::<u8>::default()), "EitherInstance");
    }
}
