//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>`
//! directly. Instead, each constructor is represented by a zero-sized
//! *instance marker* implementing [`TypeConstructor`], whose generic
//! associated type `Applied<A>` names the constructor applied to `A`:
//!
//! | Marker                 | `Applied<A>`   |
//! |------------------------|----------------|
//! | `OptionInstance`       | `Option<A>`    |
//! | `ResultInstance<E>`    | `Result<A, E>` |
//! | `VecInstance`          | `Vec<A>`       |
//! | `IdentityInstance`     | `Identity<A>`  |
//!
//! Capability traits (`Functor`, `Monad`, `Comonad`, ...) are implemented on
//! the markers. Because a marker is a type and not a value, composite
//! instances delegate to their components simply by naming them as type
//! parameters: `OptionTInstance<VecInstance>` is the transformer stacked on
//! lists.
//!
//! # Example
//!
//! ```rust
//! use lawful::typeclass::{Applied, Functor, OptionInstance, TypeConstructor};
//!
//! fn double_all<K: Functor>(container: Applied<K, i32>) -> Applied<K, i32> {
//!     K::map(container, |value| value * 2)
//! }
//!
//! assert_eq!(double_all::<OptionInstance>(Some(21)), Some(42));
//! ```

/// A type constructor, represented by its instance marker.
///
/// # Laws
///
/// Implementors are stateless: they carry no data and every value of the
/// marker is interchangeable. All markers in this crate are zero-sized,
/// `Copy` and `Default`.
///
/// # Example
///
/// ```rust
/// use lawful::typeclass::{TypeConstructor, VecInstance};
///
/// let strings: <VecInstance as TypeConstructor>::Applied<&str> = vec!["a"];
/// assert_eq!(strings.len(), 1);
/// ```
pub trait TypeConstructor {
    /// The constructor applied to `A`.
    ///
    /// For `OptionInstance`, `Applied<i32>` is `Option<i32>`.
    type Applied<A>;
}

/// Shorthand for `<K as TypeConstructor>::Applied<A>`.
pub type Applied<K, A> = <K as TypeConstructor>::Applied<A>;
