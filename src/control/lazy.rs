//! Lazy evaluation with memoization.
//!
//! `Lazy<T, F>` runs its initializer at most once, on first access, and
//! hands out shared references to the cached value afterwards. The
//! deferred `product_*_eval` combinators on [`FlatMap`](crate::typeclass::FlatMap)
//! use it to force an [`Eval`](super::Eval) exactly once no matter how many
//! times their continuation runs.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Lazy;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Cell, OnceCell};
use std::fmt;

/// A lazily evaluated value with memoization.
///
/// # Panics
///
/// If the initializer panics the value is poisoned: the initializer has
/// been consumed and no value was stored, so later calls to
/// [`force`](Self::force) panic as well.
///
/// # Thread Safety
///
/// Not thread-safe; use `std::sync::LazyLock` for shared access.
pub struct Lazy<T, F = fn() -> T> {
    value: OnceCell<T>,
    initializer: Cell<Option<F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value. `initializer` is not called yet.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            value: OnceCell::new(),
            initializer: Cell::new(Some(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// Panics if a previous initialization panicked.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| match self.initializer.take() {
            Some(initializer) => initializer(),
            None => panic!("Lazy instance has been poisoned"),
        })
    }

    /// Forces evaluation and returns the owned value.
    ///
    /// # Panics
    ///
    /// Panics if a previous initialization panicked.
    pub fn into_inner(self) -> T {
        let Self { value, initializer } = self;
        match value.into_inner() {
            Some(computed) => computed,
            None => match initializer.into_inner() {
                Some(initializer) => initializer(),
                None => panic!("Lazy instance has been poisoned"),
            },
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates an already-evaluated lazy value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Lazy;
    ///
    /// let ready: Lazy<i32> = Lazy::new_with_value(7);
    /// assert!(ready.is_initialized());
    /// ```
    pub fn new_with_value(value: T) -> Self {
        Self {
            value: OnceCell::from(value),
            initializer: Cell::new(None),
        }
    }

    /// Returns the cached value without forcing evaluation.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns `true` once the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None => formatter.write_str("Lazy(<uninit>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn force_runs_initializer_once() {
        let calls = Cell::new(0);
        let lazy = Lazy::new(|| {
            calls.set(calls.get() + 1);
            "value".to_string()
        });

        assert_eq!(lazy.force(), "value");
        assert_eq!(lazy.force(), "value");
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn is_initialized_tracks_forcing() {
        let lazy = Lazy::new(|| 3);
        assert!(!lazy.is_initialized());
        assert_eq!(lazy.get(), None);
        let _ = lazy.force();
        assert!(lazy.is_initialized());
        assert_eq!(lazy.get(), Some(&3));
    }

    #[rstest]
    fn into_inner_evaluates_pending_initializer() {
        let lazy = Lazy::new(|| vec![1, 2]);
        assert_eq!(lazy.into_inner(), vec![1, 2]);
    }

    #[rstest]
    fn debug_hides_pending_value() {
        let lazy = Lazy::new(|| 5);
        assert_eq!(format!("{lazy:?}"), "Lazy(<uninit>)");
        let _ = lazy.force();
        assert_eq!(format!("{lazy:?}"), "Lazy(5)");
    }

    #[rstest]
    fn panicking_initializer_poisons() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("boom"));
        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy.force()));
        assert!(first.is_err());
        let second = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy.force()));
        assert!(second.is_err());
    }
}
