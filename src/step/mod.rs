//! Step builders: flat syntax for chains of dependent computations.
//!
//! A chain of nested `flat_map` calls that needs every intermediate value
//! reads inside out. A [`Step`] keeps the values in a tuple instead:
//!
//! ```rust
//! use fugue::step::begin;
//!
//! fn parse(input: &str) -> Option<i32> {
//!     input.parse().ok()
//! }
//!
//! let area = begin(parse("3"))
//!     .then(|_| parse("4"))
//!     .filter(|width, height| width * height < 100)
//!     .yields(|width, height| width * height);
//! assert_eq!(area, Some(12));
//! ```
//!
//! Every transition consumes the builder:
//!
//! - `then(f)`: `f` receives references to all values so far and returns the
//!   next sum value; its successful value is appended (up to six values)
//! - `then_with(supplier)`: as `then`, ignoring the values so far
//! - `filter_or(predicate, on_failure)`: records `on_failure()` as the
//!   failure when `predicate` rejects the values; `filter(predicate)` is
//!   the `Option` shorthand
//! - `yields(f)`: leaves the builder, returning `f(values..)` wrapped in the
//!   family's sum type, or the first failure
//!
//! Once a failure is recorded, no later function is invoked and the first
//! failure is what `yields` returns.
//!
//! The same builder works for [`Option`], [`Either`](crate::control::Either)
//! and [`Try`](crate::control::Try), selected by a [`Family`] marker.

mod chain;
mod family;

pub use chain::Step;
pub use family::{EitherFamily, Family, OptionFamily, TryFamily};

use crate::control::{Either, Try};

/// A step builder over `Option`.
pub type OptionalStep<T> = Step<OptionFamily, T>;

/// A step builder over `Either<L, _>`.
pub type EitherStep<L, T> = Step<EitherFamily<L>, T>;

/// A step builder over `Try`.
pub type TryStep<T> = Step<TryFamily, T>;

/// Sum values a step chain can start from.
pub trait Begin: Sized {
    /// The family of the sum type.
    type Family: Family;

    /// The successful value type.
    type Value;

    /// Starts a step chain from this value.
    fn begin(self) -> Step<Self::Family, (Self::Value,)>;
}

impl<A> Begin for Option<A> {
    type Family = OptionFamily;
    type Value = A;

    fn begin(self) -> OptionalStep<(A,)> {
        Step::new(self)
    }
}

impl<L, R> Begin for Either<L, R> {
    type Family = EitherFamily<L>;
    type Value = R;

    fn begin(self) -> EitherStep<L, (R,)> {
        Step::new(self)
    }
}

impl<A> Begin for Try<A> {
    type Family = TryFamily;
    type Value = A;

    fn begin(self) -> TryStep<(A,)> {
        Step::new(self)
    }
}

/// Starts a step chain from an `Option`, `Either` or `Try`.
///
/// # Examples
///
/// ```rust
/// use fugue::control::Either;
/// use fugue::step::begin;
///
/// let checked: Either<String, i32> = begin(Either::Right(10))
///     .then(|n| {
///         if *n > 0 {
///             Either::Right(100 / n)
///         } else {
///             Either::Left("division by zero".to_string())
///         }
///     })
///     .yields(|n, quotient| n + quotient);
/// assert_eq!(checked, Either::Right(20));
/// ```
pub fn begin<M: Begin>(value: M) -> Step<M::Family, (M::Value,)> {
    value.begin()
}
