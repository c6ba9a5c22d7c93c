//! Sum-type families the step builder can run over.

use std::marker::PhantomData;

use crate::control::{Either, Try};
use crate::error::TryError;

/// A sum-type constructor viewed as "value or failure".
///
/// `Of<T>` is the sum type holding a `T`, and `Failure` is what its
/// unsuccessful variant carries. The two conversions must be inverse.
pub trait Family {
    /// The sum type applied to `T`.
    type Of<T>;

    /// The payload of the unsuccessful variant.
    type Failure;

    /// Splits a sum value into its successful value or failure payload.
    fn into_result<T>(value: Self::Of<T>) -> Result<T, Self::Failure>;

    /// Rebuilds a sum value from a successful value or failure payload.
    fn from_result<T>(result: Result<T, Self::Failure>) -> Self::Of<T>;
}

/// [`Option`]; a failure carries nothing.
#[derive(Debug, Clone, Copy)]
pub enum OptionFamily {}

impl Family for OptionFamily {
    type Of<T> = Option<T>;
    type Failure = ();

    #[inline]
    fn into_result<T>(value: Option<T>) -> Result<T, ()> {
        value.ok_or(())
    }

    #[inline]
    fn from_result<T>(result: Result<T, ()>) -> Option<T> {
        result.ok()
    }
}

/// [`Either`] with left type `L`; a failure carries the `Left` value.
#[derive(Debug, Clone, Copy)]
pub struct EitherFamily<L>(PhantomData<fn() -> L>);

impl<L> Family for EitherFamily<L> {
    type Of<T> = Either<L, T>;
    type Failure = L;

    #[inline]
    fn into_result<T>(value: Either<L, T>) -> Result<T, L> {
        value.into()
    }

    #[inline]
    fn from_result<T>(result: Result<T, L>) -> Either<L, T> {
        result.into()
    }
}

/// [`Try`]; a failure carries the [`TryError`].
///
/// Splitting a delayed `Try` evaluates it. A chain started with
/// [`begin`](super::begin) or [`Step::new`](super::Step::new) therefore runs
/// a delayed first value immediately, and each `then` runs the delayed value
/// it returns before the next step, not when the final result is observed.
#[derive(Debug, Clone, Copy)]
pub enum TryFamily {}

impl Family for TryFamily {
    type Of<T> = Try<T>;
    type Failure = TryError;

    #[inline]
    fn into_result<T>(value: Try<T>) -> Result<T, TryError> {
        value.into_result()
    }

    #[inline]
    fn from_result<T>(result: Result<T, TryError>) -> Try<T> {
        result.into()
    }
}
