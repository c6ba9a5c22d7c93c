//! Extension operations for the standard `Option`.
//!
//! The standard library already provides `map`, `and_then` and `filter`,
//! all of which skip their function on `None`. [`OptionExt`] adds the
//! remaining operations of the sum-type core: exhaustive `fold`, a fallible
//! `get`, `get_or_else`, and conversion into [`Either`].
//!
//! # Examples
//!
//! ```rust
//! use fugue::control::{Either, OptionExt};
//!
//! let present = Some(3);
//! assert_eq!(present.fold(|| 0, |n| n * 2), 6);
//! assert_eq!(present.to_either(|| "missing"), Either::Right(3));
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.get_or_else(|| 7), 7);
//! assert!(absent.get().is_err());
//! ```

use super::Either;
use crate::error::EmptyValueError;

/// Additional sum-type operations for [`Option`].
pub trait OptionExt<A>: Sized {
    /// Applies `on_none` to `None` or `on_some` to the present value.
    ///
    /// Exactly one of the two functions is invoked.
    fn fold<Z, N, S>(self, on_none: N, on_some: S) -> Z
    where
        N: FnOnce() -> Z,
        S: FnOnce(A) -> Z;

    /// Returns the present value, or [`EmptyValueError`] for `None`.
    fn get(self) -> Result<A, EmptyValueError>;

    /// Returns the present value, or the supplier's value for `None`.
    fn get_or_else<S>(self, supplier: S) -> A
    where
        S: FnOnce() -> A;

    /// Converts into an [`Either`], using `left_supplier` for `None`.
    fn to_either<L, S>(self, left_supplier: S) -> Either<L, A>
    where
        S: FnOnce() -> L;
}

impl<A> OptionExt<A> for Option<A> {
    #[inline]
    fn fold<Z, N, S>(self, on_none: N, on_some: S) -> Z
    where
        N: FnOnce() -> Z,
        S: FnOnce(A) -> Z,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn get(self) -> Result<A, EmptyValueError> {
        self.ok_or(EmptyValueError::new("Option", "None"))
    }

    #[inline]
    fn get_or_else<S>(self, supplier: S) -> A
    where
        S: FnOnce() -> A,
    {
        self.unwrap_or_else(supplier)
    }

    #[inline]
    fn to_either<L, S>(self, left_supplier: S) -> Either<L, A>
    where
        S: FnOnce() -> L,
    {
        match self {
            Some(value) => Either::Right(value),
            None => Either::Left(left_supplier()),
        }
    }
}
