//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(x).map2(v, |_, y| y) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).map2(pure(y), f) == pure(f(x, y))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fugue::control::{Either, Try};
//! use fugue::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Either::<String, i32>::Right(1).map2(Either::Right(2), |a, b| a + b);
//! assert_eq!(sum, Either::Right(3));
//!
//! let failed = Try::success(1).map2(Try::<i32>::failure("no"), |a, b| a + b);
//! assert!(failed.is_failure());
//! ```

use super::functor::Functor;
use crate::control::{Either, Try};

/// A type class for types that can lift a value and combine two values in
/// the same context.
///
/// When either input is unsuccessful the result is unsuccessful; the first
/// (leftmost) unsuccessful input wins.
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
    /// assert_eq!(Some(1).product(None::<&str>), None);
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Either::Left(left), _) | (Either::Right(_), Either::Left(left)) => Either::Left(left),
        }
    }
}

impl<A> Applicative for Try<A> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::success(value)
    }

    /// Observes `self` first; `other` is never evaluated when `self` failed.
    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.flat_map(|a| other.map(|b| function(a, b)))
    }
}
