//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` is the shared bind of the three sum types. The step builder in
//! [`crate::step`] is a flattened, multi-value form of nested `flat_map`
//! chains.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fugue::control::Try;
//! use fugue::typeclass::Monad;
//!
//! fn halve<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     value.flat_map(|n| M::pure(n / 2))
//! }
//!
//! assert_eq!(halve(Some(10)), Some(5));
//! assert_eq!(halve(Try::success(8)).get(), Ok(4));
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Try};

/// A type class for sequencing computations where each step depends on the
/// previous successful value.
pub trait Monad: Applicative {
    /// Applies `function` to the successful value and returns its result.
    ///
    /// An unsuccessful value short-circuits without invoking `function`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first successful value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Monad for Try<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half_if_even(n: i32) -> Either<String, i32> {
        if n % 2 == 0 {
            Either::Right(n / 2)
        } else {
            Either::Left(format!("{n} is odd"))
        }
    }

    #[rstest]
    #[case(Either::Right(8), Either::Right(4))]
    #[case(Either::Right(3), Either::Left("3 is odd".to_string()))]
    #[case(Either::Left("early".to_string()), Either::Left("early".to_string()))]
    fn either_flat_map(#[case] input: Either<String, i32>, #[case] expected: Either<String, i32>) {
        assert_eq!(Monad::flat_map(input, half_if_even), expected);
    }

    #[rstest]
    fn option_then_none() {
        assert_eq!(Some(1).then(None::<i32>), None);
    }

    #[rstest]
    fn try_and_then_short_circuits() {
        let mut called = false;
        let failed: Try<i32> = Try::failure("boom");
        let result = failed.and_then(|n| {
            called = true;
            Try::success(n + 1)
        });
        assert!(result.is_failure());
        assert!(!called);
    }
}
