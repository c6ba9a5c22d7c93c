//! Either type - a value that is one of two alternatives.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. `Either` is right-biased:
//! `Right` is the success channel and is the one transformed by `map`,
//! `flat_map` and `filter`, while `Left` is passed through untouched.
//!
//! # Examples
//!
//! ```rust
//! use fugue::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_left());
//!
//! let described = parse("7").fold(|error| format!("error: {error}"), |n| format!("value: {n}"));
//! assert_eq!(described, "value: 7");
//! ```

use std::fmt;

use crate::error::EmptyValueError;

/// A value that is one of two alternatives.
///
/// By convention `Left` carries failure and `Right` carries success.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use fugue::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts `&Either<L, R>` into `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the right value, or [`EmptyValueError`] for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(1);
    /// assert_eq!(right.get(), Ok(1));
    ///
    /// let left: Either<String, i32> = Either::Left("no".to_string());
    /// assert_eq!(left.get().unwrap_err().to_string(), "Either::get called on Left");
    /// ```
    #[inline]
    pub fn get(self) -> Result<R, EmptyValueError> {
        match self {
            Self::Left(_) => Err(EmptyValueError::new("Either", "Left")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the right value, or the supplier's value for a `Left`.
    ///
    /// The supplier is only invoked for a `Left`.
    #[inline]
    pub fn get_or_else<F>(self, supplier: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Right-biased Operations
    // =========================================================================

    /// Applies a function to the right value, passing a `Left` through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Applies a function returning an `Either` to the right value.
    ///
    /// The result of `function` is returned as-is; a `Left` short-circuits
    /// without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) };
    ///
    /// assert_eq!(Either::<String, i32>::Right(8).flat_map(halve), Either::Right(4));
    /// assert_eq!(Either::<String, i32>::Right(3).flat_map(halve), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Keeps a right value satisfying `predicate`, otherwise replaces it with
    /// `Left(left_supplier())`.
    ///
    /// `predicate` is never invoked on a `Left`, and `left_supplier` is only
    /// invoked when `predicate` rejects a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let positive = |n: &i32| *n > 0;
    ///
    /// let kept: Either<String, i32> = Either::Right(5);
    /// assert_eq!(kept.filter(positive, || "negative".to_string()), Either::Right(5));
    ///
    /// let rejected: Either<String, i32> = Either::Right(-5);
    /// assert_eq!(rejected.filter(positive, || "negative".to_string()), Either::Left("negative".to_string()));
    /// ```
    #[inline]
    pub fn filter<P, S>(self, predicate: P, left_supplier: S) -> Self
    where
        P: FnOnce(&R) -> bool,
        S: FnOnce() -> L,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(left_supplier())
                }
            }
            Self::Left(value) => Self::Left(value),
        }
    }

    /// Returns an iterator over the right value (zero or one element).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.right_ref().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Collects the right values of `eithers` in order, stopping at the
    /// first `Left`.
    ///
    /// Elements after the first `Left` are not pulled from the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Either;
    ///
    /// let all: Vec<Either<String, i32>> = vec![Either::Right(1), Either::Right(2)];
    /// assert_eq!(Either::sequence(all), Either::Right(vec![1, 2]));
    ///
    /// let some: Vec<Either<String, i32>> = vec![
    ///     Either::Right(1),
    ///     Either::Left("first".to_string()),
    ///     Either::Left("second".to_string()),
    /// ];
    /// assert_eq!(Either::sequence(some), Either::Left("first".to_string()));
    /// ```
    pub fn sequence<I>(eithers: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        eithers.into_iter().collect()
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Merges a nested left into the outer either.
    #[inline]
    pub fn join_left(self) -> Either<L, R> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens a nested right.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    /// Iterates over the right value; a `Left` yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L, R> FromIterator<Either<L, R>> for Either<L, Vec<R>> {
    /// Collects right values until the first `Left`, which becomes the result.
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iterator: I) -> Self {
        let mut values = Vec::new();
        for either in iterator {
            match either {
                Either::Left(value) => return Self::Left(value),
                Either::Right(value) => values.push(value),
            }
        }
        Self::Right(values)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
