//! A computation that either produced a value or captured an error.
//!
//! [`Try`] has two observable variants, success and failure. A `Try` built
//! with [`Try::of`] runs its computation immediately; one built with
//! [`Try::delayed`] runs it on first observation and caches the outcome, so
//! the computation executes at most once even when the `Try` is shared
//! between threads.
//!
//! Recoverable errors are values: a computation returning `Err` becomes a
//! failure. Panics are not captured and unwind through `Try` unchanged.
//!
//! # Examples
//!
//! ```rust
//! use fugue::control::Try;
//!
//! let parsed = Try::of(|| "42".parse::<i32>()).map(|n| n + 1);
//! assert_eq!(parsed.get_or_else(|| 0), 43);
//!
//! let failed = Try::of(|| "x".parse::<i32>()).recover(|_| -1);
//! assert_eq!(failed.get_or_else(|| 0), -1);
//! ```

use std::fmt;

use super::Either;
use super::deferred::Deferred;
use crate::error::{BoxError, EmptyValueError, TryError};

/// The outcome of a computation that may fail.
///
/// # Examples
///
/// ```rust
/// use fugue::control::Try;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let lazy = Try::delayed(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok::<_, String>(10)
/// });
///
/// assert_eq!(runs.load(Ordering::SeqCst), 0);
/// assert!(lazy.is_success());
/// assert!(lazy.is_success());
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
pub struct Try<A> {
    state: State<A>,
}

enum State<A> {
    Success(A),
    Failure(TryError),
    Delayed(Box<Deferred<A>>),
}

fn capture<A, E>(outcome: Result<A, E>) -> Result<A, TryError>
where
    E: Into<BoxError>,
{
    outcome.map_err(|error| {
        let error = TryError::new(error);
        tracing::debug!(error = %error, "computation failed");
        error
    })
}

impl<A> Try<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs `computation` now and captures its outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Try;
    ///
    /// assert!(Try::of(|| "7".parse::<u8>()).is_success());
    /// assert!(Try::of(|| "-7".parse::<u8>()).is_failure());
    /// ```
    pub fn of<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<A, E>,
        E: Into<BoxError>,
    {
        Self::from_result(capture(computation()))
    }

    /// Defers `computation` until the value is first observed.
    ///
    /// The outcome is memoized: concurrent and repeated observers all see the
    /// result of a single evaluation.
    pub fn delayed<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<A, E> + Send + 'static,
        E: Into<BoxError>,
    {
        Self {
            state: State::Delayed(Box::new(Deferred::new(move || capture(computation())))),
        }
    }

    /// Creates a successful `Try`.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Creates a failed `Try`.
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            state: State::Failure(TryError::new(error)),
        }
    }

    fn from_result(outcome: Result<A, TryError>) -> Self {
        match outcome {
            Ok(value) => Self::success(value),
            Err(error) => Self {
                state: State::Failure(error),
            },
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Borrows the outcome, evaluating a delayed computation if needed.
    pub fn as_result(&self) -> Result<&A, &TryError> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
            State::Delayed(deferred) => deferred.force().as_ref(),
        }
    }

    /// Consumes the `Try` and returns its outcome.
    pub fn into_result(self) -> Result<A, TryError> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
            State::Delayed(deferred) => deferred.into_outcome(),
        }
    }

    /// Returns `true` if the computation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_result().is_ok()
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.as_result().is_err()
    }

    /// Returns `false` only for a delayed `Try` that has not run yet.
    ///
    /// Never triggers evaluation.
    pub fn is_evaluated(&self) -> bool {
        match &self.state {
            State::Delayed(deferred) => deferred.peek().is_some(),
            State::Success(_) | State::Failure(_) => true,
        }
    }

    /// Returns the value, or [`EmptyValueError`] for a failure.
    pub fn get(self) -> Result<A, EmptyValueError> {
        self.into_result()
            .map_err(|_| EmptyValueError::new("Try", "Failure"))
    }

    /// Returns the value, or the supplier's value for a failure.
    pub fn get_or_else<S>(self, supplier: S) -> A
    where
        S: FnOnce() -> A,
    {
        self.into_result().unwrap_or_else(|_| supplier())
    }

    /// Returns the captured error, if any.
    pub fn failure_ref(&self) -> Option<&TryError> {
        self.as_result().err()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a successful value.
    ///
    /// A failure is returned unchanged and `function` is not called.
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        Try::from_result(self.into_result().map(function))
    }

    /// Chains a computation that may itself fail.
    pub fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self.into_result() {
            Ok(value) => function(value),
            Err(error) => Try::from_result(Err(error)),
        }
    }

    /// Keeps a successful value only if `predicate` holds.
    ///
    /// A rejected value becomes a failure carrying the error produced by
    /// `error_supplier`. The supplier is not called otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Try;
    ///
    /// let even = Try::success(4).filter(|n| n % 2 == 0, || "odd");
    /// assert!(even.is_success());
    ///
    /// let odd = Try::success(3).filter(|n| n % 2 == 0, || "odd");
    /// assert_eq!(odd.failure_ref().map(|e| e.message()), Some("odd".to_string()));
    /// ```
    pub fn filter<P, S, E>(self, predicate: P, error_supplier: S) -> Self
    where
        P: FnOnce(&A) -> bool,
        S: FnOnce() -> E,
        E: Into<BoxError>,
    {
        match self.into_result() {
            Ok(value) => {
                if predicate(&value) {
                    Self::success(value)
                } else {
                    Self::failure(error_supplier())
                }
            }
            Err(error) => Self::from_result(Err(error)),
        }
    }

    /// Applies `on_failure` to the error or `on_success` to the value.
    pub fn fold<Z, FF, FS>(self, on_failure: FF, on_success: FS) -> Z
    where
        FF: FnOnce(TryError) -> Z,
        FS: FnOnce(A) -> Z,
    {
        match self.into_result() {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Replaces a failure with a value computed from its error.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> A,
    {
        Self::success(self.fold(function, |value| value))
    }

    /// Replaces a failure with another `Try` computed from its error.
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> Self,
    {
        match self.into_result() {
            Ok(value) => Self::success(value),
            Err(error) => function(error),
        }
    }

    /// Transforms the error of a failure.
    pub fn map_failure<F, E>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> E,
        E: Into<BoxError>,
    {
        match self.into_result() {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(function(error)),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an `Option`, discarding the error.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        self.into_result().ok()
    }

    /// Converts into an [`Either`] with the error on the left.
    #[inline]
    pub fn to_either(self) -> Either<TryError, A> {
        self.into_result().into()
    }

    /// Iterates over the successful value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_result().ok().into_iter()
    }

    /// Collects the values of all `tries`, stopping at the first failure.
    ///
    /// Elements after the first failure are never observed, so delayed ones
    /// among them are never evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::control::Try;
    ///
    /// let all = Try::sequence(vec![Try::success(1), Try::success(2)]);
    /// assert_eq!(all.get(), Ok(vec![1, 2]));
    ///
    /// let first = Try::sequence(vec![
    ///     Try::success(1),
    ///     Try::failure("FIRST"),
    ///     Try::failure("SECOND"),
    /// ]);
    /// assert_eq!(first.failure_ref().map(|e| e.message()), Some("FIRST".to_string()));
    /// ```
    pub fn sequence<I>(tries: I) -> Try<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        tries.into_iter().collect()
    }
}

impl<A> Try<Try<A>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Try<A> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<A: Clone> Clone for Try<A> {
    /// Clones the outcome, evaluating a delayed computation first.
    fn clone(&self) -> Self {
        match self.as_result() {
            Ok(value) => Self::success(value.clone()),
            Err(error) => Self::from_result(Err(error.clone())),
        }
    }
}

impl<A: PartialEq> PartialEq for Try<A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_result() == other.as_result()
    }
}

impl<A: fmt::Debug> fmt::Debug for Try<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
            State::Delayed(deferred) => match deferred.peek() {
                Some(outcome) => outcome.as_ref(),
                None => return formatter.write_str("Delayed(<pending>)"),
            },
        };
        match outcome {
            Ok(value) => formatter.debug_tuple("Success").field(value).finish(),
            Err(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<A> From<Result<A, TryError>> for Try<A> {
    fn from(outcome: Result<A, TryError>) -> Self {
        Self::from_result(outcome)
    }
}

impl<A> From<Try<A>> for Result<A, TryError> {
    fn from(attempt: Try<A>) -> Self {
        attempt.into_result()
    }
}

impl<A> FromIterator<Try<A>> for Try<Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Try<A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        for (index, attempt) in iter.into_iter().enumerate() {
            match attempt.into_result() {
                Ok(value) => values.push(value),
                Err(error) => {
                    tracing::trace!(index, "sequence stopped at first failure");
                    return Self::from_result(Err(error));
                }
            }
        }
        Self::success(values)
    }
}

impl<A> IntoIterator for Try<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Try<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>, value: i32) -> Try<i32> {
        let observed = Arc::clone(counter);
        Try::delayed(move || {
            observed.fetch_add(1, Ordering::SeqCst);
            Ok::<_, TryError>(value)
        })
    }

    #[rstest]
    fn of_captures_err_as_failure() {
        let attempt = Try::of(|| Err::<i32, _>("broken"));
        assert!(attempt.is_failure());
        assert_eq!(attempt.failure_ref().map(TryError::message).as_deref(), Some("broken"));
    }

    #[rstest]
    fn debug_does_not_force_delayed() {
        let counter = Arc::new(AtomicUsize::new(0));
        let attempt = counting(&counter, 5);

        assert_eq!(format!("{attempt:?}"), "Delayed(<pending>)");
        assert!(!attempt.is_evaluated());
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        assert!(attempt.is_success());
        assert_eq!(format!("{attempt:?}"), "Success(5)");
    }

    #[rstest]
    fn map_forces_delayed_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let attempt = counting(&counter, 2).map(|n| n * 10);
        assert_eq!(attempt.get(), Ok(20));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn clone_of_delayed_shares_single_evaluation() {
        let counter = Arc::new(AtomicUsize::new(0));
        let attempt = counting(&counter, 1);
        let copy = attempt.clone();
        assert_eq!(copy, attempt);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn map_failure_replaces_error() {
        let attempt = Try::<i32>::failure("low").map_failure(|e| format!("wrapped: {e}"));
        assert_eq!(
            attempt.failure_ref().map(TryError::message).as_deref(),
            Some("wrapped: low")
        );
    }

    #[rstest]
    fn failure_passes_through_map_with_same_error() {
        let original = TryError::msg("same");
        let attempt = Try::<i32>::from(Err(original.clone())).map(|n| n + 1);
        assert_eq!(attempt.failure_ref(), Some(&original));
    }
}
