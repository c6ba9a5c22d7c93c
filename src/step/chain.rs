//! The step builder and its per-arity operations.

use std::fmt;

use super::family::{Family, OptionFamily};

/// A chain of up to six dependent computations in one sum-type family.
///
/// `T` is the tuple of values accumulated so far, from `(T1,)` to
/// `(T1, T2, T3, T4, T5, T6)`. The builder holds either that tuple or the
/// first failure produced along the chain; once a failure is recorded no
/// later function, predicate or supplier is invoked.
pub struct Step<K: Family, T> {
    state: Result<T, K::Failure>,
}

impl<K: Family, A> Step<K, (A,)> {
    /// Starts a chain from a single sum value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::step::{OptionFamily, Step};
    ///
    /// let total = Step::<OptionFamily, _>::new(Some(2))
    ///     .then(|a| Some(a * 10))
    ///     .yields(|a, b| a + b);
    /// assert_eq!(total, Some(22));
    /// ```
    pub fn new(value: K::Of<A>) -> Self {
        Self {
            state: K::into_result(value).map(|a| (a,)),
        }
    }
}

impl<K: Family, T> Step<K, T> {
    /// Returns `true` while no failure has been recorded.
    #[inline]
    pub const fn is_successful(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns the accumulated values or the first failure.
    #[inline]
    pub fn into_result(self) -> Result<T, K::Failure> {
        self.state
    }
}

impl<K, T> Clone for Step<K, T>
where
    K: Family,
    T: Clone,
    K::Failure: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<K, T> fmt::Debug for Step<K, T>
where
    K: Family,
    T: fmt::Debug,
    K::Failure: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Step").field("state", &self.state).finish()
    }
}

// =============================================================================
// Per-arity operations
// =============================================================================

/// `filter_or`, `filter` and `yields` for one tuple shape.
macro_rules! impl_step_terminal {
    ($($value:ident : $ty:ident),+) => {
        impl<K: Family, $($ty),+> Step<K, ($($ty,)+)> {
            /// Turns the chain unsuccessful with `on_failure()` when
            /// `predicate` rejects the accumulated values.
            ///
            /// Neither function is invoked on an unsuccessful chain, and
            /// `on_failure` is invoked only on rejection.
            pub fn filter_or<P, S>(self, predicate: P, on_failure: S) -> Self
            where
                P: FnOnce($(&$ty),+) -> bool,
                S: FnOnce() -> K::Failure,
            {
                let state = match self.state {
                    Ok(($($value,)+)) => {
                        if predicate($(&$value),+) {
                            Ok(($($value,)+))
                        } else {
                            Err(on_failure())
                        }
                    }
                    Err(failure) => Err(failure),
                };
                Self { state }
            }

            /// Projects the accumulated values through `function`, or returns
            /// the first failure without invoking it.
            pub fn yields<Z, F>(self, function: F) -> K::Of<Z>
            where
                F: FnOnce($($ty),+) -> Z,
            {
                K::from_result(self.state.map(|($($value,)+)| function($($value),+)))
            }
        }

        impl<$($ty),+> Step<OptionFamily, ($($ty,)+)> {
            /// Turns the chain into `None` when `predicate` rejects the
            /// accumulated values.
            pub fn filter<P>(self, predicate: P) -> Self
            where
                P: FnOnce($(&$ty),+) -> bool,
            {
                self.filter_or(predicate, || ())
            }
        }
    };
}

/// `then` and `then_with` for one tuple shape that can still grow.
macro_rules! impl_step_then {
    ($($value:ident : $ty:ident),+) => {
        impl<K: Family, $($ty),+> Step<K, ($($ty,)+)> {
            /// Runs `function` on the accumulated values and appends its
            /// successful result.
            ///
            /// `function` is not invoked on an unsuccessful chain; an
            /// unsuccessful result becomes the chain's failure.
            pub fn then<N, F>(self, function: F) -> Step<K, ($($ty,)+ N)>
            where
                F: FnOnce($(&$ty),+) -> K::Of<N>,
            {
                let state = match self.state {
                    Ok(($($value,)+)) => {
                        K::into_result(function($(&$value),+)).map(|next| ($($value,)+ next))
                    }
                    Err(failure) => Err(failure),
                };
                Step { state }
            }

            /// Like [`then`](Self::then), for a step that ignores the
            /// accumulated values.
            pub fn then_with<N, F>(self, supplier: F) -> Step<K, ($($ty,)+ N)>
            where
                F: FnOnce() -> K::Of<N>,
            {
                let state = match self.state {
                    Ok(($($value,)+)) => K::into_result(supplier()).map(|next| ($($value,)+ next)),
                    Err(failure) => Err(failure),
                };
                Step { state }
            }
        }
    };
}

impl_step_terminal!(value1: T1);
impl_step_terminal!(value1: T1, value2: T2);
impl_step_terminal!(value1: T1, value2: T2, value3: T3);
impl_step_terminal!(value1: T1, value2: T2, value3: T3, value4: T4);
impl_step_terminal!(value1: T1, value2: T2, value3: T3, value4: T4, value5: T5);
impl_step_terminal!(value1: T1, value2: T2, value3: T3, value4: T4, value5: T5, value6: T6);

impl_step_then!(value1: T1);
impl_step_then!(value1: T1, value2: T2);
impl_step_then!(value1: T1, value2: T2, value3: T3);
impl_step_then!(value1: T1, value2: T2, value3: T3, value4: T4);
impl_step_then!(value1: T1, value2: T2, value3: T3, value4: T4, value5: T5);
