//! Semigroup - an associative binary operation, as a value.
//!
//! A semigroup here is an *instance value* rather than a property of a type:
//! `i32` has both [`INT_ADDITION`](super::INT_ADDITION) and
//! [`INT_MULTIPLICATION`](super::INT_MULTIPLICATION), and callers choose one
//! by passing it. Instances are mostly zero-sized, and a reference to an
//! instance is itself an instance.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! s.append(s.append(a, b), c) == s.append(a, s.append(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fugue::typeclass::{Semigroup, max_semigroup, semigroup};
//!
//! let longest = semigroup(|a: String, b: String| if b.len() > a.len() { b } else { a });
//! assert_eq!(longest.append("ab".to_string(), "abc".to_string()), "abc");
//!
//! assert_eq!(max_semigroup().sum_non_empty(3, [7, 1]), 7);
//! ```

use std::marker::PhantomData;
use std::ops::{Add, Mul};
use std::rc::Rc;

use num_traits::{WrappingAdd, WrappingMul};

use crate::control::Either;

/// An associative binary operation on `A`.
pub trait Semigroup<A> {
    /// Combines two values.
    #[must_use]
    fn append(&self, a1: A, a2: A) -> A;

    /// Combines `value` with itself `count` times.
    ///
    /// `append_n(x, 1)` returns `x`; `append_n(x, 3)` returns
    /// `append(append(x, x), x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::typeclass::{Semigroup, STRING};
    ///
    /// assert_eq!(STRING.append_n("ab".to_string(), 3), "ababab");
    /// ```
    #[must_use]
    fn append_n(&self, value: A, count: usize) -> A
    where
        A: Clone,
    {
        assert!(count > 0, "append_n requires count > 0");

        let mut result = value.clone();
        for _ in 1..count {
            result = self.append(result, value.clone());
        }
        result
    }

    /// Combines `head` with every element of `tail`, left to right.
    #[must_use]
    fn sum_non_empty<I>(&self, head: A, tail: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        tail.into_iter()
            .fold(head, |accumulator, element| self.append(accumulator, element))
    }
}

impl<A, S> Semigroup<A> for &S
where
    S: Semigroup<A> + ?Sized,
{
    #[inline]
    fn append(&self, a1: A, a2: A) -> A {
        (**self).append(a1, a2)
    }
}

// =============================================================================
// Factory
// =============================================================================

/// A semigroup backed by a binary function. Created by [`semigroup`].
#[derive(Clone, Copy)]
pub struct SemigroupOf<F> {
    append: F,
}

/// Builds a semigroup from an associative binary function.
///
/// Associativity is the caller's obligation.
pub const fn semigroup<A, F>(append: F) -> SemigroupOf<F>
where
    F: Fn(A, A) -> A,
{
    SemigroupOf { append }
}

impl<A, F> Semigroup<A> for SemigroupOf<F>
where
    F: Fn(A, A) -> A,
{
    #[inline]
    fn append(&self, a1: A, a2: A) -> A {
        (self.append)(a1, a2)
    }
}

// =============================================================================
// Numeric instances
// =============================================================================

/// Addition over `T`. The monoid identity is zero.
#[derive(Debug, Clone, Copy)]
pub struct Addition<T>(PhantomData<fn() -> T>);

impl<T> Addition<T> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Addition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Add<Output = T>> Semigroup<T> for Addition<T> {
    #[inline]
    fn append(&self, a1: T, a2: T) -> T {
        a1 + a2
    }
}

/// Multiplication over `T`. The monoid identity is one.
#[derive(Debug, Clone, Copy)]
pub struct Multiplication<T>(PhantomData<fn() -> T>);

impl<T> Multiplication<T> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Multiplication<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Mul<Output = T>> Semigroup<T> for Multiplication<T> {
    #[inline]
    fn append(&self, a1: T, a2: T) -> T {
        a1 * a2
    }
}

/// Two's-complement wrapping addition over a fixed-width integer `T`.
///
/// Backs the `i32` and `i64` registry instances, so overflow wraps in
/// every build profile instead of panicking in debug builds.
#[derive(Debug, Clone, Copy)]
pub struct WrappingAddition<T>(PhantomData<fn() -> T>);

impl<T> WrappingAddition<T> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for WrappingAddition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WrappingAdd> Semigroup<T> for WrappingAddition<T> {
    #[inline]
    fn append(&self, a1: T, a2: T) -> T {
        a1.wrapping_add(&a2)
    }
}

/// Two's-complement wrapping multiplication over a fixed-width integer `T`.
#[derive(Debug, Clone, Copy)]
pub struct WrappingMultiplication<T>(PhantomData<fn() -> T>);

impl<T> WrappingMultiplication<T> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for WrappingMultiplication<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WrappingMul> Semigroup<T> for WrappingMultiplication<T> {
    #[inline]
    fn append(&self, a1: T, a2: T) -> T {
        a1.wrapping_mul(&a2)
    }
}

/// The larger of two values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

/// Returns the [`Max`] semigroup.
pub const fn max_semigroup() -> Max {
    Max
}

impl<A: Ord> Semigroup<A> for Max {
    #[inline]
    fn append(&self, a1: A, a2: A) -> A {
        a1.max(a2)
    }
}

/// The smaller of two values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Returns the [`Min`] semigroup.
pub const fn min_semigroup() -> Min {
    Min
}

impl<A: Ord> Semigroup<A> for Min {
    #[inline]
    fn append(&self, a1: A, a2: A) -> A {
        a1.min(a2)
    }
}

// =============================================================================
// Boolean, string and unit instances
// =============================================================================

/// Logical AND.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conjunction;

impl Semigroup<bool> for Conjunction {
    #[inline]
    fn append(&self, a1: bool, a2: bool) -> bool {
        a1 && a2
    }
}

/// Logical OR.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disjunction;

impl Semigroup<bool> for Disjunction {
    #[inline]
    fn append(&self, a1: bool, a2: bool) -> bool {
        a1 || a2
    }
}

/// Logical XOR.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusiveDisjunction;

impl Semigroup<bool> for ExclusiveDisjunction {
    #[inline]
    fn append(&self, a1: bool, a2: bool) -> bool {
        a1 ^ a2
    }
}

/// String concatenation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConcat;

impl Semigroup<String> for StringConcat {
    #[inline]
    fn append(&self, mut a1: String, a2: String) -> String {
        a1.push_str(&a2);
        a1
    }
}

/// The only semigroup on `()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

impl Semigroup<()> for Unit {
    #[inline]
    fn append(&self, (): (), (): ()) {}
}

// =============================================================================
// Collection instances
// =============================================================================

/// `Vec` concatenation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListConcat;

impl<A> Semigroup<Vec<A>> for ListConcat {
    #[inline]
    fn append(&self, mut a1: Vec<A>, mut a2: Vec<A>) -> Vec<A> {
        a1.append(&mut a2);
        a1
    }
}

/// A boxed iterator, the carrier of [`IterableChain`].
pub type BoxIter<A> = Box<dyn Iterator<Item = A>>;

/// Lazy iterator chaining: appending never consumes either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterableChain;

impl<A: 'static> Semigroup<BoxIter<A>> for IterableChain {
    #[inline]
    fn append(&self, a1: BoxIter<A>, a2: BoxIter<A>) -> BoxIter<A> {
        Box::new(a1.chain(a2))
    }
}

// =============================================================================
// Function instances
// =============================================================================

/// A shared function, the carrier of the function instances.
pub type Function<X, B> = Rc<dyn Fn(X) -> B>;

/// Point-wise combination of function results with an inner instance.
///
/// `append(f, g)` is `|x| inner.append(f(x), g(x))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointwise<S> {
    pub(crate) inner: S,
}

/// Lifts a semigroup on `B` to functions returning `B`.
///
/// # Examples
///
/// ```rust
/// use fugue::typeclass::{Function, INT_ADDITION, Semigroup, function_semigroup};
/// use std::rc::Rc;
///
/// let double: Function<i32, i32> = Rc::new(|x| x * 2);
/// let square: Function<i32, i32> = Rc::new(|x| x * x);
/// let both = function_semigroup(INT_ADDITION).append(double, square);
/// assert_eq!(both(3), 15);
/// ```
pub const fn function_semigroup<S>(inner: S) -> Pointwise<S> {
    Pointwise { inner }
}

impl<X, B, S> Semigroup<Function<X, B>> for Pointwise<S>
where
    X: Clone + 'static,
    B: 'static,
    S: Semigroup<B> + Clone + 'static,
{
    fn append(&self, a1: Function<X, B>, a2: Function<X, B>) -> Function<X, B> {
        let inner = self.inner.clone();
        Rc::new(move |x: X| inner.append(a1(x.clone()), a2(x)))
    }
}

/// Composition of endomorphisms: `append(f, g)` applies `f`, then `g`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Composition;

impl<A: 'static> Semigroup<Function<A, A>> for Composition {
    fn append(&self, a1: Function<A, A>, a2: Function<A, A>) -> Function<A, A> {
        Rc::new(move |x: A| a2(a1(x)))
    }
}

// =============================================================================
// Option instances
// =============================================================================

/// Keeps the first `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOption;

/// Returns the [`FirstOption`] semigroup.
pub const fn first_option_semigroup() -> FirstOption {
    FirstOption
}

impl<A> Semigroup<Option<A>> for FirstOption {
    #[inline]
    fn append(&self, a1: Option<A>, a2: Option<A>) -> Option<A> {
        a1.or(a2)
    }
}

/// Keeps the last `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastOption;

/// Returns the [`LastOption`] semigroup.
pub const fn last_option_semigroup() -> LastOption {
    LastOption
}

impl<A> Semigroup<Option<A>> for LastOption {
    #[inline]
    fn append(&self, a1: Option<A>, a2: Option<A>) -> Option<A> {
        a2.or(a1)
    }
}

/// Lifts a semigroup on `A` to `Option<A>`, with `None` as identity.
///
/// Two `Some` values are appended by the inner instance; a single `Some`
/// wins over `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionLift<S> {
    pub(crate) inner: S,
}

impl<A, S> Semigroup<Option<A>> for OptionLift<S>
where
    S: Semigroup<A>,
{
    fn append(&self, a1: Option<A>, a2: Option<A>) -> Option<A> {
        match (a1, a2) {
            (Some(left), Some(right)) => Some(self.inner.append(left, right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Either instance
// =============================================================================

/// Combines `Either` values, accumulating lefts.
///
/// - `Right + Right` appends the rights with the right instance
/// - `Left + Left` appends the lefts with the left instance
/// - a `Left` and a `Right` yield the `Left`
///
/// Built by [`either_semigroup`], or by
/// [`either_monoid`](super::either_monoid) when the right instance is a
/// monoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherAccumulate<LS, RS> {
    pub(crate) left: LS,
    pub(crate) right: RS,
}

/// Builds the left-accumulating `Either` semigroup.
///
/// # Examples
///
/// ```rust
/// use fugue::control::Either;
/// use fugue::typeclass::{INT_ADDITION, ListConcat, Semigroup, either_semigroup};
///
/// let errors = either_semigroup(ListConcat, INT_ADDITION);
/// let combined = errors.append(
///     Either::<Vec<&str>, i32>::Left(vec!["a"]),
///     Either::Left(vec!["b"]),
/// );
/// assert_eq!(combined, Either::Left(vec!["a", "b"]));
/// assert_eq!(
///     errors.append(Either::Right(1), Either::Right(2)),
///     Either::<Vec<&str>, i32>::Right(3)
/// );
/// ```
pub const fn either_semigroup<LS, RS>(left: LS, right: RS) -> EitherAccumulate<LS, RS> {
    EitherAccumulate { left, right }
}

impl<L, R, LS, RS> Semigroup<Either<L, R>> for EitherAccumulate<LS, RS>
where
    LS: Semigroup<L>,
    RS: Semigroup<R>,
{
    fn append(&self, a1: Either<L, R>, a2: Either<L, R>) -> Either<L, R> {
        match (a1, a2) {
            (Either::Right(first), Either::Right(second)) => {
                Either::Right(self.right.append(first, second))
            }
            (Either::Left(first), Either::Left(second)) => {
                Either::Left(self.left.append(first, second))
            }
            (Either::Left(left), Either::Right(_)) | (Either::Right(_), Either::Left(left)) => {
                Either::Left(left)
            }
        }
    }
}
