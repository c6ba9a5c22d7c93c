//! Monoid - a semigroup with an identity element, as a value.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! m.append(m.empty(), a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.append(a, m.empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! m.append(m.append(a, b), c) == m.append(a, m.append(b, c))
//! ```
//!
//! # Standard instances
//!
//! | Constant | Carrier | Operation | Identity |
//! |----------|---------|-----------|----------|
//! | [`INT_ADDITION`] / [`INT_MULTIPLICATION`] | `i32` | wrapping `+` / `*` | `0` / `1` |
//! | [`LONG_ADDITION`] / [`LONG_MULTIPLICATION`] | `i64` | wrapping `+` / `*` | `0` / `1` |
//! | [`DOUBLE_ADDITION`] / [`DOUBLE_MULTIPLICATION`] | `f64` | `+` / `*` | `0.0` / `1.0` |
//! | `BIGINT_ADDITION` / `BIGINT_MULTIPLICATION` | `BigInt` | `+` / `*` | `0` / `1` |
//! | [`CONJUNCTION`] | `bool` | AND | `true` |
//! | [`DISJUNCTION`] | `bool` | OR | `false` |
//! | [`EXCLUSIVE_DISJUNCTION`] | `bool` | XOR | `false` |
//! | [`STRING`] | `String` | concatenation | `""` |
//! | [`UNIT`] | `()` | - | `()` |
//!
//! The `BigInt` instances require the `bigint` feature.
//!
//! # Examples
//!
//! ```rust
//! use fugue::typeclass::{INT_ADDITION, INT_MULTIPLICATION, Monoid, Semigroup, STRING};
//!
//! assert_eq!(INT_ADDITION.join([1, 2, 3]), 6);
//! assert_eq!(INT_MULTIPLICATION.join(Vec::new()), 1);
//!
//! let pairs = INT_ADDITION.compose_monoid(INT_MULTIPLICATION);
//! assert_eq!(pairs.append((2, 3), (4, 5)), (6, 15));
//!
//! let csv = STRING.intersperse(["a", "b", "c"].map(String::from), ",".to_string());
//! assert_eq!(csv, "a,b,c");
//! ```

use num_traits::{One, WrappingAdd, WrappingMul, Zero};

use super::semigroup::{
    Addition, BoxIter, Composition, Conjunction, Disjunction, EitherAccumulate,
    ExclusiveDisjunction, FirstOption, Function, IterableChain, LastOption, ListConcat,
    Multiplication, OptionLift, Pointwise, Semigroup, StringConcat, Unit, WrappingAddition,
    WrappingMultiplication,
};
use crate::control::Either;
use std::rc::Rc;

/// A [`Semigroup`] with an identity element.
pub trait Monoid<A>: Semigroup<A> {
    /// The identity element.
    fn empty(&self) -> A;

    /// Combines every value, left to right, starting from [`empty`](Self::empty).
    ///
    /// An empty input returns `empty()`.
    fn join<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(self.empty(), |accumulator, element| {
                self.append(accumulator, element)
            })
    }

    /// Combines `value` with itself `count` times; zero yields `empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fugue::typeclass::{INT_ADDITION, Monoid};
    ///
    /// assert_eq!(INT_ADDITION.multiply(4, 3), 12);
    /// assert_eq!(INT_ADDITION.multiply(4, 0), 0);
    /// ```
    fn multiply(&self, value: A, count: usize) -> A
    where
        A: Clone,
    {
        if count == 0 {
            self.empty()
        } else {
            self.append_n(value, count)
        }
    }

    /// Joins the values with `separator` appended between neighbours.
    fn intersperse<I>(&self, values: I, separator: A) -> A
    where
        I: IntoIterator<Item = A>,
        A: Clone,
        Self: Sized,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return self.empty();
        };
        values.fold(first, |accumulator, element| {
            self.append(self.append(accumulator, separator.clone()), element)
        })
    }

    /// Pairs this monoid with `other`, combining pairs component-wise.
    fn compose_monoid<M>(self, other: M) -> ProductMonoid<Self, M>
    where
        Self: Sized,
    {
        ProductMonoid {
            first: self,
            second: other,
        }
    }
}

impl<A, M> Monoid<A> for &M
where
    M: Monoid<A> + ?Sized,
{
    #[inline]
    fn empty(&self) -> A {
        (**self).empty()
    }
}

// =============================================================================
// Factory
// =============================================================================

/// A monoid built from a semigroup and an identity value. Created by [`monoid`].
#[derive(Debug, Clone, Copy)]
pub struct MonoidOf<S, A> {
    semigroup: S,
    empty: A,
}

/// Builds a monoid from `semigroup` and its identity element.
///
/// `empty` must be an identity for `semigroup`; this is the caller's
/// obligation.
///
/// # Examples
///
/// ```rust
/// use fugue::typeclass::{Monoid, monoid, semigroup};
///
/// let gcd = monoid(
///     semigroup(|mut a: u32, mut b: u32| {
///         while b != 0 {
///             (a, b) = (b, a % b);
///         }
///         a
///     }),
///     0,
/// );
/// assert_eq!(gcd.join([12, 18, 27]), 3);
/// ```
pub const fn monoid<S, A>(semigroup: S, empty: A) -> MonoidOf<S, A> {
    MonoidOf { semigroup, empty }
}

impl<A, S> Semigroup<A> for MonoidOf<S, A>
where
    S: Semigroup<A>,
{
    #[inline]
    fn append(&self, a1: A, a2: A) -> A {
        self.semigroup.append(a1, a2)
    }
}

impl<A, S> Monoid<A> for MonoidOf<S, A>
where
    S: Semigroup<A>,
    A: Clone,
{
    #[inline]
    fn empty(&self) -> A {
        self.empty.clone()
    }
}

/// Two monoids combined component-wise over pairs.
/// Created by [`Monoid::compose_monoid`].
#[derive(Debug, Clone, Copy)]
pub struct ProductMonoid<M1, M2> {
    first: M1,
    second: M2,
}

impl<A, B, M1, M2> Semigroup<(A, B)> for ProductMonoid<M1, M2>
where
    M1: Semigroup<A>,
    M2: Semigroup<B>,
{
    fn append(&self, (a1, b1): (A, B), (a2, b2): (A, B)) -> (A, B) {
        (self.first.append(a1, a2), self.second.append(b1, b2))
    }
}

impl<A, B, M1, M2> Monoid<(A, B)> for ProductMonoid<M1, M2>
where
    M1: Monoid<A>,
    M2: Monoid<B>,
{
    fn empty(&self) -> (A, B) {
        (self.first.empty(), self.second.empty())
    }
}

// =============================================================================
// Standard instances
// =============================================================================

impl<T> Monoid<T> for Addition<T>
where
    T: Zero,
{
    #[inline]
    fn empty(&self) -> T {
        T::zero()
    }
}

impl<T> Monoid<T> for Multiplication<T>
where
    T: One,
{
    #[inline]
    fn empty(&self) -> T {
        T::one()
    }
}

impl<T> Monoid<T> for WrappingAddition<T>
where
    T: WrappingAdd + Zero,
{
    #[inline]
    fn empty(&self) -> T {
        T::zero()
    }
}

impl<T> Monoid<T> for WrappingMultiplication<T>
where
    T: WrappingMul + One,
{
    #[inline]
    fn empty(&self) -> T {
        T::one()
    }
}

impl Monoid<bool> for Conjunction {
    #[inline]
    fn empty(&self) -> bool {
        true
    }
}

impl Monoid<bool> for Disjunction {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

impl Monoid<bool> for ExclusiveDisjunction {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

impl Monoid<String> for StringConcat {
    #[inline]
    fn empty(&self) -> String {
        String::new()
    }

    /// Collects into a single allocation.
    fn join<I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        values.into_iter().collect()
    }
}

impl Monoid<()> for Unit {
    #[inline]
    fn empty(&self) {}
}

impl<A> Monoid<Vec<A>> for ListConcat {
    #[inline]
    fn empty(&self) -> Vec<A> {
        Vec::new()
    }

    fn join<I>(&self, values: I) -> Vec<A>
    where
        I: IntoIterator<Item = Vec<A>>,
    {
        values.into_iter().flatten().collect()
    }
}

impl<A: 'static> Monoid<BoxIter<A>> for IterableChain {
    fn empty(&self) -> BoxIter<A> {
        Box::new(std::iter::empty())
    }
}

impl<X, B, M> Monoid<Function<X, B>> for Pointwise<M>
where
    X: Clone + 'static,
    B: 'static,
    M: Monoid<B> + Clone + 'static,
{
    fn empty(&self) -> Function<X, B> {
        let inner = self.inner.clone();
        Rc::new(move |_: X| inner.empty())
    }
}

impl<A: 'static> Monoid<Function<A, A>> for Composition {
    fn empty(&self) -> Function<A, A> {
        Rc::new(|value: A| value)
    }
}

impl<A> Monoid<Option<A>> for FirstOption {
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

impl<A> Monoid<Option<A>> for LastOption {
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

impl<A, S> Monoid<Option<A>> for OptionLift<S>
where
    S: Semigroup<A>,
{
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

/// The identity is `Right(right.empty())`.
impl<L, R, LS, RM> Monoid<Either<L, R>> for EitherAccumulate<LS, RM>
where
    LS: Semigroup<L>,
    RM: Monoid<R>,
{
    fn empty(&self) -> Either<L, R> {
        Either::Right(self.right.empty())
    }
}

/// Integer addition wrapping on overflow, identity `0`.
pub const INT_ADDITION: WrappingAddition<i32> = WrappingAddition::new();
/// Integer multiplication wrapping on overflow, identity `1`.
pub const INT_MULTIPLICATION: WrappingMultiplication<i32> = WrappingMultiplication::new();
/// Long addition wrapping on overflow, identity `0`.
pub const LONG_ADDITION: WrappingAddition<i64> = WrappingAddition::new();
/// Long multiplication wrapping on overflow, identity `1`.
pub const LONG_MULTIPLICATION: WrappingMultiplication<i64> = WrappingMultiplication::new();
/// Floating-point addition, identity `0.0`.
pub const DOUBLE_ADDITION: Addition<f64> = Addition::new();
/// Floating-point multiplication, identity `1.0`.
pub const DOUBLE_MULTIPLICATION: Multiplication<f64> = Multiplication::new();
/// Arbitrary-precision addition, identity `0`.
#[cfg(feature = "bigint")]
pub const BIGINT_ADDITION: Addition<num_bigint::BigInt> = Addition::new();
/// Arbitrary-precision multiplication, identity `1`.
#[cfg(feature = "bigint")]
pub const BIGINT_MULTIPLICATION: Multiplication<num_bigint::BigInt> = Multiplication::new();
/// Logical AND, identity `true`.
pub const CONJUNCTION: Conjunction = Conjunction;
/// Logical OR, identity `false`.
pub const DISJUNCTION: Disjunction = Disjunction;
/// Logical XOR, identity `false`.
pub const EXCLUSIVE_DISJUNCTION: ExclusiveDisjunction = ExclusiveDisjunction;
/// String concatenation, identity `""`.
pub const STRING: StringConcat = StringConcat;
/// The monoid on `()`.
pub const UNIT: Unit = Unit;

/// `Vec` concatenation, identity `vec![]`.
pub const fn list_monoid() -> ListConcat {
    ListConcat
}

/// Lazy iterator chaining, identity `std::iter::empty()`.
pub const fn iterable_monoid() -> IterableChain {
    IterableChain
}

/// Point-wise function combination, identity `|_| inner.empty()`.
pub const fn function_monoid<M>(inner: M) -> Pointwise<M> {
    Pointwise { inner }
}

/// Endomorphism composition (apply left, then right), identity `|a| a`.
pub const fn composition_monoid() -> Composition {
    Composition
}

/// Keeps the first `Some`, identity `None`.
pub const fn first_option_monoid() -> FirstOption {
    FirstOption
}

/// Keeps the last `Some`, identity `None`.
pub const fn last_option_monoid() -> LastOption {
    LastOption
}

/// Lifts `inner` to `Option`, identity `None`.
///
/// # Examples
///
/// ```rust
/// use fugue::typeclass::{INT_ADDITION, Monoid, option_monoid};
///
/// let sums = option_monoid(INT_ADDITION);
/// assert_eq!(sums.join([Some(1), None, Some(4)]), Some(5));
/// assert_eq!(sums.join(Vec::new()), None);
/// ```
pub const fn option_monoid<S>(inner: S) -> OptionLift<S> {
    OptionLift { inner }
}

/// Left-accumulating `Either` monoid, identity `Right(right.empty())`.
///
/// Combines like [`either_semigroup`](super::either_semigroup); the right
/// instance must also be a monoid.
///
/// # Examples
///
/// ```rust
/// use fugue::control::Either;
/// use fugue::typeclass::{INT_ADDITION, ListConcat, Monoid, Semigroup, either_monoid};
///
/// let totals = either_monoid(ListConcat, INT_ADDITION);
/// let identity: Either<Vec<&str>, i32> = totals.empty();
/// assert_eq!(identity, Either::Right(0));
/// assert_eq!(totals.append(identity, Either::Right(5)), Either::Right(5));
/// assert_eq!(
///     totals.join([Either::Right(1), Either::Left(vec!["bad"]), Either::Right(2)]),
///     Either::Left(vec!["bad"])
/// );
/// ```
pub const fn either_monoid<LS, RM>(left: LS, right: RM) -> EitherAccumulate<LS, RM> {
    EitherAccumulate { left, right }
}
