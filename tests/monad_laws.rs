//! Property-based tests for the Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Every sum type is exercised with both successful and unsuccessful inputs.

use fugue::control::{Either, Try};
use fugue::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn option_half(n: i32) -> Option<i32> {
    if n % 2 == 0 { Some(n / 2) } else { None }
}

fn option_shift(n: i32) -> Option<i32> {
    n.checked_add(7)
}

fn either_half(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Right(n / 2)
    } else {
        Either::Left(format!("{n} is odd"))
    }
}

fn either_shift(n: i32) -> Either<String, i32> {
    n.checked_add(7)
        .map_or_else(|| Either::Left("overflow".to_string()), Either::Right)
}

fn try_half(n: i32) -> Try<i32> {
    if n % 2 == 0 {
        Try::success(n / 2)
    } else {
        Try::failure(format!("{n} is odd"))
    }
}

fn try_shift(n: i32) -> Try<i32> {
    Try::of(|| n.checked_add(7).ok_or("overflow"))
}

/// Compares two `Try` values by outcome, using the error message for failures.
fn same_outcome(left: Try<i32>, right: Try<i32>) -> bool {
    match (left.into_result(), right.into_result()) {
        (Ok(a), Ok(b)) => a == b,
        (Err(a), Err(b)) => a.message() == b.message(),
        _ => false,
    }
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,8}".prop_map(Either::Left),
    ]
}

fn try_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,8}")
}

fn to_try(outcome: Result<i32, String>) -> Try<i32> {
    match outcome {
        Ok(value) => Try::success(value),
        Err(message) => Try::failure(message),
    }
}

// =============================================================================
// Option<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        let lifted: Option<i32> = <Option<()>>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, option_half), option_half(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(Monad::flat_map(value, Some), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let left = Monad::flat_map(Monad::flat_map(value, option_half), option_shift);
        let right = Monad::flat_map(value, |x| Monad::flat_map(option_half(x), option_shift));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let lifted: Either<String, i32> = <Either<String, ()>>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, either_half), either_half(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(Monad::flat_map(value.clone(), Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = Monad::flat_map(Monad::flat_map(value.clone(), either_half), either_shift);
        let right = Monad::flat_map(value, |x| Monad::flat_map(either_half(x), either_shift));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_functor_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }
}

// =============================================================================
// Try<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_try_left_identity(value in any::<i32>()) {
        let lifted: Try<i32> = <Try<()>>::pure(value);
        prop_assert!(same_outcome(Monad::flat_map(lifted, try_half), try_half(value)));
    }

    #[test]
    fn prop_try_right_identity(outcome in try_strategy()) {
        let value = to_try(outcome);
        let expected = value.clone();
        prop_assert_eq!(Monad::flat_map(value, Try::success), expected);
    }

    #[test]
    fn prop_try_associativity(outcome in try_strategy()) {
        let left = Monad::flat_map(Monad::flat_map(to_try(outcome.clone()), try_half), try_shift);
        let right = Monad::flat_map(to_try(outcome), |x| Monad::flat_map(try_half(x), try_shift));
        prop_assert!(same_outcome(left, right));
    }

    #[test]
    fn prop_try_delayed_behaves_like_eager(outcome in try_strategy()) {
        let eager = to_try(outcome.clone()).map(|n| n.wrapping_mul(3));
        let delayed = Try::delayed(move || outcome).map(|n| n.wrapping_mul(3));
        prop_assert!(same_outcome(eager, delayed));
    }
}
