//! Integration tests for the standard semigroup and monoid instances.

use std::rc::Rc;

use fugue::control::Either;
use fugue::typeclass::{
    BoxIter, CONJUNCTION, DISJUNCTION, EXCLUSIVE_DISJUNCTION, Function, INT_ADDITION,
    INT_MULTIPLICATION, LONG_MULTIPLICATION, ListConcat, Monoid, STRING, Semigroup,
    composition_monoid, either_monoid, either_semigroup, first_option_monoid, function_monoid,
    function_semigroup, iterable_monoid, last_option_monoid, list_monoid, option_monoid,
};
use rstest::rstest;

// =============================================================================
// Registry
// =============================================================================

#[rstest]
fn compose_monoid_combines_pairs_independently() {
    let pairs = INT_ADDITION.compose_monoid(INT_MULTIPLICATION);
    assert_eq!(pairs.append((2, 3), (4, 5)), (6, 15));
}

#[rstest]
fn compose_monoid_join_over_many_pairs() {
    let pairs = INT_ADDITION.compose_monoid(INT_MULTIPLICATION);
    assert_eq!(pairs.join([(1, 2), (3, 4), (5, 6)]), (9, 48));
    assert_eq!(pairs.join(Vec::new()), (0, 1));
}

#[rstest]
#[case(vec![], true, false, false)]
#[case(vec![true, true], true, true, false)]
#[case(vec![true, false, true], false, true, false)]
#[case(vec![false, true], false, true, true)]
fn boolean_joins(
    #[case] values: Vec<bool>,
    #[case] all: bool,
    #[case] any: bool,
    #[case] odd: bool,
) {
    assert_eq!(CONJUNCTION.join(values.clone()), all);
    assert_eq!(DISJUNCTION.join(values.clone()), any);
    assert_eq!(EXCLUSIVE_DISJUNCTION.join(values), odd);
}

#[rstest]
fn string_join_concatenates_in_order() {
    let words = ["fu", "g", "ue"].map(String::from);
    assert_eq!(STRING.join(words), "fugue");
}

#[rstest]
fn multiply_repeats_value() {
    assert_eq!(LONG_MULTIPLICATION.multiply(2, 10), 1024);
    assert_eq!(STRING.multiply("ab".to_string(), 0), "");
    assert_eq!(list_monoid().multiply(vec![1], 3), vec![1, 1, 1]);
}

#[rstest]
fn fixed_width_instances_wrap_instead_of_panicking() {
    assert_eq!(INT_ADDITION.append(i32::MAX, 1), i32::MIN);
    assert_eq!(INT_MULTIPLICATION.join([65_536, 65_536]), 0);
    assert_eq!(LONG_MULTIPLICATION.multiply(1 << 32, 2), 0);
}

#[rstest]
fn sum_non_empty_starts_from_head() {
    assert_eq!(INT_MULTIPLICATION.sum_non_empty(2, [3, 4]), 24);
    assert_eq!(INT_MULTIPLICATION.sum_non_empty(2, []), 2);
}

// =============================================================================
// Factories
// =============================================================================

#[rstest]
#[case(Some(2), Some(3), Some(5))]
#[case(Some(2), None, Some(2))]
#[case(None, Some(3), Some(3))]
#[case(None, None, None)]
fn option_monoid_appends_present_values(
    #[case] a: Option<i32>,
    #[case] b: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(option_monoid(INT_ADDITION).append(a, b), expected);
}

#[rstest]
fn first_and_last_option_join() {
    let values = [None, Some(1), None, Some(2), None];
    assert_eq!(first_option_monoid().join(values), Some(1));
    assert_eq!(last_option_monoid().join(values), Some(2));
}

#[rstest]
fn either_semigroup_accumulates_lefts() {
    let errors = either_semigroup(ListConcat, INT_ADDITION);
    let combined = errors.sum_non_empty(
        Either::Left(vec!["first"]),
        [Either::Right(1), Either::Left(vec!["second"]), Either::Right(2)],
    );
    assert_eq!(combined, Either::Left(vec!["first", "second"]));
}

#[rstest]
fn either_monoid_sums_rights() {
    let instance = either_monoid(ListConcat, INT_ADDITION);
    let values: Vec<Either<Vec<&str>, i32>> = vec![Either::Right(1), Either::Right(2)];
    assert_eq!(instance.join(values), Either::Right(3));
    assert_eq!(instance.join(Vec::new()), Either::<Vec<&str>, i32>::Right(0));
}

#[rstest]
fn function_monoid_combines_results_pointwise() {
    let length: Function<String, String> = Rc::new(|s: String| s.len().to_string());
    let upper: Function<String, String> = Rc::new(|s: String| s.to_uppercase());
    let described = function_monoid(STRING).join([length, upper]);
    assert_eq!(described("abc".to_string()), "3ABC");

    let combined = function_semigroup(INT_ADDITION).append(
        Rc::new(|x: i32| x) as Function<i32, i32>,
        Rc::new(|x: i32| x * 10),
    );
    assert_eq!(combined(2), 22);
}

#[rstest]
fn composition_monoid_identity_and_order() {
    let add: Function<i32, i32> = Rc::new(|x| x + 3);
    let square: Function<i32, i32> = Rc::new(|x| x * x);
    let pipeline = composition_monoid().join([add, square]);
    assert_eq!(pipeline(1), 16);

    let identity: Function<i32, i32> = composition_monoid().empty();
    assert_eq!(identity(7), 7);
}

#[rstest]
fn iterable_monoid_chains_lazily() {
    let parts: Vec<BoxIter<u32>> = vec![
        Box::new(0..2),
        Box::new(std::iter::empty()),
        Box::new((10..).step_by(10)),
    ];
    let chained = iterable_monoid().join(parts);
    assert_eq!(chained.take(4).collect::<Vec<_>>(), vec![0, 1, 10, 20]);
}
