//! Property-based tests for the Semigroup and Monoid laws.
//!
//! - **Associativity**: `append(append(a, b), c) == append(a, append(b, c))`
//! - **Left Identity**: `append(empty(), a) == a`
//! - **Right Identity**: `append(a, empty()) == a`
//!
//! Every registered instance is checked. Fixed-width integers wrap, so
//! their inputs range over the whole type; function and iterator instances
//! are compared by applying them to sampled inputs and by collecting.

use std::fmt::Debug;
use std::rc::Rc;

use fugue::control::Either;
use fugue::typeclass::{
    CONJUNCTION, DISJUNCTION, DOUBLE_ADDITION, DOUBLE_MULTIPLICATION, EXCLUSIVE_DISJUNCTION,
    Function, INT_ADDITION, INT_MULTIPLICATION, LONG_ADDITION, LONG_MULTIPLICATION, Monoid,
    STRING, Semigroup, UNIT, composition_monoid, either_monoid, first_option_monoid,
    function_monoid, iterable_monoid, last_option_monoid, list_monoid, max_semigroup,
    min_semigroup, monoid, option_monoid, semigroup,
};
use proptest::prelude::*;

fn associative<A, S>(instance: &S, a: A, b: A, c: A) -> Result<(), TestCaseError>
where
    A: Clone + PartialEq + Debug,
    S: Semigroup<A>,
{
    let left = instance.append(instance.append(a.clone(), b.clone()), c.clone());
    let right = instance.append(a, instance.append(b, c));
    prop_assert_eq!(left, right);
    Ok(())
}

fn identity<A, M>(instance: &M, value: A) -> Result<(), TestCaseError>
where
    A: Clone + PartialEq + Debug,
    M: Monoid<A>,
{
    prop_assert_eq!(instance.append(instance.empty(), value.clone()), value.clone());
    prop_assert_eq!(instance.append(value.clone(), instance.empty()), value);
    Ok(())
}

fn small_int() -> impl Strategy<Value = i32> {
    -1000..1000
}

fn whole_double() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(f64::from)
}

fn either_value() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        small_int().prop_map(Either::Right),
        "[a-z]{0,4}".prop_map(Either::Left),
    ]
}

// =============================================================================
// Numeric instances
// =============================================================================

proptest! {
    #[test]
    fn prop_int_instances(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        associative(&INT_ADDITION, a, b, c)?;
        associative(&INT_MULTIPLICATION, a, b, c)?;
        identity(&INT_ADDITION, a)?;
        identity(&INT_MULTIPLICATION, a)?;
    }

    #[test]
    fn prop_long_instances(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        associative(&LONG_ADDITION, a, b, c)?;
        associative(&LONG_MULTIPLICATION, a, b, c)?;
        identity(&LONG_ADDITION, a)?;
        identity(&LONG_MULTIPLICATION, a)?;
    }

    #[test]
    fn prop_double_instances(a in whole_double(), b in whole_double(), c in whole_double()) {
        associative(&DOUBLE_ADDITION, a, b, c)?;
        associative(&DOUBLE_MULTIPLICATION, a, b, c)?;
        identity(&DOUBLE_ADDITION, a)?;
        identity(&DOUBLE_MULTIPLICATION, a)?;
    }

    #[test]
    fn prop_max_min_associative(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        associative(&max_semigroup(), a, b, c)?;
        associative(&min_semigroup(), a, b, c)?;
    }
}

#[cfg(feature = "bigint")]
proptest! {
    #[test]
    fn prop_bigint_instances(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        use fugue::typeclass::{BIGINT_ADDITION, BIGINT_MULTIPLICATION};
        use num_bigint::BigInt;

        let (a, b, c) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));
        associative(&BIGINT_ADDITION, a.clone(), b.clone(), c.clone())?;
        associative(&BIGINT_MULTIPLICATION, a.clone(), b, c)?;
        identity(&BIGINT_ADDITION, a.clone())?;
        identity(&BIGINT_MULTIPLICATION, a)?;
    }
}

// =============================================================================
// Boolean, string and unit instances
// =============================================================================

proptest! {
    #[test]
    fn prop_boolean_instances(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        associative(&CONJUNCTION, a, b, c)?;
        associative(&DISJUNCTION, a, b, c)?;
        associative(&EXCLUSIVE_DISJUNCTION, a, b, c)?;
        identity(&CONJUNCTION, a)?;
        identity(&DISJUNCTION, a)?;
        identity(&EXCLUSIVE_DISJUNCTION, a)?;
    }

    #[test]
    fn prop_string_instance(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        associative(&STRING, a.clone(), b, c)?;
        identity(&STRING, a)?;
    }

    #[test]
    fn prop_string_join_matches_fold(values in prop::collection::vec(".{0,4}", 0..6)) {
        let folded = values
            .iter()
            .cloned()
            .fold(STRING.empty(), |accumulator, value| STRING.append(accumulator, value));
        prop_assert_eq!(STRING.join(values), folded);
    }
}

#[test]
fn unit_instance() {
    identity(&UNIT, ()).unwrap();
}

// =============================================================================
// Collection and Option instances
// =============================================================================

proptest! {
    #[test]
    fn prop_list_instance(
        a in prop::collection::vec(any::<u8>(), 0..5),
        b in prop::collection::vec(any::<u8>(), 0..5),
        c in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        associative(&list_monoid(), a.clone(), b, c)?;
        identity(&list_monoid(), a)?;
    }

    #[test]
    fn prop_option_instances(
        a in prop::option::of(small_int()),
        b in prop::option::of(small_int()),
        c in prop::option::of(small_int()),
    ) {
        associative(&first_option_monoid(), a, b, c)?;
        associative(&last_option_monoid(), a, b, c)?;
        associative(&option_monoid(INT_ADDITION), a, b, c)?;
        identity(&first_option_monoid(), a)?;
        identity(&last_option_monoid(), a)?;
        identity(&option_monoid(INT_ADDITION), a)?;
    }

    #[test]
    fn prop_either_instance(a in either_value(), b in either_value(), c in either_value()) {
        let instance = either_monoid(STRING, INT_ADDITION);
        associative(&instance, a.clone(), b, c)?;
        identity(&instance, a)?;
    }

    #[test]
    fn prop_factory_monoid(a in any::<u16>(), b in any::<u16>(), c in any::<u16>()) {
        let bitwise_or = monoid(semigroup(|x: u16, y: u16| x | y), 0u16);
        associative(&bitwise_or, a, b, c)?;
        identity(&bitwise_or, a)?;
    }
}

// =============================================================================
// Composed monoid
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_monoid_is_component_wise(
        a in (small_int(), small_int()),
        b in (small_int(), small_int()),
    ) {
        let pairs = INT_ADDITION.compose_monoid(INT_MULTIPLICATION);
        prop_assert_eq!(
            pairs.append(a, b),
            (INT_ADDITION.append(a.0, b.0), INT_MULTIPLICATION.append(a.1, b.1))
        );
        identity(&pairs, a)?;
    }
}

// =============================================================================
// Function and iterator instances
// =============================================================================

/// An affine map `x * scale + offset`, wrapping on overflow.
fn affine(scale: i32, offset: i32) -> Function<i32, i32> {
    Rc::new(move |x: i32| x.wrapping_mul(scale).wrapping_add(offset))
}

fn coefficients() -> impl Strategy<Value = (i32, i32)> {
    (-50i32..50, -50i32..50)
}

fn sample() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..5)
}

proptest! {
    #[test]
    fn prop_function_monoid_laws(
        f in coefficients(),
        g in coefficients(),
        h in coefficients(),
        x in any::<i32>(),
    ) {
        let instance = function_monoid(INT_ADDITION);
        let f = affine(f.0, f.1);
        let g = affine(g.0, g.1);
        let h = affine(h.0, h.1);

        let left = instance.append(instance.append(f.clone(), g.clone()), h.clone());
        let right = instance.append(f.clone(), instance.append(g, h));
        prop_assert_eq!(left(x), right(x));

        prop_assert_eq!(instance.append(instance.empty(), f.clone())(x), f(x));
        prop_assert_eq!(instance.append(f.clone(), instance.empty())(x), f(x));
    }

    #[test]
    fn prop_composition_monoid_laws(
        f in coefficients(),
        g in coefficients(),
        h in coefficients(),
        x in any::<i32>(),
    ) {
        let instance = composition_monoid();
        let f = affine(f.0, f.1);
        let g = affine(g.0, g.1);
        let h = affine(h.0, h.1);

        let left = instance.append(instance.append(f.clone(), g.clone()), h.clone());
        let right = instance.append(f.clone(), instance.append(g.clone(), h.clone()));
        prop_assert_eq!(left(x), right(x));
        prop_assert_eq!(left(x), h(g(f(x))));

        prop_assert_eq!(instance.append(instance.empty(), f.clone())(x), f(x));
        prop_assert_eq!(instance.append(f.clone(), instance.empty())(x), f(x));
    }

    #[test]
    fn prop_iterable_monoid_laws(a in sample(), b in sample(), c in sample()) {
        let instance = iterable_monoid();
        let boxed = |values: &Vec<u8>| -> fugue::typeclass::BoxIter<u8> {
            Box::new(values.clone().into_iter())
        };

        let left: Vec<u8> = instance
            .append(instance.append(boxed(&a), boxed(&b)), boxed(&c))
            .collect();
        let right: Vec<u8> = instance
            .append(boxed(&a), instance.append(boxed(&b), boxed(&c)))
            .collect();
        prop_assert_eq!(&left, &right);

        let with_left_identity: Vec<u8> = instance.append(instance.empty(), boxed(&a)).collect();
        let with_right_identity: Vec<u8> = instance.append(boxed(&a), instance.empty()).collect();
        prop_assert_eq!(&with_left_identity, &a);
        prop_assert_eq!(&with_right_identity, &a);
    }
}
