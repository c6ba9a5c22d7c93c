//! Type classes over the sum types and the algebraic-structure instances.
//!
//! - [`Functor`]: mapping over the successful value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`]: an associative binary operation, as a value
//! - [`Monoid`]: a semigroup with an identity element, as a value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The
//! [`TypeConstructor`] trait uses Generic Associated Types to name the
//! constructor of `Option<_>`, `Either<L, _>` and `Try<_>` so the functor
//! hierarchy can be written once.
//!
//! ## Instances as values
//!
//! `Semigroup` and `Monoid` are implemented by *instance values* rather than
//! by the carrier type, so one type can have several instances:
//!
//! ```rust
//! use fugue::typeclass::{INT_ADDITION, INT_MULTIPLICATION, Monoid};
//!
//! let values = [2, 3, 4];
//! assert_eq!(INT_ADDITION.join(values), 9);
//! assert_eq!(INT_MULTIPLICATION.join(values), 24);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::{
    CONJUNCTION, DISJUNCTION, DOUBLE_ADDITION, DOUBLE_MULTIPLICATION, EXCLUSIVE_DISJUNCTION,
    INT_ADDITION, INT_MULTIPLICATION, LONG_ADDITION, LONG_MULTIPLICATION, Monoid, MonoidOf,
    ProductMonoid, STRING, UNIT, composition_monoid, either_monoid, first_option_monoid,
    function_monoid, iterable_monoid, last_option_monoid, list_monoid, monoid, option_monoid,
};
#[cfg(feature = "bigint")]
pub use monoid::{BIGINT_ADDITION, BIGINT_MULTIPLICATION};
pub use semigroup::{
    Addition, BoxIter, Composition, Conjunction, Disjunction, EitherAccumulate,
    ExclusiveDisjunction, FirstOption, Function, IterableChain, LastOption, ListConcat, Max, Min,
    Multiplication, OptionLift, Pointwise, Semigroup, SemigroupOf, StringConcat, Unit,
    WrappingAddition, WrappingMultiplication, either_semigroup, first_option_semigroup, function_semigroup, last_option_semigroup,
    max_semigroup, min_semigroup, semigroup,
};
