//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! [`TypeConstructor`] names the constructor through a GAT so that
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) can be written once
//! for `Option`, `Either<L, _>` and `Try`.
//!
//! # Example
//!
//! ```rust
//! use fugue::control::Either;
//! use fugue::typeclass::TypeConstructor;
//!
//! fn rebrand<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! assert_eq!(rebrand(Some(1)), None::<String>);
//!
//! type Parsed = <Either<String, i32> as TypeConstructor>::WithType<bool>;
//! let parsed: Parsed = Either::Right(true);
//! assert!(parsed.is_right());
//! ```

use crate::control::{Either, Try};

/// A type constructor applied to an inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

/// Right-biased: the left type is part of the constructor.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<A> TypeConstructor for Try<A> {
    type Inner = A;
    type WithType<B> = Try<B>;
}
