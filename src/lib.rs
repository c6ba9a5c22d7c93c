//! # fugue
//!
//! Functional sum types and algebraic structures for Rust.
//!
//! ## Overview
//!
//! - **Sum types**: [`Option`] extensions, right-biased [`Either`](control::Either),
//!   and [`Try`](control::Try) for computations that may fail, with eager
//!   or memoized lazy evaluation
//! - **Type classes**: `Functor`, `Applicative` and `Monad` over all three
//! - **Algebraic structures**: value-level `Semigroup` and `Monoid`
//!   instances (`INT_ADDITION`, `STRING`, `option_monoid`, ...)
//! - **Step builders**: flat chains of up to six dependent computations
//!
//! ## Feature Flags
//!
//! - `bigint` (default): `BIGINT_ADDITION` and `BIGINT_MULTIPLICATION`
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fugue::prelude::*;
//!
//! let parsed = Try::of(|| "12".parse::<i32>());
//! let total = begin(parsed)
//!     .then(|n| Try::success(n * 2))
//!     .yields(|n, doubled| INT_ADDITION.join([n, doubled]));
//! assert_eq!(total.get(), Ok(36));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fugue::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::step::*;
    pub use crate::typeclass::*;
}

pub mod control;
pub mod error;
pub mod step;
pub mod typeclass;
