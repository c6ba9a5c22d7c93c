//! Sum types for absence, alternatives and failure.
//!
//! - [`Option`] (from `std`) with [`OptionExt`]: a value that may be absent
//! - [`Either`]: a value of one of two types, right-biased
//! - [`Try`]: the outcome of a computation that may fail, optionally lazy
//!
//! All three expose the same core vocabulary (`map`, `flat_map`, `filter`,
//! `fold`, `get`, `get_or_else`) and convert into each other.
//!
//! # Examples
//!
//! ```rust
//! use fugue::control::{Either, OptionExt, Try};
//!
//! let name: Option<&str> = Some("fugue");
//! let length: Either<String, usize> = name
//!     .map(str::len)
//!     .to_either(|| "no name".to_string());
//! assert_eq!(length, Either::Right(5));
//!
//! let doubled = Try::of(|| "21".parse::<i32>()).map(|n| n * 2);
//! assert_eq!(doubled.to_option(), Some(42));
//! ```

mod attempt;
mod deferred;
mod either;
mod option;

pub use attempt::Try;
pub use either::Either;
pub use option::OptionExt;
