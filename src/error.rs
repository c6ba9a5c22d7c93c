//! Error types shared by the sum types.
//!
//! - [`EmptyValueError`]: returned by `get` when the value is absent or
//!   unsuccessful (`None`, `Left`, `Failure`).
//! - [`TryError`]: the error carried by a failed [`Try`](crate::control::Try).

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Boxed error accepted wherever a computation may fail.
///
/// Every `E: Error + Send + Sync + 'static`, `String` and `&str` converts into
/// this type, so closures passed to [`Try::of`](crate::control::Try::of) can
/// return any of them.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Returned when a direct-unwrap accessor is called on an unsuccessful variant.
///
/// # Examples
///
/// ```rust
/// use fugue::control::OptionExt;
/// use fugue::error::EmptyValueError;
///
/// let error = None::<i32>.get().unwrap_err();
/// assert_eq!(error, EmptyValueError { type_name: "Option", variant: "None" });
/// assert_eq!(error.to_string(), "Option::get called on None");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{type_name}::get called on {variant}")]
pub struct EmptyValueError {
    /// The sum type the accessor was called on.
    pub type_name: &'static str,
    /// The unsuccessful variant that held no value.
    pub variant: &'static str,
}

impl EmptyValueError {
    pub(crate) const fn new(type_name: &'static str, variant: &'static str) -> Self {
        Self {
            type_name,
            variant,
        }
    }
}

/// The error captured by a failed `Try`.
///
/// `TryError` is a cheaply cloneable handle to the original error. Two
/// handles compare equal only when they point to the same captured error,
/// so a failure that is passed through `map`/`flat_map` stays equal to
/// itself while two independently raised errors with the same message do not.
///
/// `Display` and `source` are those of the captured error.
///
/// # Examples
///
/// ```rust
/// use fugue::error::TryError;
/// use std::io;
///
/// let error = TryError::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
/// assert_eq!(error.message(), "missing");
/// assert!(error.downcast_ref::<io::Error>().is_some());
///
/// let copy = error.clone();
/// assert_eq!(copy, error);
/// assert_ne!(TryError::msg("missing"), error);
/// ```
#[derive(Clone, thiserror::Error)]
#[error(transparent)]
pub struct TryError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl TryError {
    /// Captures an error.
    ///
    /// Passing a `TryError` (boxed or not) returns the same handle instead of
    /// wrapping it a second time.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        match error.into().downcast::<Self>() {
            Ok(existing) => *existing,
            Err(other) => Self {
                inner: Arc::from(other),
            },
        }
    }

    /// Creates an error from a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::new(message.into())
    }

    /// Returns the display text of the captured error.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns the captured error as `E` if it has that concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns the captured error as a trait object.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Debug for TryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("TryError").field(&self.inner).finish()
    }
}

impl PartialEq for TryError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for TryError {}
