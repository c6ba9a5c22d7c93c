//! Thread-safe, at-most-once evaluation cell used by [`Try::delayed`](super::Try::delayed).
//!
//! The cell moves through three states:
//!
//! - **pending**: the computation is stored and no outcome exists yet
//! - **ready**: the computation ran once and its outcome is cached
//! - **poisoned**: the computation panicked; every later access panics
//!
//! Concurrent observers race to a [`OnceLock`]; exactly one of them runs the
//! computation and the others block until the outcome is cached. The pending
//! computation sits behind a [`parking_lot::Mutex`] only so that the single
//! initializing thread can take the `FnOnce` out of a shared reference.
//!
//! Calling back into the same cell from inside its own computation deadlocks.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::error::TryError;

type Computation<A> = Box<dyn FnOnce() -> Result<A, TryError> + Send + 'static>;

const POISONED_MESSAGE: &str = "Try::delayed: computation panicked during a previous evaluation";

pub(crate) struct Deferred<A> {
    outcome: OnceLock<Result<A, TryError>>,
    computation: Mutex<Option<Computation<A>>>,
}

impl<A> Deferred<A> {
    pub(crate) fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<A, TryError> + Send + 'static,
    {
        Self {
            outcome: OnceLock::new(),
            computation: Mutex::new(Some(Box::new(computation))),
        }
    }

    /// Runs the computation on first call and returns the cached outcome.
    ///
    /// # Panics
    ///
    /// Panics if the computation panicked on an earlier call.
    pub(crate) fn force(&self) -> &Result<A, TryError> {
        self.outcome.get_or_init(|| {
            let computation = self.computation.lock().take();
            run(computation)
        })
    }

    /// Consumes the cell, evaluating it first if nobody has observed it yet.
    ///
    /// # Panics
    ///
    /// Panics if the computation panicked on an earlier call.
    pub(crate) fn into_outcome(mut self) -> Result<A, TryError> {
        match self.outcome.take() {
            Some(outcome) => outcome,
            None => run(self.computation.get_mut().take()),
        }
    }

    /// Returns the cached outcome without evaluating.
    pub(crate) fn peek(&self) -> Option<&Result<A, TryError>> {
        self.outcome.get()
    }
}

fn run<A>(computation: Option<Computation<A>>) -> Result<A, TryError> {
    match computation {
        Some(computation) => {
            tracing::trace!("evaluating delayed Try");
            computation()
        }
        None => {
            tracing::error!("{POISONED_MESSAGE}");
            panic!("{POISONED_MESSAGE}");
        }
    }
}
